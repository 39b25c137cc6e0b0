use super::view_model::AutomaticRoleDetailsViewModel;
use crate::shared::icons::icon;
use contracts::enums::{values, CodedEnum, RecursionType, RuleComparison};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn AutomaticRoleDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = AutomaticRoleDetailsViewModel::new();
    vm.load_roles();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container automatic-role-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование автоматической роли" } else { "Новая автоматическая роль" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="code">{"Код"}</label>
                    <input
                        type="text"
                        id="code"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().code
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.code = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Название"}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="role">{"Назначаемая роль"}</label>
                    <select
                        id="role"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.role_id = event_target_value(&ev));
                            }
                        }
                    >
                        <option value="">{"— выберите роль —"}</option>
                        {
                            let vm = vm_clone.clone();
                            move || {
                                let current = vm.form.get().role_id;
                                vm.roles.get().into_iter().map(|(role_id, name)| {
                                    let selected = role_id == current;
                                    view! {
                                        <option value=role_id selected=selected>{name}</option>
                                    }
                                }).collect_view()
                            }
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="recursion">{"Рекурсия по подразделениям"}</label>
                    <select
                        id="recursion"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| vm.set_recursion(&event_target_value(&ev))
                        }
                    >
                        {
                            let vm = vm_clone.clone();
                            move || {
                                let current = vm.form.get().recursion;
                                values::<RecursionType>().iter().map(|r| {
                                    view! {
                                        <option value=r.code() selected={*r == current}>
                                            {r.display_name()}
                                        </option>
                                    }
                                }).collect_view()
                            }
                        }
                    </select>
                </div>

                // Таблица правил: все условия должны выполниться одновременно
                <div class="details-section">
                    <div class="details-section__header">
                        <h4>{"Правила назначения"}</h4>
                        <button
                            class="button button--secondary button--small"
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.add_rule()
                            }
                        >
                            {icon("plus")}
                            {"Добавить правило"}
                        </button>
                    </div>

                    <table class="table__data rules-table">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Атрибут"}</th>
                                <th class="table__header-cell">{"Сравнение"}</th>
                                <th class="table__header-cell">{"Значение"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let vm = vm_clone.clone();
                                move || {
                                    let rules = vm.form.get().rules;
                                    rules.into_iter().enumerate().map(|(index, rule)| {
                                        let vm_attr = vm.clone();
                                        let vm_cmp = vm.clone();
                                        let vm_value = vm.clone();
                                        let vm_remove = vm.clone();
                                        let comparison = rule.comparison;
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">
                                                    <input
                                                        type="text"
                                                        prop:value=rule.attribute_name
                                                        placeholder="department"
                                                        on:input=move |ev| vm_attr.set_rule_attribute(index, event_target_value(&ev))
                                                    />
                                                </td>
                                                <td class="table__cell">
                                                    <select on:change=move |ev| vm_cmp.set_rule_comparison(index, &event_target_value(&ev))>
                                                        {values::<RuleComparison>().iter().map(|c| {
                                                            view! {
                                                                <option value=c.code() selected={*c == comparison}>
                                                                    {c.display_name()}
                                                                </option>
                                                            }
                                                        }).collect_view()}
                                                    </select>
                                                </td>
                                                <td class="table__cell">
                                                    <input
                                                        type="text"
                                                        prop:value=rule.value
                                                        on:input=move |ev| vm_value.set_rule_value(index, event_target_value(&ev))
                                                    />
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--secondary button--small"
                                                        on:click=move |_| vm_remove.remove_rule(index)
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }
                            }
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
