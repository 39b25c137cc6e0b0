use super::view_model::FormDefinitionDetailsViewModel;
use crate::shared::icons::icon;
use contracts::eav::PersistentType;
use contracts::enums::{values, CodedEnum};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn FormDefinitionDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = FormDefinitionDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container form-definition-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование определения формы" } else { "Новое определение формы" }
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
                        placeholder="identity-eav"
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
                    <label for="name">{"Название"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="module">{"Модуль"}</label>
                    <input
                        type="text"
                        id="module"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().module
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.module = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="entity-type">{"Тип сущности"}</label>
                    <input
                        type="text"
                        id="entity-type"
                        placeholder="identity"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().entity_type
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.entity_type = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked={
                                let vm = vm_clone.clone();
                                move || vm.form.get().main
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.main = event_target_checked(&ev));
                                }
                            }
                        />
                        {"Основная форма типа"}
                    </label>
                </div>

                <div class="details-section">
                    <div class="details-section__header">
                        <h4>{"Атрибуты"}</h4>
                        <button
                            class="button button--secondary button--small"
                            on:click={
                                let vm = vm_clone.clone();
                                move |_| vm.add_attribute()
                            }
                        >
                            {icon("plus")}
                            {"Добавить атрибут"}
                        </button>
                    </div>

                    <table class="table__data attributes-table">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell"></th>
                                <th class="table__header-cell">{"Код"}</th>
                                <th class="table__header-cell">{"Название"}</th>
                                <th class="table__header-cell">{"Тип"}</th>
                                <th class="table__header-cell">{"Множ."}</th>
                                <th class="table__header-cell">{"Обяз."}</th>
                                <th class="table__header-cell">{"Чтение"}</th>
                                <th class="table__header-cell">{"Конфид."}</th>
                                <th class="table__header-cell">{"По умолчанию"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let vm = vm_clone.clone();
                                move || {
                                    let attrs = vm.form.get().form_attributes;
                                    attrs.into_iter().enumerate().map(|(index, attr)| {
                                        let vm_up = vm.clone();
                                        let vm_code = vm.clone();
                                        let vm_name = vm.clone();
                                        let vm_type = vm.clone();
                                        let vm_multiple = vm.clone();
                                        let vm_required = vm.clone();
                                        let vm_readonly = vm.clone();
                                        let vm_confidential = vm.clone();
                                        let vm_default = vm.clone();
                                        let vm_remove = vm.clone();
                                        let current_type = attr.persistent_type.clone();
                                        let multiple_allowed = attr
                                            .persistent_type()
                                            .map(|pt| !matches!(
                                                pt,
                                                PersistentType::Boolean
                                                    | PersistentType::Date
                                                    | PersistentType::Datetime
                                                    | PersistentType::Textarea
                                                    | PersistentType::Richtextarea
                                            ))
                                            .unwrap_or(false);
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--secondary button--small"
                                                        disabled={index == 0}
                                                        on:click=move |_| vm_up.move_attribute_up(index)
                                                    >
                                                        {"↑"}
                                                    </button>
                                                </td>
                                                <td class="table__cell">
                                                    <input
                                                        type="text"
                                                        prop:value=attr.code
                                                        on:input=move |ev| vm_code.update_attribute(index, |a| a.code = event_target_value(&ev))
                                                    />
                                                </td>
                                                <td class="table__cell">
                                                    <input
                                                        type="text"
                                                        prop:value=attr.name
                                                        on:input=move |ev| vm_name.update_attribute(index, |a| a.name = event_target_value(&ev))
                                                    />
                                                </td>
                                                <td class="table__cell">
                                                    <select on:change=move |ev| vm_type.set_attribute_type(index, &event_target_value(&ev))>
                                                        {values::<PersistentType>().iter().map(|pt| {
                                                            view! {
                                                                <option value=pt.code() selected={pt.code() == current_type}>
                                                                    {pt.display_name()}
                                                                </option>
                                                            }
                                                        }).collect_view()}
                                                    </select>
                                                </td>
                                                <td class="table__cell table__cell--checkbox">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=attr.multiple
                                                        disabled={!multiple_allowed}
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            vm_multiple.update_attribute(index, |a| a.multiple = checked);
                                                        }
                                                    />
                                                </td>
                                                <td class="table__cell table__cell--checkbox">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=attr.required
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            vm_required.update_attribute(index, |a| a.required = checked);
                                                        }
                                                    />
                                                </td>
                                                <td class="table__cell table__cell--checkbox">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=attr.readonly
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            vm_readonly.update_attribute(index, |a| a.readonly = checked);
                                                        }
                                                    />
                                                </td>
                                                <td class="table__cell table__cell--checkbox">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=attr.confidential
                                                        on:change=move |ev| {
                                                            let checked = event_target_checked(&ev);
                                                            vm_confidential.update_attribute(index, |a| a.confidential = checked);
                                                        }
                                                    />
                                                </td>
                                                <td class="table__cell">
                                                    <input
                                                        type="text"
                                                        prop:value=attr.default_value.unwrap_or_default()
                                                        on:input=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            vm_default.update_attribute(index, |a| {
                                                                a.default_value = if value.is_empty() { None } else { Some(value) };
                                                            });
                                                        }
                                                    />
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--secondary button--small"
                                                        on:click=move |_| vm_remove.remove_attribute(index)
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
