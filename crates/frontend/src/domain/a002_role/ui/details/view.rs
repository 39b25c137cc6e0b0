use super::view_model::RoleDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn RoleDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = RoleDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container role-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование роли" } else { "Новая роль" }
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
                        placeholder="role-helpdesk"
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
                    <label for="priority">{"Приоритет"}</label>
                    <input
                        type="number"
                        id="priority"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().priority.to_string()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    vm.form.update(|f| f.priority = value);
                                }
                            }
                        }
                        min="0"
                    />
                </div>

                <div class="form-group form-group--checkbox">
                    <input
                        type="checkbox"
                        id="approve_remove"
                        prop:checked={
                            let vm = vm_clone.clone();
                            move || vm.form.get().approve_remove
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.approve_remove = event_target_checked(&ev));
                            }
                        }
                    />
                    <label for="approve_remove">{"Снятие роли требует подтверждения"}</label>
                </div>

                <div class="form-group form-group--checkbox">
                    <input
                        type="checkbox"
                        id="disabled"
                        prop:checked={
                            let vm = vm_clone.clone();
                            move || vm.form.get().disabled
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.disabled = event_target_checked(&ev));
                            }
                        }
                    />
                    <label for="disabled">{"Отключена"}</label>
                </div>

                <div class="form-group">
                    <label for="comment">{"Комментарий"}</label>
                    <textarea
                        id="comment"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().comment.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.comment = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        rows="3"
                    />
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
