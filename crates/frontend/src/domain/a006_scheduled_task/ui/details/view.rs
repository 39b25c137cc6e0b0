use super::view_model::ScheduledTaskDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ScheduledTaskDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ScheduledTaskDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container scheduled-task-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование задачи планировщика" } else { "Новая задача планировщика" }
                    }
                </h3>
                {
                    let vm = vm_clone.clone();
                    move || {
                        let vm = vm.clone();
                        if vm.is_edit_mode()() {
                            view! {
                                <button
                                    class="button button--secondary button--small"
                                    on:click=move |_| vm.run_command()
                                >
                                    {icon("refresh")}
                                    {"Запустить сейчас"}
                                </button>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }
                }
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            {
                let vm = vm_clone.clone();
                move || vm.state_info.get().map(|info| view! {
                    <div class="details-status">{info}</div>
                })
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
                    <label for="task-type">{"Тип задачи"}</label>
                    <input
                        type="text"
                        id="task-type"
                        placeholder="IdentitySynchronizationTask"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().task_type
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.task_type = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="cron">{"Крон-выражение"}</label>
                    <input
                        type="text"
                        id="cron"
                        placeholder="0 0 3 * * ?"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().cron_expression
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.cron_expression = event_target_value(&ev));
                            }
                        }
                    />
                    <span class="form__help">{"5 или 6 полей, разделённых пробелами"}</span>
                </div>

                <div class="form-group">
                    <label for="instance">{"Инстанс сервера"}</label>
                    <input
                        type="text"
                        id="instance"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().instance_id
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.instance_id = event_target_value(&ev));
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
                                move || vm.form.get().disabled
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.disabled = event_target_checked(&ev));
                                }
                            }
                        />
                        {"Отключена"}
                    </label>
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
