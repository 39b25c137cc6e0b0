use super::view_model::ScriptDetailsViewModel;
use crate::shared::components::Select;
use crate::shared::icons::icon;
use contracts::enums::{values, CodedEnum, ScriptCategory};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ScriptDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ScriptDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    let category_options: Vec<(String, String)> = values::<ScriptCategory>()
        .iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect();

    let category_value = {
        let vm = vm_clone.clone();
        Signal::derive(move || vm.form.get().category.code().to_string())
    };
    let on_category = {
        let vm = vm_clone.clone();
        Callback::new(move |code: String| vm.set_category(&code))
    };

    view! {
        <div class="details-container script-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование скрипта" } else { "Новый скрипт" }
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

                <Select
                    label={"Категория".to_string()}
                    value=category_value
                    on_change=on_category
                    options=category_options
                />

                <div class="form-group">
                    <label for="body">{"Текст скрипта"}</label>
                    <textarea
                        id="body"
                        class="script-details__body"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().body
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.body = event_target_value(&ev));
                            }
                        }
                        rows="14"
                        spellcheck="false"
                    />
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
                        rows="2"
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
