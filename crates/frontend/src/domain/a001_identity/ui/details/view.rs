use super::view_model::IdentityDetailsViewModel;
use crate::shared::eav_form::EavForm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn IdentityDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = IdentityDetailsViewModel::new();
    vm.load_if_needed(id.clone());

    let vm_clone = vm.clone();

    // Дополнительные атрибуты доступны только у сохранённой записи
    let eav_section = id.map(|existing_id| {
        let on_form_saved: Rc<dyn Fn(())> = Rc::new(|_| {});
        view! {
            <div class="details-section">
                <EavForm
                    entity={"identity".to_string()}
                    owner_id=existing_id
                    on_saved=on_form_saved
                />
            </div>
        }
    });

    view! {
        <div class="details-container identity-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование пользователя" } else { "Новый пользователь" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="username">{"Логин"}</label>
                    <input
                        type="text"
                        id="username"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().username
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.username = event_target_value(&ev));
                            }
                        }
                        placeholder="Латинские буквы, цифры и . - _ @"
                    />
                </div>

                <div class="form-group">
                    <label for="first_name">{"Имя"}</label>
                    <input
                        type="text"
                        id="first_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().first_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.first_name = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="last_name">{"Фамилия"}</label>
                    <input
                        type="text"
                        id="last_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().last_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.last_name = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.email = event_target_value(&ev));
                            }
                        }
                        placeholder="user@example.com"
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Телефон"}</label>
                    <input
                        type="text"
                        id="phone"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().phone.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.phone = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="+7 ..."
                    />
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
                    <label for="disabled">{"Заблокирован"}</label>
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

            {eav_section}

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
