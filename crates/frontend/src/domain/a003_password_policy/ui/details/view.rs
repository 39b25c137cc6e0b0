use super::view_model::PasswordPolicyDetailsViewModel;
use crate::shared::components::Select;
use crate::shared::icons::icon;
use contracts::enums::{values, CodedEnum, PolicyType};
use leptos::prelude::*;
use std::rc::Rc;

fn number_field(
    id: &'static str,
    label: &'static str,
    value: Signal<i32>,
    on_change: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="form-group form-group--number">
            <label for=id>{label}</label>
            <input
                type="number"
                id=id
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse() {
                        on_change.run(parsed);
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn PasswordPolicyDetails(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = PasswordPolicyDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    let type_options: Vec<(String, String)> = values::<PolicyType>()
        .iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();

    let policy_type_value = {
        let vm = vm_clone.clone();
        Signal::derive(move || vm.form.get().policy_type.code().to_string())
    };
    let on_policy_type = {
        let vm = vm_clone.clone();
        Callback::new(move |code: String| vm.set_policy_type(&code))
    };

    let number = |id: &'static str,
                  label: &'static str,
                  get: fn(&contracts::domain::a003_password_policy::aggregate::PasswordPolicyDto) -> i32,
                  set: fn(&mut contracts::domain::a003_password_policy::aggregate::PasswordPolicyDto, i32)| {
        let vm_get = vm_clone.clone();
        let vm_set = vm_clone.clone();
        number_field(
            id,
            label,
            Signal::derive(move || get(&vm_get.form.get())),
            Callback::new(move |v| vm_set.form.update(|f| set(f, v))),
        )
    };

    view! {
        <div class="details-container password-policy-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование парольной политики" } else { "Новая парольная политика" }
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
                    label={"Назначение".to_string()}
                    value=policy_type_value
                    on_change=on_policy_type
                    options=type_options
                />

                <div class="form-group form-group--checkbox">
                    <input
                        type="checkbox"
                        id="default_policy"
                        prop:checked={
                            let vm = vm_clone.clone();
                            move || vm.form.get().default_policy
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.default_policy = event_target_checked(&ev));
                            }
                        }
                    />
                    <label for="default_policy">{"Политика по умолчанию"}</label>
                </div>

                <div class="form-row">
                    {number("min_length", "Мин. длина", |f| f.min_length, |f, v| f.min_length = v)}
                    {number("max_length", "Макс. длина", |f| f.max_length, |f, v| f.max_length = v)}
                </div>

                <div class="form-row">
                    {number("min_upper", "Мин. заглавных", |f| f.min_upper, |f, v| f.min_upper = v)}
                    {number("min_lower", "Мин. строчных", |f| f.min_lower, |f, v| f.min_lower = v)}
                    {number("min_number", "Мин. цифр", |f| f.min_number, |f, v| f.min_number = v)}
                    {number("min_special", "Мин. спецсимволов", |f| f.min_special, |f, v| f.min_special = v)}
                </div>

                <div class="form-group">
                    <label for="prohibited">{"Запрещённые символы"}</label>
                    <input
                        type="text"
                        id="prohibited"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().prohibited_characters.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.prohibited_characters =
                                        if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                    />
                </div>

                <div class="form-row">
                    {number("max_age", "Макс. возраст пароля, дней", |f| f.max_password_age, |f, v| f.max_password_age = v)}
                    {number("min_age", "Мин. возраст пароля, дней", |f| f.min_password_age, |f, v| f.min_password_age = v)}
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
