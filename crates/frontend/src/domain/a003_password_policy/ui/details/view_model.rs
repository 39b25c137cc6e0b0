use super::model;
use contracts::domain::a003_password_policy::aggregate::PasswordPolicyDto;
use contracts::domain::common::AggregateId;
use contracts::enums::{symbol_by_key, PolicyType};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Password Policy details form
#[derive(Clone)]
pub struct PasswordPolicyDetailsViewModel {
    pub form: RwSignal<PasswordPolicyDto>,
    pub error: RwSignal<Option<String>>,
}

impl PasswordPolicyDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PasswordPolicyDto {
                min_length: 8,
                max_length: 128,
                min_upper: 1,
                min_lower: 1,
                min_number: 1,
                ..PasswordPolicyDto::default()
            }),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || validate(&self.form.get()).is_ok()
    }

    pub fn set_policy_type(&self, code: &str) {
        if let Some(policy_type) = symbol_by_key::<PolicyType>(code) {
            self.form.update(|f| f.policy_type = policy_type);
        }
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => {
                        let dto = PasswordPolicyDto {
                            id: Some(aggregate.base.id.as_string()),
                            code: aggregate.base.code,
                            description: aggregate.base.description,
                            policy_type: aggregate.policy_type,
                            default_policy: aggregate.default_policy,
                            min_length: aggregate.min_length,
                            max_length: aggregate.max_length,
                            min_upper: aggregate.min_upper,
                            min_lower: aggregate.min_lower,
                            min_number: aggregate.min_number,
                            min_special: aggregate.min_special,
                            prohibited_characters: aggregate.prohibited_characters,
                            max_password_age: aggregate.max_password_age,
                            min_password_age: aggregate.min_password_age,
                        };
                        form.set(dto);
                    }
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(e) = validate(&current) {
            self.error.set(Some(e));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

/// Те же инварианты, что и у агрегата: длины, сумма категорий, возраст пароля
fn validate(dto: &PasswordPolicyDto) -> Result<(), String> {
    if dto.code.trim().is_empty() {
        return Err("Код политики обязателен для заполнения".into());
    }
    if dto.min_length < 0 || dto.max_length < 0 {
        return Err("Длина пароля не может быть отрицательной".into());
    }
    if dto.min_length > dto.max_length {
        return Err("Минимальная длина больше максимальной".into());
    }
    let categories = dto.min_upper + dto.min_lower + dto.min_number + dto.min_special;
    if categories > dto.max_length {
        return Err("Суммарные требования к символам превышают максимальную длину".into());
    }
    if dto.max_password_age > 0 && dto.min_password_age > dto.max_password_age {
        return Err("Минимальный возраст пароля больше максимального".into());
    }
    Ok(())
}
