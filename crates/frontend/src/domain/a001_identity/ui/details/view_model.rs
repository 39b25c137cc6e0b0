use super::model;
use contracts::domain::a001_identity::aggregate::IdentityDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Identity details form
#[derive(Clone)]
pub struct IdentityDetailsViewModel {
    pub form: RwSignal<IdentityDto>,
    pub error: RwSignal<Option<String>>,
}

impl IdentityDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(IdentityDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.username.trim().is_empty() && !f.first_name.trim().is_empty()
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
                        let dto = IdentityDto {
                            id: Some(aggregate.base.id.as_string()),
                            username: aggregate.base.code,
                            first_name: aggregate.first_name,
                            last_name: aggregate.last_name,
                            email: aggregate.email,
                            phone: aggregate.phone,
                            disabled: aggregate.disabled,
                            comment: aggregate.base.comment,
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

        if current.username.trim().is_empty() {
            self.error
                .set(Some("Логин обязателен для заполнения".to_string()));
            return;
        }
        if current
            .username
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '-' | '_' | '@'))
        {
            self.error
                .set(Some("Логин содержит недопустимые символы".to_string()));
            return;
        }
        if !current.email.trim().is_empty() && !current.email.contains('@') {
            self.error.set(Some("Некорректный email".to_string()));
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
