use super::model;
use contracts::domain::a002_role::aggregate::RoleDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Role details form
#[derive(Clone)]
pub struct RoleDetailsViewModel {
    pub form: RwSignal<RoleDto>,
    pub error: RwSignal<Option<String>>,
}

impl RoleDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RoleDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.code.trim().is_empty() && !f.description.trim().is_empty() && f.priority >= 0
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
                        let dto = RoleDto {
                            id: Some(aggregate.base.id.as_string()),
                            code: aggregate.base.code,
                            description: aggregate.base.description,
                            priority: aggregate.priority,
                            approve_remove: aggregate.approve_remove,
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

        if current.code.trim().is_empty() {
            self.error
                .set(Some("Код роли обязателен для заполнения".to_string()));
            return;
        }
        if current.description.trim().is_empty() {
            self.error
                .set(Some("Название роли обязательно для заполнения".to_string()));
            return;
        }
        if current.priority < 0 {
            self.error
                .set(Some("Приоритет не может быть отрицательным".to_string()));
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
