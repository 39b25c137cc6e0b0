use super::model;
use contracts::domain::a004_script::aggregate::ScriptDto;
use contracts::domain::common::AggregateId;
use contracts::enums::{symbol_by_key, ScriptCategory};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Script details form
#[derive(Clone)]
pub struct ScriptDetailsViewModel {
    pub form: RwSignal<ScriptDto>,
    pub error: RwSignal<Option<String>>,
}

impl ScriptDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ScriptDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || {
            let f = self.form.get();
            !f.code.trim().is_empty() && !f.description.trim().is_empty()
        }
    }

    pub fn set_category(&self, code: &str) {
        if let Some(category) = symbol_by_key::<ScriptCategory>(code) {
            self.form.update(|f| f.category = category);
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
                        let dto = ScriptDto {
                            id: Some(aggregate.base.id.as_string()),
                            code: aggregate.base.code,
                            description: aggregate.base.description,
                            category: aggregate.category,
                            body: aggregate.body,
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
                .set(Some("Код скрипта обязателен для заполнения".to_string()));
            return;
        }
        if current.description.trim().is_empty() {
            self.error
                .set(Some("Название скрипта обязательно для заполнения".to_string()));
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
