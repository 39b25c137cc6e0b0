use super::model;
use contracts::domain::a007_form_definition::aggregate::FormDefinitionDto;
use contracts::eav::{AttributeDefinition, PersistentType};
use contracts::enums::CodedEnum;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Form Definition details
///
/// Редактирование списка атрибутов идёт по индексу строки таблицы;
/// `seq` пересчитывается при каждом изменении порядка.
#[derive(Clone)]
pub struct FormDefinitionDetailsViewModel {
    pub form: RwSignal<FormDefinitionDto>,
    pub error: RwSignal<Option<String>>,
}

impl FormDefinitionDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FormDefinitionDto {
                module: "core".to_string(),
                ..Default::default()
            }),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    pub fn add_attribute(&self) {
        self.form.update(|f| {
            let mut attr = AttributeDefinition::new("", "", PersistentType::Text);
            attr.seq = f.form_attributes.len() as i32;
            f.form_attributes.push(attr);
        });
    }

    pub fn remove_attribute(&self, index: usize) {
        self.form.update(|f| {
            if index < f.form_attributes.len() {
                f.form_attributes.remove(index);
                for (seq, attr) in f.form_attributes.iter_mut().enumerate() {
                    attr.seq = seq as i32;
                }
            }
        });
    }

    pub fn move_attribute_up(&self, index: usize) {
        self.form.update(|f| {
            if index > 0 && index < f.form_attributes.len() {
                f.form_attributes.swap(index - 1, index);
                for (seq, attr) in f.form_attributes.iter_mut().enumerate() {
                    attr.seq = seq as i32;
                }
            }
        });
    }

    pub fn update_attribute(&self, index: usize, apply: impl FnOnce(&mut AttributeDefinition)) {
        self.form.update(|f| {
            if let Some(attr) = f.form_attributes.get_mut(index) {
                apply(attr);
            }
        });
    }

    pub fn set_attribute_type(&self, index: usize, code: &str) {
        if let Some(pt) = PersistentType::from_code(code) {
            self.update_attribute(index, |attr| {
                attr.persistent_type = pt.code().to_string();
                // multiple недопустим для части типов, сбрасываем при смене
                if attr.multiple
                    && matches!(
                        pt,
                        PersistentType::Boolean
                            | PersistentType::Date
                            | PersistentType::Datetime
                            | PersistentType::Textarea
                            | PersistentType::Richtextarea
                    )
                {
                    attr.multiple = false;
                }
            });
        }
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(definition) => {
                        let mut dto = FormDefinitionDto::from_definition(&definition);
                        dto.form_attributes.sort_by_key(|a| a.seq);
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

        if let Err(e) = current.validate() {
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
