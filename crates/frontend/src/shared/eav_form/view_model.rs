use super::model;
use contracts::eav::{
    collect_form_values, deserialize_attribute, is_form_valid, presentation, validate_text,
    AttributeDefinition, FieldPresentation, FormInstance, UiValue,
};
use contracts::shared::form_state::FormEdits;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for a dynamic EAV form bound to one entity
///
/// `edits` is the raw widget state keyed by attribute code. An attribute
/// absent from the buffer is never submitted; this is how untouched
/// confidential fields avoid echoing their opaque proxy back to the server.
#[derive(Clone)]
pub struct EavFormViewModel {
    /// API-сегмент сущности-владельца ("identity", "role", ...)
    pub entity: String,
    /// Идентификатор сущности-владельца
    pub owner_id: String,
    pub instance: RwSignal<Option<FormInstance>>,
    pub edits: RwSignal<FormEdits>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EavFormViewModel {
    pub fn new(entity: String, owner_id: String) -> Self {
        Self {
            entity,
            owner_id,
            instance: RwSignal::new(None),
            edits: RwSignal::new(FormEdits::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Load the form instance and seed the edit buffer
    pub fn load(&self) {
        let entity = self.entity.clone();
        let owner_id = self.owner_id.clone();
        let instance = self.instance;
        let edits = self.edits;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_form_instance(&entity, &owner_id).await {
                Ok(loaded) => {
                    edits.set(seed_edits(&loaded));
                    instance.set(Some(loaded));
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    /// Current text of a widget: the edit when present, the stored display
    /// otherwise (readonly fields are shown but never enter the buffer).
    pub fn display_text(&self, code: &str) -> String {
        if let Some(UiValue::Text(text)) = self.edits.get().get(code) {
            return text.clone();
        }
        self.instance
            .with(|i| {
                i.as_ref().and_then(|instance| {
                    let attr = instance.attribute(code)?;
                    deserialize_attribute(attr, instance.values_for(code))
                })
            })
            .unwrap_or_default()
    }

    pub fn checked(&self, code: &str) -> bool {
        match self.edits.get().get(code) {
            Some(UiValue::Bool(b)) => *b,
            _ => false,
        }
    }

    /// Значение для `<input type="date|datetime-local">`
    pub fn date_input_value(&self, code: &str, with_time: bool) -> String {
        match self.edits.get().get(code) {
            Some(UiValue::Date(d)) if with_time => crate::shared::date_utils::to_datetime_input(d),
            Some(UiValue::Date(d)) => crate::shared::date_utils::to_date_input(d),
            Some(UiValue::Text(_)) | None => String::new(),
            Some(UiValue::Bool(_)) => String::new(),
        }
    }

    pub fn set_text(&self, code: &str, text: String) {
        let code = code.to_string();
        self.edits.update(|e| {
            e.insert(code, UiValue::Text(text));
        });
    }

    pub fn set_bool(&self, code: &str, checked: bool) {
        let code = code.to_string();
        self.edits.update(|e| {
            e.insert(code, UiValue::Bool(checked));
        });
    }

    /// Raw date input state. An empty input is an explicit null (the stored
    /// value is cleared); an unparseable string is kept out of the buffer.
    pub fn set_date_input(&self, code: &str, raw: &str, with_time: bool) {
        let parsed = if with_time {
            crate::shared::date_utils::parse_datetime_input(raw)
        } else {
            crate::shared::date_utils::parse_date_input(raw)
        };
        let code = code.to_string();
        match parsed {
            Some(date) => self.edits.update(|e| {
                e.insert(code, UiValue::Date(date));
            }),
            None if raw.trim().is_empty() => self.edits.update(|e| {
                e.insert(code, UiValue::Text(String::new()));
            }),
            None => {}
        }
    }

    /// Ошибка валидации одного поля (пустая строка — поле корректно)
    pub fn field_error(&self, attr: &AttributeDefinition) -> String {
        let edits = self.edits.get();
        match edits.get(&attr.code) {
            Some(UiValue::Text(text)) => validate_text(attr, text).err().unwrap_or_default(),
            _ => String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.instance
            .with(|i| match i {
                Some(instance) => self.edits.with(|e| is_form_valid(instance, e)),
                None => false,
            })
    }

    /// Collect the edited values and submit them; the buffer is left intact
    /// on failure so nothing typed is lost.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let Some(instance) = self.instance.get() else {
            return;
        };
        let values = match self.edits.with(|e| collect_form_values(&instance, e)) {
            Ok(values) => values,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let entity = self.entity.clone();
        let owner_id = self.owner_id.clone();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form_values(&entity, &owner_id, &values).await {
                Ok(()) => {
                    saving.set(false);
                    (on_saved)(());
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(format!("Ошибка сохранения: {}", e)));
                }
            }
        });
    }
}

/// Initial edit buffer for a freshly loaded instance.
///
/// Masked widgets are deliberately left absent: their stored payload is an
/// opaque proxy that must not be resubmitted unless the user types a new
/// value. Readonly fields are shown from the instance and never buffered.
fn seed_edits(instance: &FormInstance) -> FormEdits {
    let mut edits = FormEdits::new();
    for attr in &instance.definition.form_attributes {
        if attr.readonly {
            continue;
        }
        let stored = instance.values_for(&attr.code);
        match presentation(attr) {
            FieldPresentation::SingleLineText { masked: false }
            | FieldPresentation::MultilineText { masked: false }
            | FieldPresentation::PlainTextArea
            | FieldPresentation::RichText => {
                let text = deserialize_attribute(attr, stored).unwrap_or_default();
                edits.insert(attr.code.clone(), UiValue::Text(text));
            }
            FieldPresentation::BooleanCheckbox => {
                let checked = deserialize_attribute(attr, stored).as_deref() == Some("true");
                edits.insert(attr.code.clone(), UiValue::Bool(checked));
            }
            FieldPresentation::DatePicker { .. } => {
                if let Some(display) = deserialize_attribute(attr, stored) {
                    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(display.trim()) {
                        edits.insert(
                            attr.code.clone(),
                            UiValue::Date(parsed.with_timezone(&chrono::Utc)),
                        );
                    }
                }
            }
            FieldPresentation::SingleLineText { masked: true }
            | FieldPresentation::MultilineText { masked: true }
            | FieldPresentation::UnsupportedMultiplicity
            | FieldPresentation::UnsupportedConfidential
            | FieldPresentation::UnsupportedType => {}
        }
    }
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::eav::{FormDefinition, FormValue, FormValueKind, PersistentType};

    fn definition(attrs: Vec<AttributeDefinition>) -> FormDefinition {
        FormDefinition {
            id: None,
            code: "identity-eav".into(),
            module: "core".into(),
            entity_type: "identity".into(),
            name: "Дополнительные атрибуты".into(),
            main: true,
            form_attributes: attrs,
        }
    }

    #[test]
    fn test_seed_skips_confidential_and_readonly() {
        let mut secret = AttributeDefinition::new("secret", "Секрет", PersistentType::Text);
        secret.confidential = true;
        let mut frozen = AttributeDefinition::new("frozen", "Только чтение", PersistentType::Text);
        frozen.readonly = true;
        let plain = AttributeDefinition::new("plain", "Поле", PersistentType::Text);

        let instance = FormInstance::new(
            definition(vec![secret, frozen, plain]),
            vec![
                FormValue::new("secret", 0, Some(FormValueKind::String("******".into()))),
                FormValue::new("frozen", 0, Some(FormValueKind::String("ro".into()))),
                FormValue::new("plain", 0, Some(FormValueKind::String("x".into()))),
            ],
        );
        let edits = seed_edits(&instance);
        assert!(!edits.contains_key("secret"));
        assert!(!edits.contains_key("frozen"));
        assert_eq!(edits.get("plain"), Some(&UiValue::Text("x".into())));
    }

    #[test]
    fn test_seed_boolean_and_date() {
        let flag = AttributeDefinition::new("flag", "Флаг", PersistentType::Boolean);
        let mut with_default = AttributeDefinition::new("def", "Флаг 2", PersistentType::Boolean);
        with_default.default_value = Some("true".into());
        let when = AttributeDefinition::new("when", "Дата", PersistentType::Date);

        let stamp = chrono::DateTime::parse_from_rfc3339("2024-03-15T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let instance = FormInstance::new(
            definition(vec![flag, with_default, when]),
            vec![
                FormValue::new("flag", 0, Some(FormValueKind::Boolean(true))),
                FormValue::new("when", 0, Some(FormValueKind::Date(stamp))),
            ],
        );
        let edits = seed_edits(&instance);
        assert_eq!(edits.get("flag"), Some(&UiValue::Bool(true)));
        assert_eq!(edits.get("def"), Some(&UiValue::Bool(true)));
        assert_eq!(edits.get("when"), Some(&UiValue::Date(stamp)));
    }
}
