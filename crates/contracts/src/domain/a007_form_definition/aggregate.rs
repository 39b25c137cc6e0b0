use crate::eav::{AttributeDefinition, FormDefinition, PersistentType};
use serde::{Deserialize, Serialize};

/// Администрирование EAV-форм: создание и правка определений
/// (`eav::FormDefinition` — сама модель, здесь только DTO и проверки).

/// DTO для создания/обновления определения формы
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormDefinitionDto {
    pub id: Option<String>,
    pub code: String,
    pub module: String,

    #[serde(rename = "type")]
    pub entity_type: String,

    pub name: String,
    pub main: bool,

    #[serde(rename = "formAttributes")]
    pub form_attributes: Vec<AttributeDefinition>,
}

impl FormDefinitionDto {
    pub fn from_definition(definition: &FormDefinition) -> Self {
        Self {
            id: definition.id.map(|id| id.to_string()),
            code: definition.code.clone(),
            module: definition.module.clone(),
            entity_type: definition.entity_type.clone(),
            name: definition.name.clone(),
            main: definition.main,
            form_attributes: definition.form_attributes.clone(),
        }
    }

    /// Валидация определения перед сохранением.
    ///
    /// Здесь действует инвариант формы: `multiple` разрешён только для
    /// типов, у которых есть многострочная модель редактирования. Смена
    /// персистентного типа у атрибута с уже существующими значениями
    /// отклоняется сервером, клиент это не проверяет.
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Код формы не может быть пустым".into());
        }
        if self.entity_type.trim().is_empty() {
            return Err("Тип сущности не может быть пустым".into());
        }

        let mut seen = std::collections::BTreeSet::new();
        for attr in &self.form_attributes {
            if attr.code.trim().is_empty() {
                return Err("Атрибут без кода".into());
            }
            if !seen.insert(attr.code.as_str()) {
                return Err(format!("Атрибут '{}' объявлен дважды", attr.code));
            }
            if attr.multiple {
                match attr.persistent_type() {
                    Some(
                        PersistentType::Boolean
                        | PersistentType::Date
                        | PersistentType::Datetime
                        | PersistentType::Textarea
                        | PersistentType::Richtextarea,
                    ) => {
                        return Err(format!(
                            "Атрибут '{}': тип {} не поддерживает множественные значения",
                            attr.code, attr.persistent_type
                        ));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_with(attrs: Vec<AttributeDefinition>) -> FormDefinitionDto {
        FormDefinitionDto {
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
    fn test_duplicate_attribute_rejected() {
        let dto = dto_with(vec![
            AttributeDefinition::new("email", "Email", PersistentType::Text),
            AttributeDefinition::new("email", "Email 2", PersistentType::Text),
        ]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_multiple_for_unsupported_type_rejected() {
        let mut flag = AttributeDefinition::new("flag", "Флаг", PersistentType::Boolean);
        flag.multiple = true;
        assert!(dto_with(vec![flag]).validate().is_err());

        let mut scores = AttributeDefinition::new("scores", "Баллы", PersistentType::Int);
        scores.multiple = true;
        assert!(dto_with(vec![scores]).validate().is_ok());
    }
}
