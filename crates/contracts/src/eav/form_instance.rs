use super::attribute::AttributeDefinition;
use super::form_value::FormValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Named, versioned set of attribute definitions for one entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: Option<Uuid>,

    /// Definition code, unique per module + type
    pub code: String,

    /// Owning module (e.g. "core")
    pub module: String,

    /// Entity type the definition extends (e.g. "identity")
    #[serde(rename = "type")]
    pub entity_type: String,

    pub name: String,

    /// Main definition is rendered by default on the entity detail
    #[serde(default)]
    pub main: bool,

    #[serde(rename = "formAttributes", default)]
    pub form_attributes: Vec<AttributeDefinition>,
}

impl FormDefinition {
    pub fn attribute(&self, code: &str) -> Option<&AttributeDefinition> {
        self.form_attributes.iter().find(|a| a.code == code)
    }
}

/// A form definition bound to one concrete entity's current values.
///
/// Owned by a single rendered form; rebuilt whenever the target entity (or
/// its definition) is fetched again and discarded when the page goes away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInstance {
    pub definition: FormDefinition,

    /// Values grouped by attribute code, ordered by `seq`
    pub values: BTreeMap<String, Vec<FormValue>>,
}

impl FormInstance {
    /// Group a flat value list under its definition.
    ///
    /// Values referencing attributes the definition does not declare are
    /// dropped: a newer server may store attributes this client has no
    /// widget for, and they must not break the rest of the form.
    pub fn new(definition: FormDefinition, flat: Vec<FormValue>) -> Self {
        let mut values: BTreeMap<String, Vec<FormValue>> = BTreeMap::new();
        for value in flat {
            if definition.attribute(&value.attribute).is_none() {
                log::debug!(
                    "form instance {}: dropping value for unknown attribute '{}'",
                    definition.code,
                    value.attribute
                );
                continue;
            }
            values.entry(value.attribute.clone()).or_default().push(value);
        }
        for list in values.values_mut() {
            list.sort_by_key(|v| v.seq);
        }
        Self { definition, values }
    }

    /// Stored values of one attribute, `seq`-ordered; empty when none exist.
    pub fn values_for(&self, code: &str) -> &[FormValue] {
        self.values.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn attribute(&self, code: &str) -> Option<&AttributeDefinition> {
        self.definition.attribute(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eav::form_value::FormValueKind;
    use crate::eav::persistent_type::PersistentType;

    fn definition() -> FormDefinition {
        FormDefinition {
            id: None,
            code: "identity-eav".into(),
            module: "core".into(),
            entity_type: "identity".into(),
            name: "Дополнительные атрибуты".into(),
            main: true,
            form_attributes: vec![
                AttributeDefinition::new("email", "Email", PersistentType::Text),
                AttributeDefinition::new("scores", "Баллы", PersistentType::Int),
            ],
        }
    }

    #[test]
    fn test_groups_and_sorts_by_seq() {
        let flat = vec![
            FormValue::new("scores", 1, Some(FormValueKind::Long(2))),
            FormValue::new("scores", 0, Some(FormValueKind::Long(1))),
            FormValue::new("email", 0, Some(FormValueKind::String("a@b.com".into()))),
        ];
        let instance = FormInstance::new(definition(), flat);
        let scores = instance.values_for("scores");
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].value, Some(FormValueKind::Long(1)));
        assert_eq!(scores[1].value, Some(FormValueKind::Long(2)));
    }

    #[test]
    fn test_unknown_attribute_values_are_dropped() {
        let flat = vec![FormValue::new(
            "introduced-later",
            0,
            Some(FormValueKind::String("x".into())),
        )];
        let instance = FormInstance::new(definition(), flat);
        assert!(instance.values.is_empty());
        assert!(instance.values_for("introduced-later").is_empty());
    }
}
