use super::persistent_type::PersistentType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Definition of one form field.
///
/// Invariants (enforced by the server, relied upon here):
/// - `code` is unique within its form definition;
/// - `persistent_type` is immutable once values exist for the attribute;
/// - `multiple = true` is only editable for text-like single-line and
///   numeric types, see [`super::dispatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: Option<Uuid>,

    /// Attribute name, unique within the form definition
    pub code: String,

    /// Label shown next to the widget
    pub name: String,

    /// Raw persistent type code; may be a code this client does not know yet
    #[serde(rename = "persistentType")]
    pub persistent_type: String,

    /// More than one value may exist for this attribute
    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub readonly: bool,

    /// Value is never returned in cleartext by the API; the client only ever
    /// sees an opaque string proxy
    #[serde(default)]
    pub confidential: bool,

    #[serde(rename = "defaultValue", default)]
    pub default_value: Option<String>,

    /// Help text under the widget
    #[serde(default)]
    pub description: Option<String>,

    /// Order within the form definition
    #[serde(default)]
    pub seq: i32,
}

impl AttributeDefinition {
    /// Минимальное определение атрибута (остальные флаги по умолчанию)
    pub fn new(code: &str, name: &str, persistent_type: PersistentType) -> Self {
        use crate::enums::CodedEnum;
        Self {
            id: None,
            code: code.to_string(),
            name: name.to_string(),
            persistent_type: persistent_type.code().to_string(),
            multiple: false,
            required: false,
            readonly: false,
            confidential: false,
            default_value: None,
            description: None,
            seq: 0,
        }
    }

    /// Parsed persistent type; `None` for codes this client does not know.
    pub fn persistent_type(&self) -> Option<PersistentType> {
        PersistentType::from_code(&self.persistent_type)
    }
}
