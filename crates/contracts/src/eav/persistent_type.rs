use crate::enums::CodedEnum;
use serde::{Deserialize, Serialize};

/// Persistent storage type of a form attribute.
///
/// Drives both widget choice and validation. Attribute definitions keep the
/// raw code string so that codes introduced by a newer server stay
/// representable; [`PersistentType::from_code`] simply returns `None` for
/// them and the field is treated as unsupported instead of failing the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersistentType {
    Char,
    #[default]
    Text,
    Textarea,
    Richtextarea,
    Int,
    Long,
    Double,
    Currency,
    Boolean,
    Date,
    Datetime,
}

/// Which field of a form value a persistent type is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTarget {
    String,
    Long,
    Double,
    Boolean,
    Date,
}

impl CodedEnum for PersistentType {
    fn all() -> &'static [Self] {
        &[
            Self::Char,
            Self::Text,
            Self::Textarea,
            Self::Richtextarea,
            Self::Int,
            Self::Long,
            Self::Double,
            Self::Currency,
            Self::Boolean,
            Self::Date,
            Self::Datetime,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Char => "CHAR",
            Self::Text => "TEXT",
            Self::Textarea => "TEXTAREA",
            Self::Richtextarea => "RICHTEXTAREA",
            Self::Int => "INT",
            Self::Long => "LONG",
            Self::Double => "DOUBLE",
            Self::Currency => "CURRENCY",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Datetime => "DATETIME",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Char => "Символ",
            Self::Text => "Строка",
            Self::Textarea => "Текст",
            Self::Richtextarea => "Форматированный текст",
            Self::Int => "Целое (32 бита)",
            Self::Long => "Целое (64 бита)",
            Self::Double => "Число",
            Self::Currency => "Денежная сумма",
            Self::Boolean => "Логическое",
            Self::Date => "Дата",
            Self::Datetime => "Дата и время",
        }
    }
}

impl PersistentType {
    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        crate::enums::symbol_by_key(code)
    }

    /// Text-like types persist into the string field and can be edited in a
    /// plain text input.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            Self::Char | Self::Text | Self::Textarea | Self::Richtextarea
        )
    }

    /// The form-value field this type persists into.
    pub fn value_target(&self) -> ValueTarget {
        match self {
            Self::Char | Self::Text | Self::Textarea | Self::Richtextarea => ValueTarget::String,
            Self::Int | Self::Long => ValueTarget::Long,
            Self::Double | Self::Currency => ValueTarget::Double,
            Self::Boolean => ValueTarget::Boolean,
            Self::Date | Self::Datetime => ValueTarget::Date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CodedEnum;

    #[test]
    fn test_code_roundtrip() {
        for pt in PersistentType::all() {
            assert_eq!(PersistentType::from_code(pt.code()), Some(*pt));
        }
        assert_eq!(PersistentType::from_code("FUTURE_TYPE"), None);
    }

    #[test]
    fn test_value_target() {
        assert_eq!(PersistentType::Char.value_target(), ValueTarget::String);
        assert_eq!(PersistentType::Int.value_target(), ValueTarget::Long);
        assert_eq!(PersistentType::Currency.value_target(), ValueTarget::Double);
        assert_eq!(PersistentType::Boolean.value_target(), ValueTarget::Boolean);
        assert_eq!(PersistentType::Datetime.value_target(), ValueTarget::Date);
    }
}
