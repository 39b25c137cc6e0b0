use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Категории скриптов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScriptCategory {
    /// Общий скрипт
    #[default]
    Default,
    /// Трансформация значения из внешней системы
    TransformFrom,
    /// Трансформация значения во внешнюю систему
    TransformTo,
    /// Системный скрипт
    System,
}

impl CodedEnum for ScriptCategory {
    fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::TransformFrom,
            Self::TransformTo,
            Self::System,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::TransformFrom => "TRANSFORM_FROM",
            Self::TransformTo => "TRANSFORM_TO",
            Self::System => "SYSTEM",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Общий",
            Self::TransformFrom => "Трансформация (из системы)",
            Self::TransformTo => "Трансформация (в систему)",
            Self::System => "Системный",
        }
    }
}

impl ScriptCategory {
    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        super::symbol_by_key(code)
    }
}
