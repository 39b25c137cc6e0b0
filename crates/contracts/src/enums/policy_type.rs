use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Назначение парольной политики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    /// Проверка паролей, вводимых пользователем
    #[default]
    Validate,
    /// Генерация новых паролей
    Generate,
}

impl CodedEnum for PolicyType {
    fn all() -> &'static [Self] {
        &[Self::Validate, Self::Generate]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validate => "VALIDATE",
            Self::Generate => "GENERATE",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Validate => "Проверка",
            Self::Generate => "Генерация",
        }
    }
}
