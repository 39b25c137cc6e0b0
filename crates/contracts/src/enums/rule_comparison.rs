use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Сравнение значения атрибута в правиле автоматической роли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleComparison {
    #[default]
    Equals,
    Contains,
    StartWith,
    EndWith,
}

impl CodedEnum for RuleComparison {
    fn all() -> &'static [Self] {
        &[Self::Equals, Self::Contains, Self::StartWith, Self::EndWith]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::Contains => "CONTAINS",
            Self::StartWith => "START_WITH",
            Self::EndWith => "END_WITH",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Equals => "Равно",
            Self::Contains => "Содержит",
            Self::StartWith => "Начинается с",
            Self::EndWith => "Заканчивается на",
        }
    }
}
