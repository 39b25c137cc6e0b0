use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Рекурсия автоматической роли по организационному дереву
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecursionType {
    /// Только выбранный узел
    #[default]
    No,
    /// Узел и все подчинённые
    Down,
    /// Узел и все вышестоящие
    Up,
}

impl CodedEnum for RecursionType {
    fn all() -> &'static [Self] {
        &[Self::No, Self::Down, Self::Up]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::No => "NO",
            Self::Down => "DOWN",
            Self::Up => "UP",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::No => "Без рекурсии",
            Self::Down => "Вниз по дереву",
            Self::Up => "Вверх по дереву",
        }
    }
}
