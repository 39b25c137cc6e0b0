use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Состояния учётной записи пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityState {
    /// Создан, но ещё не активирован
    #[default]
    Created,
    /// Активен
    Valid,
    /// Заблокирован администратором
    Disabled,
    /// Покинул организацию
    Left,
}

impl CodedEnum for IdentityState {
    fn all() -> &'static [Self] {
        &[Self::Created, Self::Valid, Self::Disabled, Self::Left]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Valid => "VALID",
            Self::Disabled => "DISABLED",
            Self::Left => "LEFT",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Created => "Создан",
            Self::Valid => "Активен",
            Self::Disabled => "Заблокирован",
            Self::Left => "Уволен",
        }
    }
}

impl IdentityState {
    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        super::symbol_by_key(code)
    }
}
