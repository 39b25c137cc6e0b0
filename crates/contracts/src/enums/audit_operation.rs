use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Тип операции в журнале аудита
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditOperation {
    /// Создание записи
    Add,
    /// Изменение записи
    Mod,
    /// Удаление записи
    Del,
}

impl CodedEnum for AuditOperation {
    fn all() -> &'static [Self] {
        &[Self::Add, Self::Mod, Self::Del]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mod => "MOD",
            Self::Del => "DEL",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Add => "Создание",
            Self::Mod => "Изменение",
            Self::Del => "Удаление",
        }
    }
}
