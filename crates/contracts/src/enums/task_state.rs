use super::CodedEnum;
use serde::{Deserialize, Serialize};

/// Состояние задачи планировщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    #[default]
    Created,
    Running,
    Executed,
    Exception,
    Blocked,
}

impl CodedEnum for TaskState {
    fn all() -> &'static [Self] {
        &[
            Self::Created,
            Self::Running,
            Self::Executed,
            Self::Exception,
            Self::Blocked,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Running => "RUNNING",
            Self::Executed => "EXECUTED",
            Self::Exception => "EXCEPTION",
            Self::Blocked => "BLOCKED",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Created => "Создана",
            Self::Running => "Выполняется",
            Self::Executed => "Выполнена",
            Self::Exception => "Ошибка",
            Self::Blocked => "Заблокирована",
        }
    }
}
