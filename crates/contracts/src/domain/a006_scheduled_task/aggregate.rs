use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::TaskState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор задачи планировщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledTaskId(pub Uuid);

impl ScheduledTaskId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ScheduledTaskId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ScheduledTaskId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Задача планировщика: периодический запуск серверного обработчика
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    #[serde(flatten)]
    pub base: BaseAggregate<ScheduledTaskId>,

    /// Тип серверного обработчика (полное имя класса задачи)
    #[serde(rename = "taskType")]
    pub task_type: String,

    /// Крон-выражение запуска
    #[serde(rename = "cronExpression")]
    pub cron_expression: String,

    /// Инстанс сервера, на котором задача исполняется
    #[serde(rename = "instanceId")]
    pub instance_id: String,

    pub disabled: bool,
    pub state: TaskState,

    #[serde(rename = "lastRun")]
    pub last_run: Option<DateTime<Utc>>,

    #[serde(rename = "nextRun")]
    pub next_run: Option<DateTime<Utc>>,
}

impl ScheduledTask {
    /// Создать новую задачу для отправки в API
    pub fn new_for_insert(
        code: String,
        description: String,
        task_type: String,
        cron_expression: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ScheduledTaskId::new_v4(), code, description),
            task_type,
            cron_expression,
            instance_id: "default".to_string(),
            disabled: false,
            state: TaskState::Created,
            last_run: None,
            next_run: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ScheduledTaskDto) {
        self.base.code = dto.code.clone();
        self.base.description = dto.description.clone();
        self.task_type = dto.task_type.clone();
        self.cron_expression = dto.cron_expression.clone();
        self.instance_id = dto.instance_id.clone();
        self.disabled = dto.disabled;
    }

    /// Валидация данных
    ///
    /// Крон-выражение проверяется только по форме (5 или 6 полей);
    /// семантику полей разбирает планировщик на сервере.
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название задачи не может быть пустым".into());
        }
        if self.task_type.trim().is_empty() {
            return Err("Тип задачи не может быть пустым".into());
        }
        let fields = self.cron_expression.split_whitespace().count();
        if !(5..=6).contains(&fields) {
            return Err("Крон-выражение должно содержать 5 или 6 полей".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for ScheduledTask {
    type Id = ScheduledTaskId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "scheduled-task"
    }

    fn element_name() -> &'static str {
        "Задача планировщика"
    }

    fn list_name() -> &'static str {
        "Задачи планировщика"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления задачи планировщика
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduledTaskDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,

    #[serde(rename = "taskType")]
    pub task_type: String,

    #[serde(rename = "cronExpression")]
    pub cron_expression: String,

    #[serde(rename = "instanceId")]
    pub instance_id: String,

    pub disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cron_shape() {
        let mut task = ScheduledTask::new_for_insert(
            "hr-sync".into(),
            "Синхронизация с HR".into(),
            "HrSynchronizationTask".into(),
            "0 0 3 * * ?".into(),
        );
        assert!(task.validate().is_ok());

        task.cron_expression = "0 3 * * *".into();
        assert!(task.validate().is_ok());

        task.cron_expression = "каждый день".into();
        assert!(task.validate().is_err());
    }
}
