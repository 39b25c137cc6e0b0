use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор роли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub Uuid);

impl RoleId {
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

impl AggregateId for RoleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RoleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Роль (набор полномочий, назначаемый пользователям)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(flatten)]
    pub base: BaseAggregate<RoleId>,

    /// Приоритет при разрешении конфликтов назначений
    pub priority: i32,

    /// Снятие роли требует подтверждения
    #[serde(rename = "approveRemove")]
    pub approve_remove: bool,

    pub disabled: bool,
}

impl Role {
    /// Создать новую роль для отправки в API
    pub fn new_for_insert(code: String, description: String, priority: i32) -> Self {
        Self {
            base: BaseAggregate::new(RoleId::new_v4(), code, description),
            priority,
            approve_remove: false,
            disabled: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &RoleDto) {
        self.base.code = dto.code.clone();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.priority = dto.priority;
        self.approve_remove = dto.approve_remove;
        self.disabled = dto.disabled;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код роли не может быть пустым".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Название роли не может быть пустым".into());
        }
        if self.priority < 0 {
            return Err("Приоритет не может быть отрицательным".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Role {
    type Id = RoleId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "role"
    }

    fn element_name() -> &'static str {
        "Роль"
    }

    fn list_name() -> &'static str {
        "Роли"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления роли
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoleDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub priority: i32,

    #[serde(rename = "approveRemove")]
    pub approve_remove: bool,

    pub disabled: bool,
    pub comment: Option<String>,
}
