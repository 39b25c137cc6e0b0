use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ScriptCategory;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор скрипта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptId(pub Uuid);

impl ScriptId {
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

impl AggregateId for ScriptId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ScriptId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Скрипт трансформации/автоматизации, исполняемый сервером
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(flatten)]
    pub base: BaseAggregate<ScriptId>,

    pub category: ScriptCategory,

    /// Исходный текст скрипта
    pub body: String,
}

impl Script {
    /// Создать новый скрипт для отправки в API
    pub fn new_for_insert(code: String, description: String, category: ScriptCategory) -> Self {
        Self {
            base: BaseAggregate::new(ScriptId::new_v4(), code, description),
            category,
            body: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ScriptDto) {
        self.base.code = dto.code.clone();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.category = dto.category;
        self.body = dto.body.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код скрипта не может быть пустым".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Название скрипта не может быть пустым".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Script {
    type Id = ScriptId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "script"
    }

    fn element_name() -> &'static str {
        "Скрипт"
    }

    fn list_name() -> &'static str {
        "Скрипты"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления скрипта
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScriptDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub category: ScriptCategory,
    pub body: String,
    pub comment: Option<String>,
}
