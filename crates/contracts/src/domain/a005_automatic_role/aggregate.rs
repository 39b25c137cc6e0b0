use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{RecursionType, RuleComparison};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор автоматической роли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutomaticRoleId(pub Uuid);

impl AutomaticRoleId {
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

impl AggregateId for AutomaticRoleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AutomaticRoleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Nested table
// ============================================================================

/// Правило назначения: сравнение значения атрибута учётной записи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomaticRoleRule {
    pub id: Option<Uuid>,

    /// Код атрибута учётной записи (включая EAV-атрибуты)
    #[serde(rename = "attributeName")]
    pub attribute_name: String,

    pub comparison: RuleComparison,
    pub value: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Автоматическая роль: назначается пользователям по правилам,
/// без ручной заявки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomaticRole {
    #[serde(flatten)]
    pub base: BaseAggregate<AutomaticRoleId>,

    /// Назначаемая роль
    #[serde(rename = "roleId")]
    pub role_id: Uuid,

    /// Рекурсия по организационному дереву
    pub recursion: RecursionType,

    /// Все правила должны выполниться одновременно
    pub rules: Vec<AutomaticRoleRule>,
}

impl AutomaticRole {
    /// Создать новую автоматическую роль для отправки в API
    pub fn new_for_insert(code: String, description: String, role_id: Uuid) -> Self {
        Self {
            base: BaseAggregate::new(AutomaticRoleId::new_v4(), code, description),
            role_id,
            recursion: RecursionType::No,
            rules: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &AutomaticRoleDto) -> Result<(), String> {
        self.base.code = dto.code.clone();
        self.base.description = dto.description.clone();
        self.role_id =
            Uuid::parse_str(&dto.role_id).map_err(|e| format!("Invalid role UUID: {}", e))?;
        self.recursion = dto.recursion;
        self.rules = dto.rules.clone();
        Ok(())
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название не может быть пустым".into());
        }
        for rule in &self.rules {
            if rule.attribute_name.trim().is_empty() {
                return Err("Правило без атрибута".into());
            }
            if rule.value.is_empty() {
                return Err(format!("Правило '{}' без значения", rule.attribute_name));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for AutomaticRole {
    type Id = AutomaticRoleId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "automatic-role"
    }

    fn element_name() -> &'static str {
        "Автоматическая роль"
    }

    fn list_name() -> &'static str {
        "Автоматические роли"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления автоматической роли
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AutomaticRoleDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,

    #[serde(rename = "roleId")]
    pub role_id: String,

    pub recursion: RecursionType,
    pub rules: Vec<AutomaticRoleRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rules() {
        let mut auto_role = AutomaticRole::new_for_insert(
            "auto-helpdesk".into(),
            "Helpdesk по отделу".into(),
            Uuid::new_v4(),
        );
        assert!(auto_role.validate().is_ok());

        auto_role.rules.push(AutomaticRoleRule {
            id: None,
            attribute_name: "department".into(),
            comparison: RuleComparison::Equals,
            value: "IT".into(),
        });
        assert!(auto_role.validate().is_ok());

        auto_role.rules.push(AutomaticRoleRule {
            id: None,
            attribute_name: "".into(),
            comparison: RuleComparison::Equals,
            value: "x".into(),
        });
        assert!(auto_role.validate().is_err());
    }
}
