use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::PolicyType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор парольной политики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PasswordPolicyId(pub Uuid);

impl PasswordPolicyId {
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

impl AggregateId for PasswordPolicyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PasswordPolicyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Парольная политика: требования к сложности и срокам действия паролей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(flatten)]
    pub base: BaseAggregate<PasswordPolicyId>,

    #[serde(rename = "policyType")]
    pub policy_type: PolicyType,

    /// Политика по умолчанию для своего типа
    #[serde(rename = "defaultPolicy")]
    pub default_policy: bool,

    #[serde(rename = "minLength")]
    pub min_length: i32,

    #[serde(rename = "maxLength")]
    pub max_length: i32,

    #[serde(rename = "minUpper")]
    pub min_upper: i32,

    #[serde(rename = "minLower")]
    pub min_lower: i32,

    #[serde(rename = "minNumber")]
    pub min_number: i32,

    #[serde(rename = "minSpecial")]
    pub min_special: i32,

    /// Символы, запрещённые в паролях
    #[serde(rename = "prohibitedCharacters")]
    pub prohibited_characters: Option<String>,

    /// Максимальный возраст пароля в днях (0 — без ограничения)
    #[serde(rename = "maxPasswordAge")]
    pub max_password_age: i32,

    /// Минимальный возраст пароля в днях
    #[serde(rename = "minPasswordAge")]
    pub min_password_age: i32,
}

impl PasswordPolicy {
    /// Создать новую политику для отправки в API
    pub fn new_for_insert(code: String, description: String, policy_type: PolicyType) -> Self {
        Self {
            base: BaseAggregate::new(PasswordPolicyId::new_v4(), code, description),
            policy_type,
            default_policy: false,
            min_length: 8,
            max_length: 128,
            min_upper: 1,
            min_lower: 1,
            min_number: 1,
            min_special: 0,
            prohibited_characters: None,
            max_password_age: 0,
            min_password_age: 0,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &PasswordPolicyDto) {
        self.base.code = dto.code.clone();
        self.base.description = dto.description.clone();
        self.policy_type = dto.policy_type;
        self.default_policy = dto.default_policy;
        self.min_length = dto.min_length;
        self.max_length = dto.max_length;
        self.min_upper = dto.min_upper;
        self.min_lower = dto.min_lower;
        self.min_number = dto.min_number;
        self.min_special = dto.min_special;
        self.prohibited_characters = dto.prohibited_characters.clone();
        self.max_password_age = dto.max_password_age;
        self.min_password_age = dto.min_password_age;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код политики не может быть пустым".into());
        }
        if self.min_length < 0 || self.max_length < 0 {
            return Err("Длина пароля не может быть отрицательной".into());
        }
        if self.min_length > self.max_length {
            return Err("Минимальная длина больше максимальной".into());
        }
        let categories = self.min_upper + self.min_lower + self.min_number + self.min_special;
        if categories > self.max_length {
            return Err("Суммарные требования к символам превышают максимальную длину".into());
        }
        if self.max_password_age > 0 && self.min_password_age > self.max_password_age {
            return Err("Минимальный возраст пароля больше максимального".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for PasswordPolicy {
    type Id = PasswordPolicyId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "password-policy"
    }

    fn element_name() -> &'static str {
        "Парольная политика"
    }

    fn list_name() -> &'static str {
        "Парольные политики"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления парольной политики
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PasswordPolicyDto {
    pub id: Option<String>,
    pub code: String,
    pub description: String,

    #[serde(rename = "policyType")]
    pub policy_type: PolicyType,

    #[serde(rename = "defaultPolicy")]
    pub default_policy: bool,

    #[serde(rename = "minLength")]
    pub min_length: i32,

    #[serde(rename = "maxLength")]
    pub max_length: i32,

    #[serde(rename = "minUpper")]
    pub min_upper: i32,

    #[serde(rename = "minLower")]
    pub min_lower: i32,

    #[serde(rename = "minNumber")]
    pub min_number: i32,

    #[serde(rename = "minSpecial")]
    pub min_special: i32,

    #[serde(rename = "prohibitedCharacters")]
    pub prohibited_characters: Option<String>,

    #[serde(rename = "maxPasswordAge")]
    pub max_password_age: i32,

    #[serde(rename = "minPasswordAge")]
    pub min_password_age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lengths() {
        let mut policy =
            PasswordPolicy::new_for_insert("default".into(), "Базовая".into(), PolicyType::Validate);
        assert!(policy.validate().is_ok());

        policy.min_length = 20;
        policy.max_length = 10;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_category_sum() {
        let mut policy =
            PasswordPolicy::new_for_insert("default".into(), "Базовая".into(), PolicyType::Validate);
        policy.max_length = 3;
        policy.min_length = 3;
        // 1 + 1 + 1 + 0 = 3, ровно помещается
        assert!(policy.validate().is_ok());
        policy.min_special = 1;
        assert!(policy.validate().is_err());
    }
}
