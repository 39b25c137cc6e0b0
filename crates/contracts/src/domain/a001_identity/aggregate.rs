use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::IdentityState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор учётной записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
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

impl AggregateId for IdentityId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IdentityId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Учётная запись пользователя
///
/// `code` базового агрегата — это логин (username). Дополнительные атрибуты
/// хранятся отдельно в EAV-форме и в агрегат не входят.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    #[serde(flatten)]
    pub base: BaseAggregate<IdentityId>,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub email: String,
    pub phone: Option<String>,
    pub state: IdentityState,
    pub disabled: bool,
}

impl Identity {
    /// Создать новую учётную запись для отправки в API
    pub fn new_for_insert(
        username: String,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
    ) -> Self {
        let description = format!("{} {}", first_name, last_name).trim().to_string();
        Self {
            base: BaseAggregate::new(IdentityId::new_v4(), username, description),
            first_name,
            last_name,
            email,
            phone,
            state: IdentityState::Created,
            disabled: false,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &IdentityDto) {
        self.base.code = dto.username.clone();
        self.base.description =
            format!("{} {}", dto.first_name, dto.last_name).trim().to_string();
        self.base.comment = dto.comment.clone();
        self.first_name = dto.first_name.clone();
        self.last_name = dto.last_name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.disabled = dto.disabled;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Логин не может быть пустым".into());
        }
        if self
            .base
            .code
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '-' | '_' | '@'))
        {
            return Err("Логин содержит недопустимые символы".into());
        }
        if !self.email.trim().is_empty() {
            let (local, domain) = self
                .email
                .split_once('@')
                .ok_or_else(|| "Email должен содержать символ @".to_string())?;
            if local.is_empty() || !domain.contains('.') {
                return Err("Некорректный email".into());
            }
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Identity {
    type Id = IdentityId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "identity"
    }

    fn element_name() -> &'static str {
        "Пользователь"
    }

    fn list_name() -> &'static str {
        "Пользователи"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления учётной записи
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentityDto {
    pub id: Option<String>,
    pub username: String,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub email: String,
    pub phone: Option<String>,
    pub disabled: bool,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        let mut identity = Identity::new_for_insert(
            "j.doe".into(),
            "John".into(),
            "Doe".into(),
            "j.doe@example.com".into(),
            None,
        );
        assert!(identity.validate().is_ok());

        identity.base.code = "".into();
        assert!(identity.validate().is_err());

        identity.base.code = "j doe".into();
        assert!(identity.validate().is_err());
    }

    #[test]
    fn test_validate_email() {
        let mut identity = Identity::new_for_insert(
            "j.doe".into(),
            "John".into(),
            "Doe".into(),
            "not-an-email".into(),
            None,
        );
        assert!(identity.validate().is_err());

        identity.email = "".into();
        assert!(identity.validate().is_ok());
    }
}
