use crate::enums::AuditOperation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Запись журнала аудита (ревизия сущности)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,

    /// Сущность, к которой относится ревизия
    #[serde(rename = "entityId")]
    pub entity_id: Uuid,

    /// Тип сущности (например, "identity", "role")
    #[serde(rename = "entityType")]
    pub entity_type: String,

    pub operation: AuditOperation,

    /// Логин администратора, внёсшего изменение
    pub modifier: String,

    #[serde(rename = "revisionDate")]
    pub revision_date: DateTime<Utc>,

    /// Какие атрибуты изменились в этой ревизии
    #[serde(rename = "changedAttributes", default)]
    pub changed_attributes: Vec<String>,
}

/// Фильтр журнала аудита
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    pub entity_type: Option<String>,
    pub modifier: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub till: Option<DateTime<Utc>>,
}

impl AuditFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Сериализация в строку запроса; пустые поля опускаются
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(entity_type) = &self.entity_type {
            if !entity_type.is_empty() {
                parts.push(format!("entityType={}", urlencoding::encode(entity_type)));
            }
        }
        if let Some(modifier) = &self.modifier {
            if !modifier.is_empty() {
                parts.push(format!("modifier={}", urlencoding::encode(modifier)));
            }
        }
        if let Some(from) = &self.from {
            parts.push(format!("from={}", urlencoding::encode(&from.to_rfc3339())));
        }
        if let Some(till) = &self.till {
            parts.push(format!("till={}", urlencoding::encode(&till.to_rfc3339())));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        let filter = AuditFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.to_query_string(), "");
    }

    #[test]
    fn test_query_string_skips_blank_fields() {
        let filter = AuditFilter {
            entity_type: Some("identity".into()),
            modifier: Some("".into()),
            from: None,
            till: None,
        };
        assert_eq!(filter.to_query_string(), "entityType=identity");
    }

    #[test]
    fn test_query_string_encodes_timestamps() {
        use chrono::TimeZone;
        let filter = AuditFilter {
            entity_type: None,
            modifier: None,
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            till: None,
        };
        assert_eq!(
            filter.to_query_string(),
            "from=2024-01-01T00%3A00%3A00%2B00%3A00"
        );
    }
}
