use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed payload of a form value.
///
/// The external API persists one of five parallel nullable columns
/// (`stringValue`, `longValue`, `doubleValue`, `booleanValue`, `dateValue`);
/// in memory that is a sum type so that matching on the kind is exhaustive
/// and adding a persistent type is a compiler-checked change.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValueKind {
    String(String),
    Long(i64),
    Double(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
}

impl FormValueKind {
    /// The string field, without any coercion. Confidential attributes are
    /// read exclusively through this accessor: their payload is an opaque
    /// proxy and must never be reinterpreted by the declared type.
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Render the payload the way an editable text widget displays it.
    pub fn display(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Long(v) => v.to_string(),
            Self::Double(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::Date(v) => v.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// One persisted value of one attribute occurrence.
///
/// `value: None` is an explicit null (clears the stored value); an *absent*
/// value is no `FormValue` at all. The serializer keeps that three-way
/// distinction: attributes missing from the edit buffer are skipped and
/// never submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FormValueWire", into = "FormValueWire")]
pub struct FormValue {
    /// Server identity; preserved across edits so the API can distinguish
    /// update from insert
    pub id: Option<Uuid>,

    /// Code of the owning attribute
    pub attribute: String,

    /// Zero-based order among sibling values of the same attribute
    pub seq: i32,

    pub value: Option<FormValueKind>,
}

impl FormValue {
    pub fn new(attribute: &str, seq: i32, value: Option<FormValueKind>) -> Self {
        Self {
            id: None,
            attribute: attribute.to_string(),
            seq,
            value,
        }
    }
}

/// Wire shape of [`FormValue`]: the five parallel nullable fields of the
/// external API. Exactly one of them is expected to be populated; when the
/// server sends several, the first in declaration order wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FormValueWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(rename = "formAttribute")]
    attribute: String,
    #[serde(default)]
    seq: i32,
    #[serde(rename = "stringValue", default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(rename = "longValue", default, skip_serializing_if = "Option::is_none")]
    long_value: Option<i64>,
    #[serde(rename = "doubleValue", default, skip_serializing_if = "Option::is_none")]
    double_value: Option<f64>,
    #[serde(rename = "booleanValue", default, skip_serializing_if = "Option::is_none")]
    boolean_value: Option<bool>,
    #[serde(rename = "dateValue", default, skip_serializing_if = "Option::is_none")]
    date_value: Option<DateTime<Utc>>,
}

impl From<FormValueWire> for FormValue {
    fn from(w: FormValueWire) -> Self {
        let value = if let Some(s) = w.string_value {
            Some(FormValueKind::String(s))
        } else if let Some(v) = w.long_value {
            Some(FormValueKind::Long(v))
        } else if let Some(v) = w.double_value {
            Some(FormValueKind::Double(v))
        } else if let Some(v) = w.boolean_value {
            Some(FormValueKind::Boolean(v))
        } else {
            w.date_value.map(FormValueKind::Date)
        };
        Self {
            id: w.id,
            attribute: w.attribute,
            seq: w.seq,
            value,
        }
    }
}

impl From<FormValue> for FormValueWire {
    fn from(v: FormValue) -> Self {
        let mut w = FormValueWire {
            id: v.id,
            attribute: v.attribute,
            seq: v.seq,
            string_value: None,
            long_value: None,
            double_value: None,
            boolean_value: None,
            date_value: None,
        };
        match v.value {
            Some(FormValueKind::String(s)) => w.string_value = Some(s),
            Some(FormValueKind::Long(n)) => w.long_value = Some(n),
            Some(FormValueKind::Double(n)) => w.double_value = Some(n),
            Some(FormValueKind::Boolean(b)) => w.boolean_value = Some(b),
            Some(FormValueKind::Date(d)) => w.date_value = Some(d),
            None => {}
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_long() {
        let v = FormValue::new("scores", 1, Some(FormValueKind::Long(42)));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["formAttribute"], "scores");
        assert_eq!(json["seq"], 1);
        assert_eq!(json["longValue"], 42);
        assert!(json.get("stringValue").is_none());
    }

    #[test]
    fn test_wire_roundtrip_string() {
        let v = FormValue::new("email", 0, Some(FormValueKind::String("a@b.com".into())));
        let json = serde_json::to_string(&v).unwrap();
        let back: FormValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_wire_null_value() {
        // все пять полей null — явное null-значение, не отсутствие
        let back: FormValue =
            serde_json::from_str(r#"{"formAttribute":"phone","seq":0}"#).unwrap();
        assert_eq!(back.value, None);
        assert_eq!(back.attribute, "phone");
    }
}
