use super::attribute::AttributeDefinition;
use super::dispatch::presentation;
use super::form_instance::FormInstance;
use super::form_value::{FormValue, FormValueKind};
use super::persistent_type::ValueTarget;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Raw state a widget hands back to the form.
///
/// Text widgets (single- and multi-line) produce `Text`, the checkbox
/// produces `Bool`, the date picker `Date`. An attribute *absent* from the
/// edit buffer is the "undefined" case: it is skipped entirely and nothing
/// is submitted for it — this is how an untouched confidential field avoids
/// echoing its opaque proxy back to the server.
#[derive(Debug, Clone, PartialEq)]
pub enum UiValue {
    Text(String),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl UiValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

fn reuse_id(previous: &[FormValue], index: usize) -> Option<uuid::Uuid> {
    previous.get(index).and_then(|v| v.id)
}

fn parse_long(attr: &AttributeDefinition, text: &str) -> Result<i64, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("{}: '{}' не является целым числом", attr.name, text))
}

fn parse_double(attr: &AttributeDefinition, text: &str) -> Result<f64, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("{}: '{}' не является числом", attr.name, text))
}

fn parse_date(attr: &AttributeDefinition, text: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| format!("{}: '{}' не является датой", attr.name, text))
}

/// Serialize the raw widget state of one attribute into form values.
///
/// Unknown persistent type logs a warning and produces nothing — the value
/// is not sent and the rest of the form is unaffected.
///
/// Multi-valued attributes are edited as newline-delimited text. String
/// kinds keep empty lines as empty-string values so the join/split pair
/// round-trips exactly; numeric kinds drop blank lines. `seq` is the index
/// in the resulting sequence. A wholly empty text produces no values.
///
/// The value at index `i` inherits the server id of `previous[i]` when one
/// exists, so the external API sees an update rather than delete+insert;
/// surplus old values are simply not carried forward (the submitted array
/// replaces the full prior set).
pub fn serialize_attribute(
    attr: &AttributeDefinition,
    ui: &UiValue,
    previous: &[FormValue],
) -> Result<Vec<FormValue>, String> {
    let Some(persistent_type) = attr.persistent_type() else {
        log::warn!(
            "attribute '{}': unknown persistent type '{}', value not submitted",
            attr.code,
            attr.persistent_type
        );
        return Ok(Vec::new());
    };
    let target = persistent_type.value_target();

    if attr.multiple {
        let Some(text) = ui.as_text() else {
            return Err(format!(
                "{}: многозначный атрибут редактируется только текстом",
                attr.name
            ));
        };
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut kinds: Vec<Option<FormValueKind>> = Vec::new();
        match target {
            ValueTarget::String => {
                // empty lines stay as empty-string values
                for line in text.split('\n') {
                    kinds.push(Some(FormValueKind::String(line.to_string())));
                }
            }
            ValueTarget::Long => {
                for line in text.split('\n').filter(|l| !l.trim().is_empty()) {
                    kinds.push(Some(FormValueKind::Long(parse_long(attr, line)?)));
                }
            }
            ValueTarget::Double => {
                for line in text.split('\n').filter(|l| !l.trim().is_empty()) {
                    kinds.push(Some(FormValueKind::Double(parse_double(attr, line)?)));
                }
            }
            ValueTarget::Boolean | ValueTarget::Date => {
                // no multi-line editing model for these, see dispatch
                log::warn!(
                    "attribute '{}': multiple values are not supported for type '{}'",
                    attr.code,
                    attr.persistent_type
                );
                return Ok(Vec::new());
            }
        }

        let values = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| FormValue {
                id: reuse_id(previous, i),
                attribute: attr.code.clone(),
                seq: i as i32,
                value: kind,
            })
            .collect();
        return Ok(values);
    }

    let kind = match (target, ui) {
        (ValueTarget::String, UiValue::Text(t)) => Some(FormValueKind::String(t.clone())),
        (ValueTarget::Long, UiValue::Text(t)) => {
            if t.trim().is_empty() {
                None
            } else {
                Some(FormValueKind::Long(parse_long(attr, t)?))
            }
        }
        (ValueTarget::Double, UiValue::Text(t)) => {
            if t.trim().is_empty() {
                None
            } else {
                Some(FormValueKind::Double(parse_double(attr, t)?))
            }
        }
        (ValueTarget::Boolean, UiValue::Bool(b)) => Some(FormValueKind::Boolean(*b)),
        // default values arrive as strings; "true" and everything else
        (ValueTarget::Boolean, UiValue::Text(t)) => Some(FormValueKind::Boolean(t == "true")),
        (ValueTarget::Date, UiValue::Date(d)) => Some(FormValueKind::Date(*d)),
        (ValueTarget::Date, UiValue::Text(t)) => {
            if t.trim().is_empty() {
                None
            } else {
                Some(FormValueKind::Date(parse_date(attr, t)?))
            }
        }
        _ => {
            return Err(format!(
                "{}: значение виджета несовместимо с типом '{}'",
                attr.name, attr.persistent_type
            ))
        }
    };

    Ok(vec![FormValue {
        id: reuse_id(previous, 0),
        attribute: attr.code.clone(),
        seq: 0,
        value: kind,
    }])
}

/// Project stored values of one attribute into the display string a text
/// widget starts from.
///
/// No stored values fall back to the attribute default. Confidential
/// attributes always read the string field, whatever their declared type:
/// their payload is an opaque proxy and must never be coerced. Multi-valued
/// attributes join their values with `\n`; when every stored value is an
/// explicit null the whole result stays `None`.
pub fn deserialize_attribute(attr: &AttributeDefinition, values: &[FormValue]) -> Option<String> {
    if values.is_empty() {
        return attr.default_value.clone();
    }

    if attr.confidential {
        if attr.multiple {
            if values.iter().all(|v| v.value.is_none()) {
                return None;
            }
            return Some(
                values
                    .iter()
                    .map(|v| {
                        v.value
                            .as_ref()
                            .and_then(FormValueKind::string_value)
                            .unwrap_or("")
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        return values[0]
            .value
            .as_ref()
            .and_then(FormValueKind::string_value)
            .map(str::to_string);
    }

    if attr.multiple {
        if values.iter().all(|v| v.value.is_none()) {
            return None;
        }
        return Some(
            values
                .iter()
                .map(|v| v.value.as_ref().map(FormValueKind::display).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    values[0].value.as_ref().map(FormValueKind::display)
}

/// The save path: serialize every edited attribute of the instance into the
/// flat array submitted to the external API.
///
/// Definition order is preserved. Attributes without an editable widget and
/// attributes absent from the edit buffer contribute nothing.
pub fn collect_form_values(
    instance: &FormInstance,
    edits: &BTreeMap<String, UiValue>,
) -> Result<Vec<FormValue>, String> {
    let mut out = Vec::new();
    for attr in &instance.definition.form_attributes {
        if !presentation(attr).is_editable() {
            continue;
        }
        let Some(ui) = edits.get(&attr.code) else {
            continue;
        };
        out.extend(serialize_attribute(attr, ui, instance.values_for(&attr.code))?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eav::form_instance::FormDefinition;
    use crate::eav::persistent_type::PersistentType;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn attr(persistent_type: PersistentType) -> AttributeDefinition {
        AttributeDefinition::new("field", "Поле", persistent_type)
    }

    fn single_roundtrip(persistent_type: PersistentType, text: &str) {
        let a = attr(persistent_type);
        let values = serialize_attribute(&a, &UiValue::Text(text.to_string()), &[]).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].seq, 0);
        assert_eq!(deserialize_attribute(&a, &values).as_deref(), Some(text));
    }

    #[test]
    fn test_roundtrip_single_valued() {
        single_roundtrip(PersistentType::Char, "x");
        single_roundtrip(PersistentType::Text, "hello world");
        single_roundtrip(PersistentType::Textarea, "два\nабзаца");
        single_roundtrip(PersistentType::Int, "2147483647");
        single_roundtrip(PersistentType::Long, "-9223372036854775808");
        single_roundtrip(PersistentType::Double, "1.5");
        single_roundtrip(PersistentType::Currency, "10.25");
        single_roundtrip(PersistentType::Date, "2024-03-15T00:00:00Z");
        single_roundtrip(PersistentType::Datetime, "2024-03-15T14:02:26Z");
    }

    #[test]
    fn test_multiplicity_splitting() {
        let mut a = attr(PersistentType::Text);
        a.multiple = true;
        let values = serialize_attribute(&a, &UiValue::Text("a\nb\nc".into()), &[]).unwrap();
        assert_eq!(values.len(), 3);
        for (i, expected) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(values[i].seq, i as i32);
            assert_eq!(
                values[i].value,
                Some(FormValueKind::String(expected.to_string()))
            );
        }
        assert_eq!(deserialize_attribute(&a, &values).as_deref(), Some("a\nb\nc"));
    }

    #[test]
    fn test_multiplicity_empty_lines_preserved_for_strings() {
        let mut a = attr(PersistentType::Text);
        a.multiple = true;
        let values = serialize_attribute(&a, &UiValue::Text("a\n\nc".into()), &[]).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[1].value, Some(FormValueKind::String(String::new())));
        assert_eq!(deserialize_attribute(&a, &values).as_deref(), Some("a\n\nc"));
    }

    #[test]
    fn test_multiplicity_blank_lines_dropped_for_numbers() {
        let mut a = attr(PersistentType::Int);
        a.multiple = true;
        let values = serialize_attribute(&a, &UiValue::Text("1\n\n3".into()), &[]).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value, Some(FormValueKind::Long(1)));
        assert_eq!(values[1].value, Some(FormValueKind::Long(3)));
        assert_eq!(values[1].seq, 1);
    }

    #[test]
    fn test_identity_reuse_by_index() {
        let mut a = attr(PersistentType::Text);
        a.multiple = true;
        let id0 = Uuid::new_v4();
        let id1 = Uuid::new_v4();
        let mut prev0 = FormValue::new("field", 0, Some(FormValueKind::String("old-a".into())));
        prev0.id = Some(id0);
        let mut prev1 = FormValue::new("field", 1, Some(FormValueKind::String("old-b".into())));
        prev1.id = Some(id1);

        let values =
            serialize_attribute(&a, &UiValue::Text("a\nb\nc".into()), &[prev0, prev1]).unwrap();
        assert_eq!(values[0].id, Some(id0));
        assert_eq!(values[1].id, Some(id1));
        assert_eq!(values[2].id, None);

        // shrinking drops the surplus record entirely
        let values = serialize_attribute(
            &a,
            &UiValue::Text("only".into()),
            &values,
        )
        .unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].id, Some(id0));
    }

    #[test]
    fn test_confidential_always_reads_string_field() {
        let mut a = attr(PersistentType::Long);
        a.confidential = true;
        let proxy = FormValue::new("field", 0, Some(FormValueKind::String("******".into())));
        assert_eq!(deserialize_attribute(&a, &[proxy]).as_deref(), Some("******"));

        // a non-string payload is never coerced for confidential reads
        let numeric = FormValue::new("field", 0, Some(FormValueKind::Long(123)));
        assert_eq!(deserialize_attribute(&a, &[numeric]), None);
    }

    #[test]
    fn test_default_value_fallback() {
        let mut a = attr(PersistentType::Text);
        a.default_value = Some("по умолчанию".into());
        assert_eq!(
            deserialize_attribute(&a, &[]).as_deref(),
            Some("по умолчанию")
        );
        // explicit null is a stored value, not an absence
        let null = FormValue::new("field", 0, None);
        assert_eq!(deserialize_attribute(&a, &[null]), None);
    }

    #[test]
    fn test_boolean_default_parsing() {
        let a = attr(PersistentType::Boolean);
        let values = serialize_attribute(&a, &UiValue::Text("true".into()), &[]).unwrap();
        assert_eq!(values[0].value, Some(FormValueKind::Boolean(true)));
        let values = serialize_attribute(&a, &UiValue::Text("anything".into()), &[]).unwrap();
        assert_eq!(values[0].value, Some(FormValueKind::Boolean(false)));
    }

    #[test]
    fn test_unknown_type_is_non_fatal() {
        let mut a = attr(PersistentType::Text);
        a.persistent_type = "FUTURE_TYPE".to_string();
        let values = serialize_attribute(&a, &UiValue::Text("x".into()), &[]).unwrap();
        assert!(values.is_empty());
    }

    fn scenario_instance() -> FormInstance {
        let mut email = AttributeDefinition::new("email", "Email", PersistentType::Text);
        email.required = true;
        let mut scores = AttributeDefinition::new("scores", "Баллы", PersistentType::Int);
        scores.multiple = true;
        let definition = FormDefinition {
            id: None,
            code: "identity-eav".into(),
            module: "core".into(),
            entity_type: "identity".into(),
            name: "Дополнительные атрибуты".into(),
            main: true,
            form_attributes: vec![email, scores],
        };
        FormInstance::new(definition, Vec::new())
    }

    #[test]
    fn test_collect_end_to_end() {
        let instance = scenario_instance();
        let mut edits = BTreeMap::new();
        edits.insert("email".to_string(), UiValue::Text("a@b.com".into()));
        edits.insert("scores".to_string(), UiValue::Text("1\n2\n3".into()));

        let values = collect_form_values(&instance, &edits).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0].attribute, "email");
        assert_eq!(values[0].seq, 0);
        assert_eq!(
            values[0].value,
            Some(FormValueKind::String("a@b.com".into()))
        );
        for (i, expected) in [1i64, 2, 3].iter().enumerate() {
            assert_eq!(values[i + 1].attribute, "scores");
            assert_eq!(values[i + 1].seq, i as i32);
            assert_eq!(values[i + 1].value, Some(FormValueKind::Long(*expected)));
        }
    }

    #[test]
    fn test_collect_skips_absent_and_unsupported() {
        let mut instance = scenario_instance();
        // absent edit: nothing submitted for scores
        let mut edits = BTreeMap::new();
        edits.insert("email".to_string(), UiValue::Text("a@b.com".into()));
        let values = collect_form_values(&instance, &edits).unwrap();
        assert_eq!(values.len(), 1);

        // unsupported combination is excluded even with an edit present
        let mut flags = AttributeDefinition::new("flags", "Флаги", PersistentType::Boolean);
        flags.multiple = true;
        instance.definition.form_attributes.push(flags);
        let mut edits = BTreeMap::new();
        edits.insert("flags".to_string(), UiValue::Text("true\nfalse".into()));
        let values = collect_form_values(&instance, &edits).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_form_valid_with_unknown_type_field() {
        use crate::eav::validation::is_form_valid;

        let mut instance = scenario_instance();
        let mut future = AttributeDefinition::new("future", "Будущее", PersistentType::Text);
        future.persistent_type = "FUTURE_TYPE".to_string();
        instance.definition.form_attributes.push(future);

        let mut edits = BTreeMap::new();
        edits.insert("email".to_string(), UiValue::Text("a@b.com".into()));
        edits.insert("scores".to_string(), UiValue::Text("1\n2".into()));
        assert!(is_form_valid(&instance, &edits));

        edits.insert("scores".to_string(), UiValue::Text("не число".into()));
        assert!(!is_form_valid(&instance, &edits));
    }

    #[test]
    fn test_date_serialization() {
        let a = attr(PersistentType::Datetime);
        let stamp = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let values = serialize_attribute(&a, &UiValue::Date(stamp), &[]).unwrap();
        assert_eq!(values[0].value, Some(FormValueKind::Date(stamp)));
    }
}
