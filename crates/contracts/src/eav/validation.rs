use super::attribute::AttributeDefinition;
use super::dispatch::presentation;
use super::form_instance::FormInstance;
use super::persistent_type::PersistentType;
use super::serializer::UiValue;
use std::collections::BTreeMap;

/// Synchronous validation rules of one form field.
///
/// Shape follows the generic field rules used elsewhere in the console;
/// numeric bounds are `f64` except for LONG, which is checked by actual
/// `i64` parsing (f64 cannot represent the 64-bit bounds exactly).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueRules {
    pub required: bool,
    pub max_length: Option<usize>,
    pub min_number: Option<f64>,
    pub max_number: Option<f64>,
    /// Value must parse as an integer (INT/LONG)
    pub integer: bool,
}

impl ValueRules {
    /// No constraints at all
    pub const fn none() -> Self {
        Self {
            required: false,
            max_length: None,
            min_number: None,
            max_number: None,
            integer: false,
        }
    }
}

/// Rules for a persistent type, per the validation table of the form engine.
pub fn rules_for(persistent_type: PersistentType, required: bool) -> ValueRules {
    let mut rules = ValueRules {
        required,
        ..ValueRules::none()
    };
    match persistent_type {
        PersistentType::Char => rules.max_length = Some(1),
        PersistentType::Text | PersistentType::Textarea => rules.max_length = Some(2000),
        PersistentType::Int => {
            rules.integer = true;
            rules.min_number = Some(i32::MIN as f64);
            rules.max_number = Some(i32::MAX as f64);
        }
        PersistentType::Long => rules.integer = true,
        PersistentType::Double | PersistentType::Currency => {
            rules.min_number = Some(-1e33);
            rules.max_number = Some(1e33);
        }
        // rich text is validated by its own widget, boolean and dates by
        // the checkbox/date picker
        PersistentType::Richtextarea
        | PersistentType::Boolean
        | PersistentType::Date
        | PersistentType::Datetime => {}
    }
    rules
}

fn validate_single(rules: &ValueRules, label: &str, text: &str) -> Result<(), String> {
    if text.is_empty() {
        if rules.required {
            return Err(format!("{} не может быть пустым", label));
        }
        return Ok(());
    }

    if let Some(max) = rules.max_length {
        if text.chars().count() > max {
            return Err(format!("{} не должен превышать {} символов", label, max));
        }
    }

    if rules.integer {
        let parsed: i64 = text
            .trim()
            .parse()
            .map_err(|_| format!("{} должен быть целым числом", label))?;
        if let (Some(min), Some(max)) = (rules.min_number, rules.max_number) {
            if (parsed as f64) < min || (parsed as f64) > max {
                return Err(format!("{} должен быть в диапазоне {}..{}", label, min, max));
            }
        }
    } else if rules.min_number.is_some() || rules.max_number.is_some() {
        let parsed: f64 = text
            .trim()
            .parse()
            .map_err(|_| format!("{} должен быть числом", label))?;
        if let Some(min) = rules.min_number {
            if parsed < min {
                return Err(format!("{} должен быть не менее {}", label, min));
            }
        }
        if let Some(max) = rules.max_number {
            if parsed > max {
                return Err(format!("{} должен быть не более {}", label, max));
            }
        }
    }

    Ok(())
}

/// Validate the raw text of one attribute's widget.
///
/// Unknown persistent type passes with a warning: an unrecognized future
/// type must not block the rest of the form. For multi-valued attributes
/// every line is validated on its own; blank lines are allowed (they are
/// either kept as empty strings or dropped by the serializer).
pub fn validate_text(attr: &AttributeDefinition, text: &str) -> Result<(), String> {
    let Some(persistent_type) = attr.persistent_type() else {
        log::warn!(
            "attribute '{}': unknown persistent type '{}', validation skipped",
            attr.code,
            attr.persistent_type
        );
        return Ok(());
    };

    let rules = rules_for(persistent_type, attr.required);
    if attr.multiple {
        if text.is_empty() {
            return validate_single(&rules, &attr.name, text);
        }
        let line_rules = ValueRules {
            required: false,
            ..rules
        };
        for line in text.split('\n') {
            validate_single(&line_rules, &attr.name, line)?;
        }
        Ok(())
    } else {
        validate_single(&rules, &attr.name, text)
    }
}

/// Overall form validity: every attribute with a rendered editable widget
/// and a present edit must validate. Attributes without an editable widget
/// (unsupported type/multiplicity/confidentiality) and attributes absent
/// from the edit buffer are excluded.
pub fn is_form_valid(instance: &FormInstance, edits: &BTreeMap<String, UiValue>) -> bool {
    instance.definition.form_attributes.iter().all(|attr| {
        if !presentation(attr).is_editable() {
            return true;
        }
        match edits.get(&attr.code) {
            Some(UiValue::Text(text)) => validate_text(attr, text).is_ok(),
            // checkbox and date picker state is valid by construction
            Some(UiValue::Bool(_)) | Some(UiValue::Date(_)) => true,
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(persistent_type: PersistentType) -> AttributeDefinition {
        AttributeDefinition::new("field", "Поле", persistent_type)
    }

    #[test]
    fn test_char_rejects_two_chars() {
        let a = attr(PersistentType::Char);
        assert!(validate_text(&a, "x").is_ok());
        assert!(validate_text(&a, "").is_ok());
        assert!(validate_text(&a, "xy").is_err());
    }

    #[test]
    fn test_text_max_length() {
        let a = attr(PersistentType::Text);
        assert!(validate_text(&a, &"a".repeat(2000)).is_ok());
        assert!(validate_text(&a, &"a".repeat(2001)).is_err());
    }

    #[test]
    fn test_int_boundaries() {
        let a = attr(PersistentType::Int);
        assert!(validate_text(&a, "2147483647").is_ok());
        assert!(validate_text(&a, "-2147483648").is_ok());
        assert!(validate_text(&a, "2147483648").is_err());
        assert!(validate_text(&a, "-2147483649").is_err());
        assert!(validate_text(&a, "1.5").is_err());
    }

    #[test]
    fn test_long_boundaries() {
        let a = attr(PersistentType::Long);
        assert!(validate_text(&a, "9223372036854775807").is_ok());
        assert!(validate_text(&a, "-9223372036854775808").is_ok());
        assert!(validate_text(&a, "9223372036854775808").is_err());
        assert!(validate_text(&a, "-9223372036854775809").is_err());
    }

    #[test]
    fn test_double_range() {
        let a = attr(PersistentType::Double);
        assert!(validate_text(&a, "1000000.25").is_ok());
        assert!(validate_text(&a, "1e34").is_err());
        assert!(validate_text(&a, "-1e34").is_err());
        assert!(validate_text(&a, "abc").is_err());
    }

    #[test]
    fn test_required_empty() {
        let mut a = attr(PersistentType::Text);
        a.required = true;
        assert!(validate_text(&a, "").is_err());
        assert!(validate_text(&a, "x").is_ok());
    }

    #[test]
    fn test_unknown_type_fail_open() {
        let mut a = attr(PersistentType::Text);
        a.persistent_type = "FUTURE_TYPE".to_string();
        assert!(validate_text(&a, "anything at all").is_ok());
    }

    #[test]
    fn test_multiple_validates_each_line() {
        let mut a = attr(PersistentType::Int);
        a.multiple = true;
        assert!(validate_text(&a, "1\n2\n3").is_ok());
        assert!(validate_text(&a, "1\nboom\n3").is_err());
        // пустые строки допустимы, их судьбу решает сериализатор
        assert!(validate_text(&a, "1\n\n3").is_ok());
    }
}
