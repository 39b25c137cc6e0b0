use super::attribute::AttributeDefinition;
use super::persistent_type::PersistentType;

/// Presentation chosen for one attribute.
///
/// The three `Unsupported*` variants render as warning blocks without an
/// editable widget; such attributes are excluded from value collection and
/// from the form validity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPresentation {
    /// `multiple` combined with a type that has no multi-line editing model
    UnsupportedMultiplicity,
    /// Newline-delimited values in one multi-line widget
    MultilineText { masked: bool },
    /// Single-line input with the per-type validation rule attached
    SingleLineText { masked: bool },
    /// Confidential value of a type that cannot be masked as text
    UnsupportedConfidential,
    DatePicker { with_time: bool },
    PlainTextArea,
    RichText,
    BooleanCheckbox,
    /// Persistent type this client does not know
    UnsupportedType,
}

impl FieldPresentation {
    /// Whether the presentation produces an editable widget. Non-editable
    /// fields are display-only warnings and never reach the save payload.
    pub fn is_editable(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedMultiplicity | Self::UnsupportedConfidential | Self::UnsupportedType
        )
    }
}

/// Select exactly one presentation for an attribute.
///
/// The rules are ordered; multiplicity takes precedence over
/// confidentiality, which takes precedence over the type-specific widgets.
/// Reordering them changes which warning wins for combined cases, so the
/// sequence below is contract, not style.
pub fn presentation(attr: &AttributeDefinition) -> FieldPresentation {
    let persistent_type = match attr.persistent_type() {
        Some(pt) => pt,
        None => {
            log::warn!(
                "attribute '{}': unknown persistent type '{}', rendered as unsupported",
                attr.code,
                attr.persistent_type
            );
            return FieldPresentation::UnsupportedType;
        }
    };

    if attr.multiple {
        return match persistent_type {
            PersistentType::Textarea
            | PersistentType::Richtextarea
            | PersistentType::Boolean
            | PersistentType::Date
            | PersistentType::Datetime => FieldPresentation::UnsupportedMultiplicity,
            _ => FieldPresentation::MultilineText {
                masked: attr.confidential,
            },
        };
    }

    if matches!(
        persistent_type,
        PersistentType::Text
            | PersistentType::Char
            | PersistentType::Int
            | PersistentType::Long
            | PersistentType::Double
            | PersistentType::Currency
    ) {
        return FieldPresentation::SingleLineText {
            masked: attr.confidential,
        };
    }

    // from here on the type has no masked rendering
    if attr.confidential {
        return FieldPresentation::UnsupportedConfidential;
    }

    match persistent_type {
        PersistentType::Date => FieldPresentation::DatePicker { with_time: false },
        PersistentType::Datetime => FieldPresentation::DatePicker { with_time: true },
        PersistentType::Textarea => FieldPresentation::PlainTextArea,
        PersistentType::Richtextarea => FieldPresentation::RichText,
        PersistentType::Boolean => FieldPresentation::BooleanCheckbox,
        // text-like and numeric types were handled above
        _ => FieldPresentation::UnsupportedType,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(persistent_type: PersistentType) -> AttributeDefinition {
        AttributeDefinition::new("field", "Поле", persistent_type)
    }

    #[test]
    fn test_multiple_unsupported_types() {
        for pt in [
            PersistentType::Textarea,
            PersistentType::Richtextarea,
            PersistentType::Boolean,
            PersistentType::Date,
            PersistentType::Datetime,
        ] {
            let mut a = attr(pt);
            a.multiple = true;
            assert_eq!(presentation(&a), FieldPresentation::UnsupportedMultiplicity);
            assert!(!presentation(&a).is_editable());
        }
    }

    #[test]
    fn test_multiple_text_and_numbers() {
        for pt in [
            PersistentType::Text,
            PersistentType::Char,
            PersistentType::Int,
            PersistentType::Long,
            PersistentType::Double,
            PersistentType::Currency,
        ] {
            let mut a = attr(pt);
            a.multiple = true;
            assert_eq!(
                presentation(&a),
                FieldPresentation::MultilineText { masked: false }
            );
        }
    }

    #[test]
    fn test_multiplicity_beats_confidentiality() {
        let mut a = attr(PersistentType::Text);
        a.multiple = true;
        a.confidential = true;
        assert_eq!(
            presentation(&a),
            FieldPresentation::MultilineText { masked: true }
        );
    }

    #[test]
    fn test_single_line_masked() {
        let mut a = attr(PersistentType::Long);
        a.confidential = true;
        assert_eq!(
            presentation(&a),
            FieldPresentation::SingleLineText { masked: true }
        );
    }

    #[test]
    fn test_confidential_unsupported_for_widget_types() {
        for pt in [
            PersistentType::Boolean,
            PersistentType::Date,
            PersistentType::Datetime,
            PersistentType::Textarea,
            PersistentType::Richtextarea,
        ] {
            let mut a = attr(pt);
            a.confidential = true;
            assert_eq!(presentation(&a), FieldPresentation::UnsupportedConfidential);
        }
    }

    #[test]
    fn test_type_specific_widgets() {
        assert_eq!(
            presentation(&attr(PersistentType::Date)),
            FieldPresentation::DatePicker { with_time: false }
        );
        assert_eq!(
            presentation(&attr(PersistentType::Datetime)),
            FieldPresentation::DatePicker { with_time: true }
        );
        assert_eq!(
            presentation(&attr(PersistentType::Textarea)),
            FieldPresentation::PlainTextArea
        );
        assert_eq!(
            presentation(&attr(PersistentType::Richtextarea)),
            FieldPresentation::RichText
        );
        assert_eq!(
            presentation(&attr(PersistentType::Boolean)),
            FieldPresentation::BooleanCheckbox
        );
    }

    #[test]
    fn test_unknown_type() {
        let mut a = attr(PersistentType::Text);
        a.persistent_type = "FUTURE_TYPE".to_string();
        assert_eq!(presentation(&a), FieldPresentation::UnsupportedType);
        assert!(!presentation(&a).is_editable());
    }
}
