use crate::eav::UiValue;
use std::collections::BTreeMap;

/// Edit buffer of a rendered EAV form: raw widget state per attribute code.
///
/// An attribute missing from the buffer was never edited (or never received
/// a value the client may echo back) and is skipped on save.
pub type FormEdits = BTreeMap<String, UiValue>;
