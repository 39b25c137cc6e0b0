//! Coded enumerations of the console.
//!
//! Every enum persisted by the external API carries a stable string code and
//! a human-readable label. Instead of an inheritance-based helper each enum
//! implements [`CodedEnum`] and the lookups are plain generic functions that
//! never panic: unknown input yields `None` (or echoes the key back for
//! labels).

pub mod audit_operation;
pub mod identity_state;
pub mod policy_type;
pub mod recursion_type;
pub mod rule_comparison;
pub mod script_category;
pub mod task_state;

pub use audit_operation::AuditOperation;
pub use identity_state::IdentityState;
pub use policy_type::PolicyType;
pub use recursion_type::RecursionType;
pub use rule_comparison::RuleComparison;
pub use script_category::ScriptCategory;
pub use task_state::TaskState;

/// Перечисление с персистентным кодом и человекочитаемым названием
pub trait CodedEnum: Sized + Copy + PartialEq + 'static {
    /// Все элементы перечисления
    fn all() -> &'static [Self];

    /// Персистентный код (ключ во внешнем API)
    fn code(&self) -> &'static str;

    /// Человекочитаемое название
    fn display_name(&self) -> &'static str;
}

/// Найти персистентный код по элементу перечисления (линейный поиск)
pub fn key_by_symbol<E: CodedEnum>(symbol: E) -> Option<&'static str> {
    E::all().iter().find(|e| **e == symbol).map(|e| e.code())
}

/// Найти элемент перечисления по персистентному коду
pub fn symbol_by_key<E: CodedEnum>(key: &str) -> Option<E> {
    E::all().iter().copied().find(|e| e.code() == key)
}

/// Все элементы перечисления
pub fn values<E: CodedEnum>() -> &'static [E] {
    E::all()
}

/// Название по коду; неизвестный код возвращается как есть
pub fn nice_label<E: CodedEnum>(key: &str) -> String {
    symbol_by_key::<E>(key)
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_by_symbol() {
        assert_eq!(key_by_symbol(IdentityState::Valid), Some("VALID"));
        assert_eq!(key_by_symbol(AuditOperation::Del), Some("DEL"));
    }

    #[test]
    fn test_symbol_by_key() {
        assert_eq!(
            symbol_by_key::<IdentityState>("DISABLED"),
            Some(IdentityState::Disabled)
        );
        assert_eq!(symbol_by_key::<IdentityState>("NO_SUCH_STATE"), None);
    }

    #[test]
    fn test_values_roundtrip() {
        // каждый код должен однозначно находить свой элемент
        for state in values::<IdentityState>() {
            assert_eq!(symbol_by_key::<IdentityState>(state.code()), Some(*state));
        }
        for cat in values::<ScriptCategory>() {
            assert_eq!(symbol_by_key::<ScriptCategory>(cat.code()), Some(*cat));
        }
    }

    #[test]
    fn test_nice_label_unknown_passthrough() {
        assert_eq!(nice_label::<IdentityState>("VALID"), "Активен");
        assert_eq!(nice_label::<IdentityState>("???"), "???");
    }
}
