//! Общие типы, не привязанные к конкретному агрегату

pub mod form_state;
