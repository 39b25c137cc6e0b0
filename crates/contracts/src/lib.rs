//! Shared contracts of the identity-management administration console.
//!
//! Pure data crate: aggregates, DTOs, coded enums and the EAV form core
//! (attribute definitions, form values, serialization and validation).
//! Consumed by the wasm frontend; contains no UI or transport code.

pub mod domain;
pub mod eav;
pub mod enums;
pub mod projections;
pub mod shared;
