//! EAV form core.
//!
//! Dynamic forms: a server-supplied form definition (ordered attribute list)
//! plus typed values per attribute. This module owns the data model, the
//! bidirectional mapping between raw widget state and typed form values,
//! per-type validation and the ordered widget-dispatch policy. The renderer
//! in the frontend crate consumes it; nothing here touches the network.

pub mod attribute;
pub mod dispatch;
pub mod form_instance;
pub mod form_value;
pub mod persistent_type;
pub mod serializer;
pub mod validation;

pub use attribute::AttributeDefinition;
pub use dispatch::{presentation, FieldPresentation};
pub use form_instance::{FormDefinition, FormInstance};
pub use form_value::{FormValue, FormValueKind};
pub use persistent_type::PersistentType;
pub use serializer::{collect_form_values, deserialize_attribute, serialize_attribute, UiValue};
pub use validation::{is_form_valid, rules_for, validate_text, ValueRules};
