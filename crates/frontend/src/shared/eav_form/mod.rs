//! Dynamic EAV Form UI Module
//!
//! Renders a form instance (definition + stored values) of any entity,
//! dispatching every attribute to its widget and collecting the edited
//! values back into the flat array the external API expects.
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::EavForm;
pub use view_model::EavFormViewModel;
