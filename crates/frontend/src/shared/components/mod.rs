pub mod ui;

pub use ui::{Button, Checkbox, Input, Select, Textarea};
