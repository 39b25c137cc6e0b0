pub mod a001_identity;
pub mod a002_role;
pub mod a003_password_policy;
pub mod a004_script;
pub mod a005_automatic_role;
pub mod a006_scheduled_task;
pub mod a007_form_definition;
