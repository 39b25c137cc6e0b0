//! Read-only проекции (данные только для чтения, без DTO записи)

pub mod p901_audit_log;
