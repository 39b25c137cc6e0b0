pub mod p901_audit_log;
