use crate::shared::api_utils::api_url;
use contracts::projections::p901_audit_log::{AuditFilter, AuditLogEntry};
use gloo_net::http::Request;

/// Получить журнал аудита с фильтрами
pub async fn list_entries(filter: &AuditFilter) -> Result<Vec<AuditLogEntry>, String> {
    let mut url = api_url("/api/audit");
    let query = filter.to_query_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<AuditLogEntry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
