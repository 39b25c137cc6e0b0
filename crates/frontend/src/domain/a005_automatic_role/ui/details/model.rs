use crate::shared::api_utils::api_base;
use contracts::domain::a005_automatic_role::aggregate::{AutomaticRole, AutomaticRoleDto};
use gloo_net::http::Request;

pub async fn fetch_list() -> Result<Vec<AutomaticRole>, String> {
    let response = Request::get(&format!("{}/api/automatic-role", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<AutomaticRole>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_by_id(id: String) -> Result<AutomaticRole, String> {
    let response = Request::get(&format!("{}/api/automatic-role/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<AutomaticRole>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn save_form(dto: &AutomaticRoleDto) -> Result<String, String> {
    let response = Request::post(&format!("{}/api/automatic-role", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), text));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(result["id"].as_str().unwrap_or("").to_string())
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/automatic-role/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
