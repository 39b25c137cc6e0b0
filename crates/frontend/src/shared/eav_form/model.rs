use crate::shared::api_utils::api_base;
use contracts::eav::{FormDefinition, FormInstance, FormValue};
use gloo_net::http::Request;
use serde::Deserialize;

/// Ответ внешнего API: определение формы и плоский список значений.
#[derive(Debug, Clone, Deserialize)]
struct FormInstanceResponse {
    #[serde(rename = "formDefinition")]
    form_definition: FormDefinition,
    #[serde(default)]
    values: Vec<FormValue>,
}

/// Загрузить экземпляр формы для сущности `entity` с идентификатором `id`
pub async fn fetch_form_instance(entity: &str, id: &str) -> Result<FormInstance, String> {
    let url = format!(
        "{}/api/{}/{}/form-instance",
        api_base(),
        entity,
        urlencoding::encode(id)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch form instance: {}", response.status()));
    }

    let data: FormInstanceResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(FormInstance::new(data.form_definition, data.values))
}

/// Сохранить значения формы; массив полностью заменяет прежний набор
pub async fn save_form_values(entity: &str, id: &str, values: &[FormValue]) -> Result<(), String> {
    let url = format!(
        "{}/api/{}/{}/form-values",
        api_base(),
        entity,
        urlencoding::encode(id)
    );
    let response = Request::post(&url)
        .json(&values)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        if text.is_empty() {
            return Err(format!("Failed to save form values: {}", response.status()));
        }
        return Err(format!(
            "Failed to save form values: {} ({})",
            response.status(),
            text
        ));
    }

    Ok(())
}
