use contracts::usecases::u508_ai_insights::{InsightCategory, InsightRequest, RelayErrorBody};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;

const ENDPOINT: &str = "/api/ai-insights";

/// Запросить AI-аналитику у релея. Ошибка - текст для показа пользователю
pub async fn fetch_insights(category: InsightCategory, context: Value) -> Result<Value, String> {
    let body = InsightRequest::new(category, context);

    let response = Request::post(&api_url(ENDPOINT))
        .json(&body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    interpret_response(status, &text)
}

/// Разобрать ответ релея.
///
/// Не-2xx: сообщение из `{error}`, иначе "HTTP <status>".
/// 2xx с полем `error` тоже считается ошибкой.
pub fn interpret_response(status: u16, text: &str) -> Result<Value, String> {
    if !(200..300).contains(&status) {
        return Err(serde_json::from_str::<RelayErrorBody>(text)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {}", status)));
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {}", e))?;

    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Err(error.to_string());
    }

    Ok(value)
}
