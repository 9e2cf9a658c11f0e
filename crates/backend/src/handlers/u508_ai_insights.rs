use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::usecases::u508_ai_insights::{InsightRequest, RelayErrorBody};
use serde_json::Value;
use thiserror::Error;

use crate::routes::AppState;
use crate::shared::llm::LlmError;
use crate::usecases::u508_ai_insights;

/// Ошибка релея; всегда превращается в JSON `{error}` с кодом статуса
#[derive(Debug, Error)]
pub enum InsightError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("{0}")]
    BadRequest(String),
}

impl InsightError {
    fn status(&self) -> StatusCode {
        match self {
            InsightError::Llm(LlmError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            InsightError::Llm(LlmError::QuotaExceeded) => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Сообщение для клиента. Детали ответа шлюза остаются в логах
    fn public_message(&self) -> String {
        match self {
            InsightError::Llm(LlmError::RateLimited) => {
                "AI service is busy. Please try again in a moment.".to_string()
            }
            InsightError::Llm(LlmError::QuotaExceeded) => {
                "AI credits depleted. Please add credits to continue.".to_string()
            }
            InsightError::Llm(LlmError::Unavailable(_)) => "AI service unavailable".to_string(),
            InsightError::Llm(e) => e.to_string(),
            InsightError::BadRequest(message) => message.clone(),
        }
    }
}

impl IntoResponse for InsightError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("AI insights error: {}", self);
        }
        let body = RelayErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/ai-insights
///
/// Тело разбирается без проверки Content-Type: клиенты шлют JSON и с
/// `text/plain`, и без заголовка вовсе.
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, InsightError> {
    let request: InsightRequest = serde_json::from_slice(&body)
        .map_err(|e| InsightError::BadRequest(format!("Invalid request body: {}", e)))?;
    let value = u508_ai_insights::generate_insights(state.provider.as_ref(), request).await?;
    Ok(Json(value))
}
