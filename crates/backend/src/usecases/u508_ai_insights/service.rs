use contracts::usecases::u508_ai_insights::InsightRequest;
use serde_json::Value;
use uuid::Uuid;

use super::prompts::build_prompts;
use crate::shared::llm::{extract_json, ChatMessage, LlmError, LlmProvider};

/// Получить AI-аналитику по запросу: промпты по категории, один вызов
/// модели, разбор ответа в JSON (или `{"raw": ...}`).
pub async fn generate_insights(
    provider: &dyn LlmProvider,
    request: InsightRequest,
) -> Result<Value, LlmError> {
    let request_id = Uuid::new_v4();
    let category = request.category();

    match category {
        Some(category) => {
            tracing::info!(%request_id, %category, "AI insights request");
        }
        None => {
            tracing::warn!(
                %request_id,
                tag = ?request.kind,
                "Unknown insight category, using generic prompt"
            );
        }
    }

    let prompts = build_prompts(category, &request.context);
    let messages = vec![
        ChatMessage::system(prompts.system),
        ChatMessage::user(prompts.user),
    ];

    let response = provider.chat_completion(messages).await.map_err(|e| {
        tracing::warn!(%request_id, provider = provider.provider_name(), "AI insights failed: {}", e);
        e
    })?;

    tracing::debug!(
        %request_id,
        tokens = ?response.tokens_used,
        finish_reason = ?response.finish_reason,
        "AI insights response received"
    );

    Ok(extract_json(&response.content))
}


#[cfg(test)]
mod tests {
    use super::test_support::MockProvider;
    use super::*;
    use crate::shared::llm::ChatRole;
    use contracts::usecases::u508_ai_insights::InsightCategory;
    use serde_json::json;

    #[tokio::test]
    async fn test_fenced_answer_is_parsed() {
        let provider = MockProvider::replying("```json\n{\"summary\":\"ok\"}\n```");
        let request = InsightRequest::new(InsightCategory::DashboardInsights, json!({"orders": 5}));

        let value = generate_insights(&provider, request).await.unwrap();
        assert_eq!(value, json!({"summary": "ok"}));

        let received = provider.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let messages = &received[0];
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
        assert!(messages[1].content.contains(r#"{"orders":5}"#));
    }

    #[tokio::test]
    async fn test_plain_text_answer_is_wrapped() {
        let provider = MockProvider::replying("not json at all");
        let request = InsightRequest::new(InsightCategory::PromotionSuggestion, json!({}));

        let value = generate_insights(&provider, request).await.unwrap();
        assert_eq!(value, json!({"raw": "not json at all"}));
    }

    #[tokio::test]
    async fn test_unknown_category_uses_generic_prompt() {
        let provider = MockProvider::replying("{}");
        let request: InsightRequest =
            serde_json::from_value(json!({"type": "mystery", "context": {"message": "hi"}}))
                .unwrap();

        generate_insights(&provider, request).await.unwrap();

        let received = provider.received.lock().unwrap();
        assert_eq!(
            received[0][0].content,
            "You are a helpful AI assistant for SME business analytics."
        );
        assert_eq!(received[0][1].content, "hi");
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = MockProvider::failing(LlmError::QuotaExceeded);
        let request = InsightRequest::new(InsightCategory::ForecastAnalysis, json!({}));

        let err = generate_insights(&provider, request).await.unwrap_err();
        assert!(matches!(err, LlmError::QuotaExceeded));
    }
}
