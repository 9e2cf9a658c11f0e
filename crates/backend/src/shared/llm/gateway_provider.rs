use super::types::{ChatMessage, LlmError, LlmProvider, LlmResponse};
use crate::shared::config::GatewayConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Провайдер для OpenAI-совместимого chat-completion шлюза
pub struct GatewayProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    model: Option<String>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: Option<i64>,
}

impl GatewayProvider {
    /// Создать провайдер из конфигурации (с таймаутом на запрос)
    pub fn new(config: &GatewayConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;
        Ok(Self::with_client(config, client))
    }

    /// Создать с готовым HTTP клиентом
    pub fn with_client(config: &GatewayConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
        }
    }

    /// Ключ читается при каждом вызове, а не при старте
    fn api_key(&self) -> Result<String, LlmError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(LlmError::Configuration(self.api_key_env.clone())),
        }
    }
}

#[async_trait]
impl LlmProvider for GatewayProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key()?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("AI gateway timeout: {}", e);
                } else {
                    tracing::error!("AI gateway request failed: {}", e);
                }
                LlmError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return match status {
                StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimited),
                StatusCode::PAYMENT_REQUIRED => Err(LlmError::QuotaExceeded),
                _ => {
                    let error_text = response.text().await.unwrap_or_default();
                    tracing::error!("AI gateway error: {} {}", status.as_u16(), error_text);
                    Err(LlmError::Unavailable(format!("HTTP {}", status.as_u16())))
                }
            };
        }

        let data: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("AI gateway returned unreadable body: {}", e);
            LlmError::Unavailable(e.to_string())
        })?;

        let choice = data.choices.into_iter().next();
        let finish_reason = choice.as_ref().and_then(|c| c.finish_reason.clone());
        let content = choice
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        Ok(LlmResponse {
            content,
            tokens_used: data.usage.and_then(|u| u.total_tokens),
            model: data.model,
            finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "AI Gateway"
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{completion_reply, spawn_upstream};
    use super::*;
    use serde_json::json;

    fn provider_for(endpoint: String, api_key_env: &str) -> GatewayProvider {
        let config = GatewayConfig {
            endpoint,
            api_key_env: api_key_env.to_string(),
            ..GatewayConfig::default()
        };
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        GatewayProvider::with_client(&config, client)
    }

    #[tokio::test]
    async fn test_success_sends_bearer_and_messages() {
        std::env::set_var("TEST_GATEWAY_KEY_SUCCESS", "secret-1");
        let (endpoint, recorded) =
            spawn_upstream(axum::http::StatusCode::OK, completion_reply("hello")).await;
        let provider = provider_for(endpoint, "TEST_GATEWAY_KEY_SUCCESS");

        let response = provider
            .chat_completion(vec![ChatMessage::system("sys"), ChatMessage::user("usr")])
            .await
            .unwrap();

        assert_eq!(response.content, "hello");
        assert_eq!(response.tokens_used, Some(42));
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.hits, 1);
        assert_eq!(recorded.authorization.as_deref(), Some("Bearer secret-1"));
        assert_eq!(
            recorded.body.clone().unwrap(),
            json!({
                "model": "google/gemini-2.5-flash",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_status_mapping() {
        std::env::set_var("TEST_GATEWAY_KEY_STATUS", "secret-2");

        let (endpoint, _) =
            spawn_upstream(axum::http::StatusCode::TOO_MANY_REQUESTS, json!({})).await;
        let err = provider_for(endpoint, "TEST_GATEWAY_KEY_STATUS")
            .chat_completion(vec![ChatMessage::user("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::RateLimited));

        let (endpoint, _) =
            spawn_upstream(axum::http::StatusCode::PAYMENT_REQUIRED, json!({})).await;
        let err = provider_for(endpoint, "TEST_GATEWAY_KEY_STATUS")
            .chat_completion(vec![ChatMessage::user("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::QuotaExceeded));

        let (endpoint, _) =
            spawn_upstream(axum::http::StatusCode::BAD_GATEWAY, json!({"error": "down"})).await;
        let err = provider_for(endpoint, "TEST_GATEWAY_KEY_STATUS")
            .chat_completion(vec![ChatMessage::user("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        std::env::remove_var("TEST_GATEWAY_KEY_MISSING");
        let (endpoint, recorded) =
            spawn_upstream(axum::http::StatusCode::OK, completion_reply("never")).await;

        let err = provider_for(endpoint, "TEST_GATEWAY_KEY_MISSING")
            .chat_completion(vec![ChatMessage::user("x")])
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Configuration(ref name) if name == "TEST_GATEWAY_KEY_MISSING"));
        assert_eq!(recorded.lock().unwrap().hits, 0);
    }

    #[tokio::test]
    async fn test_no_choices_gives_empty_content() {
        std::env::set_var("TEST_GATEWAY_KEY_EMPTY", "secret-3");
        let (endpoint, _) =
            spawn_upstream(axum::http::StatusCode::OK, json!({"choices": []})).await;

        let response = provider_for(endpoint, "TEST_GATEWAY_KEY_EMPTY")
            .chat_completion(vec![ChatMessage::user("x")])
            .await
            .unwrap();
        assert_eq!(response.content, "");
    }

    #[tokio::test]
    async fn test_unreachable_gateway() {
        std::env::set_var("TEST_GATEWAY_KEY_UNREACHABLE", "secret-4");
        // занять свободный порт и сразу его освободить
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = provider_for(
            format!("http://{}/v1/chat/completions", addr),
            "TEST_GATEWAY_KEY_UNREACHABLE",
        );
        let err = provider
            .chat_completion(vec![ChatMessage::user("x")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Unavailable(_)));
    }
}
