use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::InsightCategory;

/// Запрос к релею AI-аналитики
///
/// `type` принимается любым JSON-значением: неизвестный тег (в том числе
/// не строка) не ошибка, релей отвечает на него общим промптом.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InsightRequest {
    /// Тег категории (например, "dashboard_insights")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,

    /// Текущие бизнес-метрики, передаются в промпт как есть
    #[serde(default)]
    pub context: Value,
}

impl InsightRequest {
    pub fn new(category: InsightCategory, context: Value) -> Self {
        Self {
            kind: Some(Value::String(category.tag().to_string())),
            context,
        }
    }

    /// Тег, если он передан строкой
    pub fn tag(&self) -> Option<&str> {
        self.kind.as_ref().and_then(Value::as_str)
    }

    /// Категория запроса, если тег известен
    pub fn category(&self) -> Option<InsightCategory> {
        self.tag().and_then(InsightCategory::from_tag)
    }
}
