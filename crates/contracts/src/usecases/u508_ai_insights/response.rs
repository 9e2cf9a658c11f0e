use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::InsightCategory;

/// Поле, под которым релей возвращает текст модели, если JSON не распознан
pub const RAW_FIELD: &str = "raw";

/// Тело ответа релея при ошибке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayErrorBody {
    pub error: String,
}

// Модель не всегда держится схемы: незнакомые значения перечислений
// попадают в `Unknown`, отсутствующие поля берутся по умолчанию.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Trend,
    Alert,
    Opportunity,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Stable,
    Declining,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Одна рекомендация на главном дашборде
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub confidence: ConfidenceLevel,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInsights {
    pub summary: String,
    pub insights: Vec<AiInsight>,
    pub sustainability_note: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastInsights {
    pub forecast_summary: String,
    /// 0.0 - 1.0
    pub confidence_score: Option<f64>,
    pub trend_direction: TrendDirection,
    pub key_factors: Vec<String>,
    pub recommendation: String,
    pub overstock_risk: RiskLevel,
    pub sustainability_impact: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOpportunity {
    pub segment: String,
    pub action: String,
    pub expected_impact: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementSuggestion {
    pub segment: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInsights {
    pub segment_summary: String,
    /// 0 - 100
    pub momentum_score: Option<f64>,
    pub churn_risk_level: RiskLevel,
    pub top_opportunity: Option<SegmentOpportunity>,
    pub engagement_suggestions: Vec<EngagementSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestedPromotion {
    /// voucher | flash_sale | loyalty_reward
    #[serde(rename = "type")]
    pub kind: String,
    pub target_segment: String,
    pub discount_range: String,
    pub optimal_timing: String,
    pub confidence: ConfidenceLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionImpact {
    pub conversion_uplift: String,
    pub inventory_impact: String,
    pub waste_reduction: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionInsights {
    pub suggested_promotion: Option<SuggestedPromotion>,
    pub expected_impact: Option<PromotionImpact>,
    pub reasoning: String,
}

/// Результат AI-аналитики, типизированный по категории запроса
#[derive(Debug, Clone, PartialEq)]
pub enum InsightResult {
    Dashboard(DashboardInsights),
    Forecast(ForecastInsights),
    Customer(CustomerInsights),
    Promotion(PromotionInsights),
    /// Ответ модели, который не удалось привести к ожидаемой форме
    Raw(String),
}

impl InsightResult {
    /// Привести JSON от релея к форме, ожидаемой для категории.
    ///
    /// Объект типизируется частично: чего нет, то пусто. `Raw` получают
    /// `{"raw": "..."}`, не-объекты и поля неверного JSON-типа,
    /// текст при этом не теряется.
    pub fn from_value(category: InsightCategory, value: Value) -> Self {
        if let Some(raw) = raw_text(&value) {
            return InsightResult::Raw(raw);
        }
        if !value.is_object() {
            return InsightResult::Raw(value.to_string());
        }

        let typed = match category {
            InsightCategory::DashboardInsights => {
                serde_json::from_value(value.clone()).map(InsightResult::Dashboard)
            }
            InsightCategory::ForecastAnalysis => {
                serde_json::from_value(value.clone()).map(InsightResult::Forecast)
            }
            InsightCategory::CustomerIntelligence => {
                serde_json::from_value(value.clone()).map(InsightResult::Customer)
            }
            InsightCategory::PromotionSuggestion => {
                serde_json::from_value(value.clone()).map(InsightResult::Promotion)
            }
        };

        typed.unwrap_or_else(|_| InsightResult::Raw(value.to_string()))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, InsightResult::Raw(_))
    }
}

/// Текст из `{"raw": ...}`; объект должен содержать только это поле
fn raw_text(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    match obj.get(RAW_FIELD)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some(String::new()),
        other => Some(other.to_string()),
    }
}
