use serde::{Deserialize, Serialize};

/// Категория AI-аналитики: определяет шаблон промпта и форму ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    DashboardInsights,
    ForecastAnalysis,
    CustomerIntelligence,
    PromotionSuggestion,
}

impl InsightCategory {
    /// Тег категории, как он передаётся по сети
    pub fn tag(&self) -> &'static str {
        match self {
            InsightCategory::DashboardInsights => "dashboard_insights",
            InsightCategory::ForecastAnalysis => "forecast_analysis",
            InsightCategory::CustomerIntelligence => "customer_intelligence",
            InsightCategory::PromotionSuggestion => "promotion_suggestion",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            InsightCategory::DashboardInsights => "Dashboard insights",
            InsightCategory::ForecastAnalysis => "Forecast analysis",
            InsightCategory::CustomerIntelligence => "Customer intelligence",
            InsightCategory::PromotionSuggestion => "Promotion suggestion",
        }
    }

    pub fn all() -> Vec<InsightCategory> {
        vec![
            InsightCategory::DashboardInsights,
            InsightCategory::ForecastAnalysis,
            InsightCategory::CustomerIntelligence,
            InsightCategory::PromotionSuggestion,
        ]
    }

    /// Парсинг из тега. Неизвестный тег - `None`, релей тогда берёт общий промпт
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "dashboard_insights" => Some(InsightCategory::DashboardInsights),
            "forecast_analysis" => Some(InsightCategory::ForecastAnalysis),
            "customer_intelligence" => Some(InsightCategory::CustomerIntelligence),
            "promotion_suggestion" => Some(InsightCategory::PromotionSuggestion),
            _ => None,
        }
    }
}

impl std::fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
