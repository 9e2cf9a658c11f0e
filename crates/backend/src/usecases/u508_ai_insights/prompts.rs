use contracts::usecases::u508_ai_insights::InsightCategory;
use serde_json::Value;

/// Пара промптов для одного запроса к модели
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

const DASHBOARD_SYSTEM: &str = r#"You are an AI business analyst for a Vietnamese SME e-commerce analytics platform. Generate concise, actionable insights based on the business data provided.

Your responses should be:
- Written in clear, simple business language
- Focused on actionable recommendations
- Confident but not alarmist
- ESG and sustainability aware

Always structure your response as valid JSON with this exact format:
{
  "summary": "One sentence summary of the current state",
  "insights": [
    {"type": "trend", "title": "Short title", "description": "2-3 sentence insight", "confidence": "high|medium|low", "action": "Specific action to take"},
    {"type": "alert", "title": "Short title", "description": "2-3 sentence insight", "confidence": "high|medium|low", "action": "Specific action to take"},
    {"type": "opportunity", "title": "Short title", "description": "2-3 sentence insight", "confidence": "high|medium|low", "action": "Specific action to take"}
  ],
  "sustainability_note": "Brief ESG-related observation"
}"#;

const FORECAST_SYSTEM: &str = r#"You are an AI demand forecasting specialist. Analyze sales patterns and provide forecast insights.

Respond with valid JSON:
{
  "forecast_summary": "Brief forecast summary",
  "confidence_score": 0.0-1.0,
  "trend_direction": "rising|stable|declining",
  "key_factors": ["factor1", "factor2"],
  "recommendation": "What to do based on this forecast",
  "overstock_risk": "low|medium|high",
  "sustainability_impact": "Brief ESG note"
}"#;

const CUSTOMER_SYSTEM: &str = r#"You are an AI customer behavior analyst. Provide insights on customer segments and behavior patterns.

Respond with valid JSON:
{
  "segment_summary": "Overall customer health summary",
  "momentum_score": 0-100,
  "churn_risk_level": "low|medium|high",
  "top_opportunity": {"segment": "name", "action": "recommended action", "expected_impact": "description"},
  "engagement_suggestions": [{"segment": "name", "message": "suggested action"}]
}"#;

const PROMOTION_SYSTEM: &str = r#"You are an AI promotion strategist for SME e-commerce. Suggest optimal promotion strategies.

Respond with valid JSON:
{
  "suggested_promotion": {
    "type": "voucher|flash_sale|loyalty_reward",
    "target_segment": "segment name",
    "discount_range": "X-Y%",
    "optimal_timing": "when to run",
    "confidence": "high|medium|low"
  },
  "expected_impact": {
    "conversion_uplift": "X%",
    "inventory_impact": "description",
    "waste_reduction": "description"
  },
  "reasoning": "Why this promotion makes sense"
}"#;

const GENERIC_SYSTEM: &str = "You are a helpful AI assistant for SME business analytics.";
const GENERIC_USER: &str = "Provide general business advice.";

/// Системная инструкция категории
pub fn system_prompt(category: InsightCategory) -> &'static str {
    match category {
        InsightCategory::DashboardInsights => DASHBOARD_SYSTEM,
        InsightCategory::ForecastAnalysis => FORECAST_SYSTEM,
        InsightCategory::CustomerIntelligence => CUSTOMER_SYSTEM,
        InsightCategory::PromotionSuggestion => PROMOTION_SYSTEM,
    }
}

/// Префикс пользовательской инструкции, за ним идёт контекст в JSON
fn user_prefix(category: InsightCategory) -> &'static str {
    match category {
        InsightCategory::DashboardInsights => "Analyze this business data and provide insights: ",
        InsightCategory::ForecastAnalysis => "Analyze this forecast data: ",
        InsightCategory::CustomerIntelligence => "Analyze this customer data: ",
        InsightCategory::PromotionSuggestion => "Suggest promotions based on: ",
    }
}

/// Собрать промпты для запроса.
///
/// Для неизвестной категории используется общий промпт, а пользовательской
/// инструкцией служит `context.message`, если это строка.
pub fn build_prompts(category: Option<InsightCategory>, context: &Value) -> PromptPair {
    match category {
        Some(category) => PromptPair {
            system: system_prompt(category).to_string(),
            user: format!("{}{}", user_prefix(category), context),
        },
        None => PromptPair {
            system: GENERIC_SYSTEM.to_string(),
            user: context
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_USER)
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_context() -> Value {
        json!({
            "totalRevenue": 117400000,
            "weeklyChange": 12.5,
            "topSellingDay": "Saturday",
            "segments": ["loyal", "at_risk"]
        })
    }

    #[test]
    fn test_user_prompt_embeds_context() {
        let context = sample_context();
        let serialized = serde_json::to_string(&context).unwrap();

        for category in InsightCategory::all() {
            let prompts = build_prompts(Some(category), &context);
            assert!(
                prompts.user.contains(&serialized),
                "{} prompt lacks context: {}",
                category,
                prompts.user
            );
            assert_eq!(prompts.system, system_prompt(category));
        }
    }

    #[test]
    fn test_system_prompts_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for category in InsightCategory::all() {
            assert!(seen.insert(system_prompt(category)));
            assert!(system_prompt(category).contains("JSON"));
        }
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let prompts = build_prompts(None, &sample_context());
        assert_eq!(prompts.system, GENERIC_SYSTEM);
        assert_eq!(prompts.user, GENERIC_USER);
    }

    #[test]
    fn test_unknown_category_uses_message() {
        let prompts = build_prompts(None, &json!({"message": "How do I price bundles?"}));
        assert_eq!(prompts.system, GENERIC_SYSTEM);
        assert_eq!(prompts.user, "How do I price bundles?");
    }

    #[test]
    fn test_null_context() {
        let prompts = build_prompts(Some(InsightCategory::ForecastAnalysis), &Value::Null);
        assert_eq!(prompts.user, "Analyze this forecast data: null");
    }
}
