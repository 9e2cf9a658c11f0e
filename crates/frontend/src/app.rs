use crate::usecases::u508_ai_insights::AiInsightPanel;
use contracts::usecases::u508_ai_insights::InsightCategory;
use leptos::prelude::*;
use serde_json::{json, Value};

/// Демонстрационные метрики магазина, которые уходят в промпт
fn sample_business_data() -> Value {
    json!({
        "totalRevenue": 117400000,
        "weeklyChange": 12.5,
        "totalOrders": 1284,
        "activeCustomers": 892,
        "atRiskCustomers": 178,
        "topSellingDay": "Saturday",
        "demandTrend": "rising",
        "inventoryHealth": "good"
    })
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="max-width: 480px; margin: 24px auto;">
            <AiInsightPanel
                category=InsightCategory::DashboardInsights
                context=sample_business_data()
            />
        </main>
    }
}
