use super::view_model::{status_label, AiInsightsVm};
use contracts::usecases::u508_ai_insights::response::{
    AiInsight, ConfidenceLevel, CustomerInsights, DashboardInsights, ForecastInsights,
    InsightKind, PromotionInsights, RiskLevel, TrendDirection,
};
use contracts::usecases::u508_ai_insights::{InsightCategory, InsightResult};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn confidence_badge(level: ConfidenceLevel) -> Option<impl IntoView> {
    let (color, text) = match level {
        ConfidenceLevel::High => (BadgeColor::Success, "high confidence"),
        ConfidenceLevel::Medium => (BadgeColor::Warning, "medium confidence"),
        ConfidenceLevel::Low => (BadgeColor::Subtle, "low confidence"),
        ConfidenceLevel::Unknown => return None,
    };
    Some(view! { <Badge appearance=BadgeAppearance::Tint color=color>{text}</Badge> })
}

fn risk_text(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
        RiskLevel::Unknown => "n/a",
    }
}

fn insight_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Trend => "📈",
        InsightKind::Alert => "⚠",
        InsightKind::Opportunity => "✨",
        InsightKind::Unknown => "💡",
    }
}

fn insight_card(insight: AiInsight) -> impl IntoView {
    view! {
        <div class="ai-insight-card">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <strong>{insight_icon(insight.kind)} " " {insight.title}</strong>
                {confidence_badge(insight.confidence)}
            </div>
            <p>{insight.description}</p>
            {(!insight.action.is_empty())
                .then(|| view! { <p class="ai-insight-card__action">"→ " {insight.action}</p> })}
        </div>
    }
}

fn esg_note(text: String) -> Option<impl IntoView> {
    (!text.is_empty()).then(|| view! { <p class="ai-insight-esg">"🌱 " {text}</p> })
}

fn dashboard_view(d: DashboardInsights) -> AnyView {
    view! {
        <div>
            <p class="ai-insight-summary">{d.summary}</p>
            {d.insights.into_iter().map(insight_card).collect_view()}
            {esg_note(d.sustainability_note)}
        </div>
    }
    .into_any()
}

fn forecast_view(f: ForecastInsights) -> AnyView {
    let direction = match f.trend_direction {
        TrendDirection::Rising => "rising",
        TrendDirection::Stable => "stable",
        TrendDirection::Declining => "declining",
        TrendDirection::Unknown => "n/a",
    };
    let confidence = f
        .confidence_score
        .map(|score| format!(" · confidence {:.0}%", score * 100.0));
    view! {
        <div>
            <p class="ai-insight-summary">{f.forecast_summary}</p>
            <p>"Trend: " {direction} {confidence}</p>
            <ul>{f.key_factors.into_iter().map(|k| view! { <li>{k}</li> }).collect_view()}</ul>
            <p>{f.recommendation}</p>
            <p>"Overstock risk: " {risk_text(f.overstock_risk)}</p>
            {esg_note(f.sustainability_impact)}
        </div>
    }
    .into_any()
}

fn customer_view(c: CustomerInsights) -> AnyView {
    view! {
        <div>
            <p class="ai-insight-summary">{c.segment_summary}</p>
            <p>
                {c.momentum_score.map(|score| format!("Momentum: {:.0} · ", score))}
                "Churn risk: " {risk_text(c.churn_risk_level)}
            </p>
            {c.top_opportunity.map(|top| view! {
                <div class="ai-insight-card">
                    <strong>{top.segment}</strong>
                    <p>{top.action}</p>
                    <p>{top.expected_impact}</p>
                </div>
            })}
            <ul>
                {c.engagement_suggestions
                    .into_iter()
                    .map(|s| view! { <li><strong>{s.segment}</strong> ": " {s.message}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}

fn promotion_view(p: PromotionInsights) -> AnyView {
    view! {
        <div>
            {p.suggested_promotion.map(|promo| view! {
                <div class="ai-insight-card">
                    <div style="display: flex; justify-content: space-between; align-items: center;">
                        <strong>{promo.kind} " → " {promo.target_segment}</strong>
                        {confidence_badge(promo.confidence)}
                    </div>
                    <p>{promo.discount_range} " · " {promo.optimal_timing}</p>
                </div>
            })}
            {p.expected_impact.map(|impact| view! {
                <p>"Conversion uplift: " {impact.conversion_uplift}</p>
                <p>"Inventory: " {impact.inventory_impact}</p>
                {esg_note(impact.waste_reduction)}
            })}
            <p>{p.reasoning}</p>
        </div>
    }
    .into_any()
}

fn result_view(result: InsightResult) -> AnyView {
    match result {
        InsightResult::Dashboard(d) => dashboard_view(d),
        InsightResult::Forecast(f) => forecast_view(f),
        InsightResult::Customer(c) => customer_view(c),
        InsightResult::Promotion(p) => promotion_view(p),
        InsightResult::Raw(text) => view! { <pre class="ai-insight-raw">{text}</pre> }.into_any(),
    }
}

/// Панель AI-аналитики: запрос при монтировании, кнопка обновления,
/// уведомления о занятости и кредитах
#[component]
#[allow(non_snake_case)]
pub fn AiInsightPanel(category: InsightCategory, context: Value) -> impl IntoView {
    let vm = AiInsightsVm::new();

    let initial_context = context.clone();
    Effect::new(move |_| {
        vm.request_insights(category, initial_context.clone());
    });

    let on_refresh = move |_| vm.request_insights(category, context.clone());
    let on_clear = move |_| vm.reset();
    let pending = Signal::derive(move || vm.is_pending());
    let status_text = move || status_label(vm.is_pending());

    view! {
        <div class="ai-insight-panel">
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <div>
                    <h3>{category.display_name()}</h3>
                    <span class="ai-insight-status">{status_text}</span>
                </div>
                <div style="display: flex; gap: 8px;">
                    <Button appearance=ButtonAppearance::Subtle on_click=on_clear>
                        "Clear"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_refresh disabled=pending>
                        "↻ Refresh"
                    </Button>
                </div>
            </div>

            {move || vm.notice.get().map(|notice| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <div>
                        <strong>{notice.title()}</strong>
                        " "
                        <span>{notice.description()}</span>
                    </div>
                </MessageBar>
            })}

            {move || {
                if vm.is_pending() {
                    view! { <Spinner /> }.into_any()
                } else if let Some(error) = vm.error() {
                    view! { <div class="ai-insight-error">{error}</div> }.into_any()
                } else if let Some(result) = vm.result() {
                    result_view(result)
                } else {
                    view! { <span>"No insights yet"</span> }.into_any()
                }
            }}

            {move || vm.last_updated.get().map(|time| view! {
                <div class="ai-insight-updated">"Last updated: " {time}</div>
            })}
        </div>
    }
}
