//! AI Insights - View Model

use super::api;
use contracts::usecases::u508_ai_insights::{
    FailureNotice, InsightCategory, InsightRequestState, InsightResult,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

/// Состояние запроса AI-аналитики одного компонента
#[derive(Clone, Copy)]
pub struct AiInsightsVm {
    pub state: RwSignal<InsightRequestState>,
    /// Уведомление об ошибке (занят / нет кредитов)
    pub notice: RwSignal<Option<FailureNotice>>,
    /// Время последнего успешного ответа, локальное
    pub last_updated: RwSignal<Option<String>>,
}

impl AiInsightsVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(InsightRequestState::new()),
            notice: RwSignal::new(None),
            last_updated: RwSignal::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|s| s.is_pending())
    }

    pub fn result(&self) -> Option<InsightResult> {
        self.state.with(|s| s.result().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(|e| e.to_string()))
    }

    /// Отправить запрос. Более ранний незавершённый запрос не отменяется,
    /// но его ответ будет проигнорирован.
    pub fn request_insights(&self, category: InsightCategory, context: Value) {
        let mut ticket = None;
        self.state.update(|s| ticket = Some(s.begin()));
        let Some(ticket) = ticket else {
            return;
        };
        self.notice.set(None);

        let vm = *self;
        spawn_local(async move {
            let outcome = api::fetch_insights(category, context)
                .await
                .map(|value| InsightResult::from_value(category, value));
            let failure = outcome.as_ref().err().cloned();

            let mut applied = false;
            vm.state.update(|s| applied = s.resolve(ticket, outcome));

            if !applied {
                log::debug!("Dropped stale {} response", category);
                return;
            }
            match failure {
                Some(message) => {
                    log::warn!("AI insights failed: {}", message);
                    vm.notice.set(FailureNotice::classify(&message));
                }
                None => vm.last_updated.set(Some(local_time_now())),
            }
        });
    }

    /// Сбросить панель в исходное состояние; ответы на уже отправленные
    /// запросы будут проигнорированы
    pub fn reset(&self) {
        self.state.update(|s| s.reset());
        self.notice.set(None);
        self.last_updated.set(None);
    }
}

/// Подпись состояния панели
pub fn status_label(pending: bool) -> &'static str {
    if pending {
        "AI is analyzing…"
    } else {
        "monitoring"
    }
}

fn local_time_now() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .into()
}

impl Default for AiInsightsVm {
    fn default() -> Self {
        Self::new()
    }
}
