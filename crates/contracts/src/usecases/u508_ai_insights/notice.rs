/// Уведомление для пользователя по тексту ошибки релея
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureNotice {
    /// Лимит запросов у провайдера
    Busy,
    /// Закончились кредиты
    CreditsNeeded,
}

impl FailureNotice {
    /// Классифицировать сообщение об ошибке.
    ///
    /// `None` - особого уведомления нет, показывается обычная ошибка.
    pub fn classify(message: &str) -> Option<Self> {
        let lower = message.to_lowercase();
        if lower.contains("rate limit") || lower.contains("busy") {
            Some(FailureNotice::Busy)
        } else if lower.contains("credits") {
            Some(FailureNotice::CreditsNeeded)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FailureNotice::Busy => "AI is busy",
            FailureNotice::CreditsNeeded => "AI credits needed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FailureNotice::Busy => {
                "The system is processing other requests. Please try again shortly."
            }
            FailureNotice::CreditsNeeded => "Please add credits to continue using AI features.",
        }
    }
}
