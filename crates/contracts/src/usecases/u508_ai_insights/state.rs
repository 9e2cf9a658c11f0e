use super::response::InsightResult;

/// Фаза запроса: Idle -> Pending -> {Succeeded, Failed}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Квиток запроса. Разрешить состояние может только последний выданный квиток
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Состояние запроса AI-аналитики, которым владеет вызывающий компонент.
///
/// Каждый `begin` выдаёт новый квиток и делает все предыдущие устаревшими:
/// ответ на устаревший запрос отбрасывается, последний запрос всегда побеждает
/// независимо от порядка прихода ответов.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsightRequestState {
    pending: bool,
    result: Option<InsightResult>,
    error: Option<String>,
    generation: u64,
}

impl InsightRequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RequestPhase {
        if self.pending {
            RequestPhase::Pending
        } else if self.error.is_some() {
            RequestPhase::Failed
        } else if self.result.is_some() {
            RequestPhase::Succeeded
        } else {
            RequestPhase::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Последний полученный результат (остаётся видимым, пока идёт новый запрос)
    pub fn result(&self) -> Option<&InsightResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Начать новый запрос
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.pending = true;
        self.error = None;
        RequestTicket(self.generation)
    }

    /// Записать итог запроса. Возвращает `false`, если квиток устарел
    /// и итог был отброшен.
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<InsightResult, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.pending = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Сбросить в Idle; незавершённые запросы становятся устаревшими
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = false;
        self.result = None;
        self.error = None;
    }
}
