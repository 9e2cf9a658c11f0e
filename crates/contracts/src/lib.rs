//! Общие типы между frontend и backend

pub mod usecases {
    pub mod u508_ai_insights;
}
