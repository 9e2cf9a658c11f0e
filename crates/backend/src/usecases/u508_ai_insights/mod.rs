pub mod prompts;
pub mod service;

pub use service::generate_insights;
