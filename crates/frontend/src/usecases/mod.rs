pub mod u508_ai_insights;
