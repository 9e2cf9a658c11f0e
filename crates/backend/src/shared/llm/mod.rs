pub mod gateway_provider;
pub mod json_extract;
pub mod types;

pub use gateway_provider::GatewayProvider;
pub use json_extract::extract_json;
pub use types::*;
