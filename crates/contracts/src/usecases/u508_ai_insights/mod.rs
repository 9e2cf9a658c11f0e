pub mod category;
pub mod notice;
pub mod request;
pub mod response;
pub mod state;

pub use category::InsightCategory;
pub use notice::FailureNotice;
pub use request::InsightRequest;
pub use response::{InsightResult, RelayErrorBody, RAW_FIELD};
pub use state::{InsightRequestState, RequestPhase, RequestTicket};
