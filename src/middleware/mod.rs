pub mod metrics;
pub mod request_id;

pub use metrics::track_requests;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
