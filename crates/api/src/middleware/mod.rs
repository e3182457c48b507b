pub mod request_metrics;

pub use request_metrics::{path_label, record_request};
