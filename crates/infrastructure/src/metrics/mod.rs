mod exposition;
mod registry;

pub use registry::{LookupCounters, ServiceMetrics};
