//! Build reporter adapters.

mod null;
mod tracing_reporter;

pub use null::NullReporter;
pub use tracing_reporter::TracingReporter;
