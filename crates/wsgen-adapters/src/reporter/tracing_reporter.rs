//! Reporter that forwards build events to `tracing`.

use tracing::info;
use wsgen_core::application::ports::{BuildEvent, BuildReporter};

/// Emits each event as an INFO record, so `-v` (or `RUST_LOG=info`) shows
/// the same "Creating directory ..." trail as a verbose run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl BuildReporter for TracingReporter {
    fn report(&self, event: &BuildEvent) {
        info!(path = %event.path().display(), "{event}");
    }
}
