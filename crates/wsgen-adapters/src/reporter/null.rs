use wsgen_core::application::ports::{BuildEvent, BuildReporter};

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl BuildReporter for NullReporter {
    fn report(&self, _event: &BuildEvent) {}
}
