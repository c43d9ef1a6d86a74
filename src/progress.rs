/// Side channel for batch progress and per-document warnings. Calls are
/// fire-and-forget; implementations must not influence processing.
pub trait Reporter {
    fn progress(&mut self, done: usize, total: usize, label: &str);

    fn warn(&mut self, message: &str);
}

/// Routes progress and warnings to the tracing subscriber.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn progress(&mut self, done: usize, total: usize, label: &str) {
        tracing::info!("processing {done}/{total}: {label}");
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Discards everything. For callers that only want the returned dataset.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn progress(&mut self, _done: usize, _total: usize, _label: &str) {}

    fn warn(&mut self, _message: &str) {}
}
