/// A destination for diagnostic messages emitted while triangulating.
///
/// The solver never writes to a global logger directly, so callers decide where messages go.
pub trait DiagnosticSink {
    /// Report an informational message, e.g. a received request or a computed result.
    fn info(&self, msg: &str);

    /// Report an error, e.g. an input with no geometric solution.
    fn error(&self, msg: &str);
}

/// Forwards diagnostics to the [`log`] facade under the `sightline` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, msg: &str) {
        log::info!(target: "sightline", "{msg}");
    }

    fn error(&self, msg: &str) {
        log::error!(target: "sightline", "{msg}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _msg: &str) {}

    fn error(&self, _msg: &str) {}
}
