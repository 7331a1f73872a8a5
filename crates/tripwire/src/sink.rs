use parking_lot::Mutex;
use std::fmt;

pub(crate) const TRACING_TARGET: &str = "tripwire::warning";

/// Destination of warning lines.
///
/// Any `Fn(&str) + Send + Sync` closure is a sink.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, line: &str) {
        self(line);
    }
}

/// Forwards each line to `tracing` at `WARN` level under [`TracingSink::TARGET`].
///
/// Nothing is printed unless a subscriber is installed, e.g. by
/// `tripwire_logger::Logger`, which also keeps this target enabled when the
/// global level is stricter than `WARN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Target of every event; `tripwire_logger::GUARD_TARGET` must match it.
    pub const TARGET: &'static str = TRACING_TARGET;
}

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::warn!(target: TRACING_TARGET, "{line}");
    }
}

/// Keeps every line in memory.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

impl fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSink").field("lines", &self.len()).finish()
    }
}
