//! Diagnostic line sinks.
//!
//! The engine reports cost warnings as single lines of plain text. Where those
//! lines end up (a log, a test buffer, nowhere) is the sink's business.

/// Receives one diagnostic line per event.
pub trait DiagnosticsSink {
    fn emit(&mut self, line: &str);
}

/// Forwards lines to `tracing` at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn emit(&mut self, line: &str) {
        tracing::warn!(target: "wordplay::diagnostics", "{line}");
    }
}

/// Drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&mut self, _line: &str) {}
}

impl DiagnosticsSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}
