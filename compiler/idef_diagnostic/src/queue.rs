//! Accumulates diagnostics until a stage finishes.
//!
//! The resolver does not stop at the first bad declaration. It pushes every
//! error here and, when its passes are done, drains the queue in source
//! order so one run shows all problems in a definition file.

use crate::{Diagnostic, ErrorGuaranteed};

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    pending: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `diag` unless an equal diagnostic is already queued.
    /// Returns whether it was kept.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.pending.contains(&diag) {
            return false;
        }
        self.pending.push(diag);
        true
    }

    /// Queue an error. A duplicate still yields the guarantee, since an
    /// equal error is already queued.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.push(diag);
        ErrorGuaranteed::new()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.pending.len())
    }

    /// Drain the queue ordered by (file, line, column) of the primary span.
    ///
    /// Ties keep push order. Diagnostics without a primary span sort last.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut drained = std::mem::take(&mut self.pending);
        drained.sort_by_key(|diag| match diag.primary_span() {
            Some(span) => (0, span.file.raw(), span.begin.line, span.begin.column),
            None => (1, 0, 0, 0),
        });
        drained
    }
}

#[cfg(test)]
mod tests;
