//! Output sinks for diagnostics.
//!
//! The driver writes through [`DiagnosticEmitter`] so it never depends on a
//! concrete format. [`TerminalEmitter`] is the one shipped sink; tests point
//! it at a `Vec<u8>` and compare the text.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit in slice order. Callers sort first (see `DiagnosticQueue`).
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|d| self.emit(d));
    }

    fn flush(&mut self);

    /// The closing "aborting due to ..." line. Writes nothing for zero.
    fn emit_summary(&mut self, error_count: usize);
}
