//! Error reporting shared by every stage of the definition compiler.
//!
//! A stage that fails hands back [`Diagnostic`]s rather than strings. Each
//! one carries an [`ErrorCode`] whose leading digit names the stage (`E0`
//! lexer, `E1` parser, `E2` resolver, `E3` table builder, `E9` driver).
//! [`DiagnosticQueue`] collects them in source order, and the
//! [`emitter`] module turns them into text.
//!
//! [`ErrorGuaranteed`] can only be obtained by recording an error, so a
//! function returning it has provably reported something.

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{unresolved_name, Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
