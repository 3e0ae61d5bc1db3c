//! The [`Diagnostic`] value and its parts.
//!
//! Lexer, parser, resolver and table builder all report through the same
//! shape: a code, a one-line message, spans pointing into definition files,
//! and free-form notes. Every diagnostic is an error; there are no warnings.

use std::fmt;

use idef_ir::Span;

use crate::ErrorCode;

/// A span in a definition file plus the text shown next to it.
///
/// The primary label marks the offending declaration or token. Secondary
/// labels point at related places, such as an earlier declaration of the
/// same name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    fn at(span: Span, message: impl Into<String>, is_primary: bool) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary,
        }
    }

    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::at(span, message, true)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::at(span, message, false)
    }
}

/// One reported problem.
///
/// Built with the `with_*` methods:
///
/// ```ignore
/// Diagnostic::error(ErrorCode::E2002)
///     .with_message("`f32` is declared twice")
///     .with_label(second, "redeclared here")
///     .with_secondary_label(first, "first declared here");
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic that is never reported is lost"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// In insertion order; the renderer shows them top to bottom.
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labelled(Label::primary(span, message))
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labelled(Label::secondary(span, message))
    }

    fn labelled(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label. Used to order diagnostics by position.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find_map(|label| label.is_primary.then_some(label.span))
    }
}

/// Plain one-diagnostic rendering without source snippets.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.span, label.message)?;
        }
        self.notes
            .iter()
            .try_for_each(|note| write!(f, "\n  = note: {note}"))
    }
}

/// E2001: `name` does not resolve to any `what` in scope.
pub fn unresolved_name(span: Span, what: &str, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("cannot resolve {what} `{name}`"))
        .with_label(span, "not found in this scope")
}
