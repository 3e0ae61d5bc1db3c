//! Parse error types.
//!
//! The parser does not recover: the first error ends the parse of a file.
//! Errors carry an [`ErrorContext`] describing the declaration being parsed
//! so the message can say "while parsing an enum declaration".

use std::fmt;

use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::Span;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Import,
    EnumDecl,
    TypeDecl,
    MatcherDecl,
    IntrinsicDecl,
    TemplateParams,
    Parameters,
    TemplatedName,
    Attribute,
}

impl ErrorContext {
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Import => "an import",
            Self::EnumDecl => "an enum declaration",
            Self::TypeDecl => "a type declaration",
            Self::MatcherDecl => "a matcher declaration",
            Self::IntrinsicDecl => "an intrinsic declaration",
            Self::TemplateParams => "template parameters",
            Self::Parameters => "intrinsic parameters",
            Self::TemplatedName => "a type name",
            Self::Attribute => "an attribute",
        }
    }
}

/// The first syntax error in a file.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Innermost declaration or clause being parsed.
    pub context: Option<ErrorContext>,
    /// Rendered as notes.
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            help: Vec::new(),
        }
    }

    /// Record the construct being parsed. The innermost context wins.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let label = match self.context {
            Some(context) => format!("while parsing {}", context.description()),
            None => "here".to_string(),
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message)
            .with_label(self.span, label);
        for help in self.help {
            diag = diag.with_note(help);
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message)?;
        if let Some(context) = self.context {
            write!(f, " (while parsing {})", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests;
