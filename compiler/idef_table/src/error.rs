//! Permutation and table-build errors.

use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::Span;
use thiserror::Error;

/// Why one overload could not be expanded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermuteError {
    #[error("overload `{overload}` admits no permutations")]
    NoPermutations { overload: String, span: Span },

    #[error("matcher `{matcher}` admits templated type `{ty}`, which cannot be enumerated")]
    DegenerateMatcher {
        overload: String,
        matcher: String,
        ty: String,
        span: Span,
    },

    #[error("return type of `{overload}` is not pinned by its template arguments")]
    UnpinnedReturn { overload: String, span: Span },

    #[error("template parameter `{param}` of `{overload}` cannot be enumerated")]
    Unenumerable {
        overload: String,
        param: String,
        span: Span,
    },

    #[error("a type in `{overload}` has no value for one of its template positions")]
    Unfilled { overload: String, span: Span },
}

impl PermuteError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PermuteError::NoPermutations { .. } => ErrorCode::E3001,
            PermuteError::DegenerateMatcher { .. } => ErrorCode::E3002,
            PermuteError::UnpinnedReturn { .. } => ErrorCode::E3003,
            PermuteError::Unenumerable { .. } => ErrorCode::E3004,
            PermuteError::Unfilled { .. } => ErrorCode::E3005,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            PermuteError::NoPermutations { span, .. }
            | PermuteError::DegenerateMatcher { span, .. }
            | PermuteError::UnpinnedReturn { span, .. }
            | PermuteError::Unenumerable { span, .. }
            | PermuteError::Unfilled { span, .. } => *span,
        }
    }

    pub fn overload(&self) -> &str {
        match self {
            PermuteError::NoPermutations { overload, .. }
            | PermuteError::DegenerateMatcher { overload, .. }
            | PermuteError::UnpinnedReturn { overload, .. }
            | PermuteError::Unenumerable { overload, .. }
            | PermuteError::Unfilled { overload, .. } => overload,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let label = match &self {
            PermuteError::NoPermutations { .. } => "no concrete signature satisfies these constraints",
            PermuteError::DegenerateMatcher { .. } => "matcher used here",
            PermuteError::UnpinnedReturn { .. } => "names a matcher directly",
            PermuteError::Unenumerable { .. } => "needs a constraint",
            PermuteError::Unfilled { .. } => "cannot be instantiated",
        };
        let diagnostic = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), label);
        match &self {
            PermuteError::UnpinnedReturn { .. } => diagnostic
                .with_note("bind the type to a template parameter and use the parameter instead"),
            PermuteError::Unenumerable { .. } => diagnostic
                .with_note("unconstrained type parameters need the default type universe"),
            _ => diagnostic,
        }
    }
}

/// A failure while building the intrinsic table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Overload(#[from] PermuteError),
}

impl BuildError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::Overload(e) => e.code(),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            BuildError::Overload(e) => e.into_diagnostic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_and_messages() {
        let err = PermuteError::DegenerateMatcher {
            overload: "fn f(m)".to_string(),
            matcher: "m".to_string(),
            ty: "vec".to_string(),
            span: Span::DUMMY,
        };
        assert_eq!(err.code(), ErrorCode::E3002);
        assert_eq!(
            err.to_string(),
            "matcher `m` admits templated type `vec`, which cannot be enumerated"
        );
        assert_eq!(err.overload(), "fn f(m)");
        let build = BuildError::from(err.clone());
        assert_eq!(build.code(), ErrorCode::E3002);
        assert_eq!(build.to_string(), err.to_string());
    }

    #[test]
    fn diagnostics_carry_notes_where_useful() {
        let diagnostic = PermuteError::UnpinnedReturn {
            overload: "fn f() -> m".to_string(),
            span: Span::DUMMY,
        }
        .into_diagnostic();
        assert_eq!(diagnostic.code, ErrorCode::E3003);
        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.notes.len(), 1);
    }
}
