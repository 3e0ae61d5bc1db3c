//! Name resolution: AST to [`Sem`].
//!
//! Resolution runs as a fixed sequence of passes over the whole file.
//! Errors never stop a pass; they are queued and reported together once
//! every declaration has been visited.
//!
//! # Pass Order
//!
//! - **Pass 1**: Enums and their entries
//! - **Pass 2**: Global names (enums, types), then matcher classification
//! - **Pass 3**: Type template parameters and type attributes
//! - **Pass 4**: Intrinsics and their overloads

mod attrs;
mod decls;
mod intrinsics;
mod names;

use idef_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use idef_ir::{ast, FileId, Span};
use rustc_hash::FxHashMap;

use crate::{EnumEntryId, EnumId, EnumMatcherId, Sem, TypeId, TypeMatcherId};

/// Resolve a parsed (and import-merged) file.
///
/// Returns every diagnostic found when any reference fails to resolve;
/// a partial model is never returned.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(declarations = file.declaration_count())
)]
pub fn resolve(file: &ast::File) -> Result<Sem, Vec<Diagnostic>> {
    let mut resolver = Resolver::new();
    resolver.declare_enums(&file.enums);
    resolver.declare_types(&file.types);
    resolver.declare_matchers(&file.matchers);
    resolver.resolve_types(&file.types);
    resolver.resolve_intrinsics(&file.intrinsics);
    resolver.finish()
}

/// Lex, parse and resolve a single self-contained file.
///
/// Imports are reported as errors here: following them needs a loader,
/// which the driver supplies.
#[tracing::instrument(level = "debug", skip_all, fields(file = file.raw()))]
pub fn parse_and_resolve(text: &str, file: FileId) -> Result<Sem, Vec<Diagnostic>> {
    let tokens = idef_lexer::lex(text, file).map_err(|e| vec![e.into_diagnostic()])?;
    let ast = idef_parse::parse(&tokens, file).map_err(|e| vec![e.into_diagnostic()])?;
    if !ast.imports.is_empty() {
        return Err(ast
            .imports
            .iter()
            .map(|import| {
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("cannot follow import of `{}`", import.path))
                    .with_label(import.span, "imports need a source loader")
            })
            .collect());
    }
    resolve(&ast)
}

/// A name in the global namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Global {
    Enum(EnumId),
    Type(TypeId),
    TypeMatcher(TypeMatcherId),
    EnumMatcher(EnumMatcherId),
}

impl Global {
    fn describe(self) -> &'static str {
        match self {
            Global::Enum(_) => "enum",
            Global::Type(_) => "type",
            Global::TypeMatcher(_) => "type matcher",
            Global::EnumMatcher(_) => "enum matcher",
        }
    }
}

struct Resolver {
    sem: Sem,
    /// Enums, types and matchers share one namespace.
    globals: FxHashMap<String, (Global, Span)>,
    /// Enum entries by bare name, across all enums.
    entries: FxHashMap<String, Vec<EnumEntryId>>,
    diagnostics: DiagnosticQueue,
}

impl Resolver {
    fn new() -> Self {
        Resolver {
            sem: Sem::default(),
            globals: FxHashMap::default(),
            entries: FxHashMap::default(),
            diagnostics: DiagnosticQueue::new(),
        }
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.emit_error(diagnostic);
    }

    /// Register a global, reporting a clash with an earlier declaration.
    ///
    /// Returns `false` (and keeps the earlier binding) on a clash.
    fn declare_global(&mut self, name: &str, span: Span, global: Global) -> bool {
        if let Some(&(previous, previous_span)) = self.globals.get(name) {
            self.error(
                Diagnostic::error(ErrorCode::E2002)
                    .with_message(format!("`{name}` is declared more than once"))
                    .with_label(span, format!("redeclared here as {}", global.describe()))
                    .with_secondary_label(
                        previous_span,
                        format!("first declared here as {}", previous.describe()),
                    ),
            );
            return false;
        }
        self.globals.insert(name.to_string(), (global, span));
        true
    }

    fn finish(mut self) -> Result<Sem, Vec<Diagnostic>> {
        if self.diagnostics.has_errors().is_some() {
            let diagnostics = self.diagnostics.flush();
            tracing::debug!(errors = diagnostics.len(), "resolution failed");
            return Err(diagnostics);
        }
        tracing::debug!(
            enums = self.sem.enums.len(),
            types = self.sem.types.len(),
            intrinsics = self.sem.intrinsics.len(),
            overloads = self.sem.overloads.len(),
            "resolved"
        );
        Ok(self.sem)
    }
}
