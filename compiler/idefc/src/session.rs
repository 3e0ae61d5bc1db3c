//! One compilation session: the files it has read and the ids they got.
//!
//! Loading follows `import` directives depth-first. An imported file's
//! declarations are merged ahead of the importing file's, so a file may
//! rely on everything it imports. Each path is read and parsed at most
//! once per load; an import of a file already on the way in is ignored,
//! which also breaks cycles.

use std::io::Write;
use std::path::{Path, PathBuf};

use idef_diagnostic::emitter::{ColorMode, TerminalEmitter};
use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::{ast, FileId, Span};
use idef_sem::Sem;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::SourceLoader;

/// A file read during the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub id: FileId,
    pub path: PathBuf,
    pub text: String,
}

pub struct Session<L> {
    loader: L,
    files: Vec<SourceFile>,
    by_path: FxHashMap<PathBuf, FileId>,
}

impl<L: SourceLoader> Session<L> {
    pub fn new(loader: L) -> Self {
        Session {
            loader,
            files: Vec::new(),
            by_path: FxHashMap::default(),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index().checked_sub(1)?)
    }

    /// Read a file, reusing the text if this session already has it.
    ///
    /// File ids start at 1; [`FileId::DUMMY`] is never handed out.
    pub fn read(&mut self, path: &Path) -> std::io::Result<&SourceFile> {
        let key = self.loader.canonical(path);
        let id = match self.by_path.get(&key) {
            Some(&id) => id,
            None => {
                let text = self.loader.load(path)?;
                let id = FileId::new(u32::try_from(self.files.len() + 1).unwrap_or(u32::MAX));
                tracing::debug!(file = %id, path = %path.display(), "read");
                self.files.push(SourceFile {
                    id,
                    path: path.to_path_buf(),
                    text,
                });
                self.by_path.insert(key, id);
                id
            }
        };
        Ok(&self.files[id.index() - 1])
    }

    /// Load `root` and everything it imports into one merged file.
    #[tracing::instrument(level = "debug", skip_all, fields(root = %root.display()))]
    pub fn load(&mut self, root: &Path) -> Result<ast::File, Vec<Diagnostic>> {
        let mut merged = ast::File::new();
        let mut seen = FxHashSet::default();
        let mut diagnostics = Vec::new();
        self.load_into(root, None, &mut seen, &mut merged, &mut diagnostics);
        if diagnostics.is_empty() {
            tracing::debug!(declarations = merged.declaration_count(), "loaded");
            Ok(merged)
        } else {
            Err(diagnostics)
        }
    }

    fn load_into(
        &mut self,
        path: &Path,
        imported_at: Option<Span>,
        seen: &mut FxHashSet<PathBuf>,
        merged: &mut ast::File,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if !seen.insert(self.loader.canonical(path)) {
            tracing::trace!(path = %path.display(), "already loaded");
            return;
        }
        let file = match self.read(path) {
            Ok(file) => file,
            Err(err) => {
                let diagnostic = Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("cannot read `{}`: {err}", path.display()));
                diagnostics.push(match imported_at {
                    Some(span) => diagnostic.with_label(span, "imported here"),
                    None => diagnostic,
                });
                return;
            }
        };
        let id = file.id;
        let parsed = idef_lexer::lex(&file.text, id)
            .map_err(idef_lexer::LexError::into_diagnostic)
            .and_then(|tokens| {
                idef_parse::parse(&tokens, id).map_err(idef_parse::ParseError::into_diagnostic)
            });
        let file = match parsed {
            Ok(file) => file,
            Err(diagnostic) => {
                diagnostics.push(diagnostic);
                return;
            }
        };
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        for import in &file.imports {
            let target = base.join(&import.path);
            self.load_into(&target, Some(import.span), seen, merged, diagnostics);
        }
        merged.merge(file);
    }

    /// Load and resolve `root`.
    pub fn resolve(&mut self, root: &Path) -> Result<Sem, Vec<Diagnostic>> {
        let file = self.load(root)?;
        idef_sem::resolve(&file)
    }

    /// A terminal emitter that knows every file of this session.
    pub fn emitter<W: Write>(&self, writer: W, mode: ColorMode, is_tty: bool) -> TerminalEmitter<W> {
        let mut emitter = TerminalEmitter::with_color_mode(writer, mode, is_tty);
        for file in &self.files {
            emitter.add_file(file.id, file.path.display().to_string(), Some(file.text.clone()));
        }
        emitter
    }
}

#[cfg(test)]
mod tests;
