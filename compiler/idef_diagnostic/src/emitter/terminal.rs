//! Human-readable rendering for a terminal or a byte buffer.
//!
//! Spans only carry a [`FileId`]. Register each file with
//! [`TerminalEmitter::add_file`] to get `path:line:col` locations and a
//! source snippet under the primary label.

use std::io::Write;

use idef_ir::{FileId, Span};

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

mod ansi {
    pub const RED: &str = "\x1b[1;31m";
    pub const BLUE: &str = "\x1b[1;34m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

struct FileEntry {
    path: String,
    source: Option<String>,
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// Indexed by `FileId::index()`.
    files: Vec<Option<FileEntry>>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            files: Vec::new(),
        }
    }

    /// Register the display path (and optionally the text) of a file.
    pub fn add_file(&mut self, file: FileId, path: impl Into<String>, source: Option<String>) {
        let index = file.index();
        if self.files.len() <= index {
            self.files.resize_with(index + 1, || None);
        }
        self.files[index] = Some(FileEntry {
            path: path.into(),
            source,
        });
    }

    fn file(&self, file: FileId) -> Option<&FileEntry> {
        self.files.get(file.index()).and_then(Option::as_ref)
    }

    fn location(&self, span: Span) -> String {
        match self.file(span.file) {
            Some(entry) => format!("{}:{}", entry.path, span.begin),
            None => format!("{}:{}", span.file, span.begin),
        }
    }

    /// The full source line a span begins on, if the file text is known.
    fn source_line(&self, span: Span) -> Option<&str> {
        let source = self.file(span.file)?.source.as_deref()?;
        let index = usize::try_from(span.begin.line).ok()?.checked_sub(1)?;
        source.lines().nth(index)
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", ansi::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", ansi::RED);
        self.write_colored(&format!("[{}]", diagnostic.code.as_str()), ansi::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let location = self.location(label.span);
        let _ = write!(self.writer, "  {marker} {location}: ");
        let color = if label.is_primary { ansi::RED } else { ansi::BLUE };
        self.write_colored(&label.message, color);
        let _ = writeln!(self.writer);

        if !label.is_primary {
            return;
        }
        if let Some(line) = self.source_line(label.span).map(str::to_owned) {
            let pad = label.span.begin.column.saturating_sub(1) as usize;
            let width = if label.span.begin.line == label.span.end.line {
                (label.span.end.column.saturating_sub(label.span.begin.column) as usize).max(1)
            } else {
                line.len().saturating_sub(pad).max(1)
            };
            let _ = writeln!(self.writer, "   |");
            let _ = writeln!(self.writer, "   | {line}");
            let _ = write!(self.writer, "   | {}", " ".repeat(pad));
            self.write_colored(&"^".repeat(width), color);
            let _ = writeln!(self.writer);
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);
        for label in &diagnostic.labels {
            self.write_label(label);
        }
        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", ansi::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        let cause = match error_count {
            0 => return,
            1 => "previous error".to_owned(),
            n => format!("{n} previous errors"),
        };
        self.write_colored("error", ansi::RED);
        let _ = writeln!(self.writer, ": aborting due to {cause}");
    }
}
