use super::*;
use crate::ErrorCode;
use idef_ir::{FileId, Location, Span};
use pretty_assertions::assert_eq;

fn at(file: u32, line: u32, column: u32) -> Span {
    Span::point(FileId::new(file), Location::new(line, column, 0))
}

fn error(message: &str, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(message)
        .with_label(span, "here")
}

fn messages(diags: &[Diagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn empty_queue_has_no_errors() {
    let queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
    assert!(queue.is_empty());
}

#[test]
fn emit_error_counts_and_guarantees() {
    let mut queue = DiagnosticQueue::new();
    let _guar = queue.emit_error(error("a", at(0, 1, 1)));
    assert_eq!(queue.len(), 1);
    assert!(queue.has_errors().is_some());
}

#[test]
fn flush_sorts_by_file_line_column() {
    let mut queue = DiagnosticQueue::new();
    queue.push(error("c", at(1, 1, 1)));
    queue.push(error("b", at(0, 3, 4)));
    queue.push(error("a", at(0, 3, 2)));
    queue.push(Diagnostic::error(ErrorCode::E9001).with_message("unlocated"));
    let sorted = queue.flush();
    assert_eq!(messages(&sorted), vec!["a", "b", "c", "unlocated"]);
    assert!(queue.is_empty());
    assert!(queue.has_errors().is_none());
}

#[test]
fn flush_is_stable_for_same_location() {
    let mut queue = DiagnosticQueue::new();
    queue.push(error("first", at(0, 2, 2)));
    queue.push(error("second", at(0, 2, 2)));
    assert_eq!(messages(&queue.flush()), vec!["first", "second"]);
}

#[test]
fn identical_diagnostics_are_deduplicated() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.push(error("dup", at(0, 1, 1))));
    assert!(!queue.push(error("dup", at(0, 1, 1))));
    assert!(queue.push(error("dup", at(0, 2, 1))));
    let _guar = queue.emit_error(error("dup", at(0, 2, 1)));
    assert_eq!(queue.len(), 2);
}
