use super::*;
use pretty_assertions::assert_eq;

fn loc(line: u32, column: u32, offset: u32) -> Location {
    Location::new(line, column, offset)
}

#[test]
fn test_span_basic() {
    let span = Span::new(FileId::new(2), loc(1, 1, 0), loc(1, 6, 5));
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 0..5);
}

#[test]
fn test_span_merge() {
    let file = FileId::new(1);
    let a = Span::new(file, loc(1, 3, 2), loc(1, 8, 7));
    let b = Span::new(file, loc(2, 1, 10), loc(2, 4, 13));
    let merged = a.merge(b);
    assert_eq!(merged.begin, loc(1, 3, 2));
    assert_eq!(merged.end, loc(2, 4, 13));
}

#[test]
fn test_point_span_is_empty() {
    let span = Span::point(FileId::DUMMY, loc(3, 4, 20));
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_location_ordering_follows_offset() {
    assert!(loc(1, 9, 8) < loc(2, 1, 9));
    assert!(loc(2, 1, 9) < loc(2, 2, 10));
}

#[test]
fn test_span_display() {
    let span = Span::new(FileId::new(3), loc(4, 7, 40), loc(4, 9, 42));
    assert_eq!(span.to_string(), "file#3:4:7");
    assert_eq!(format!("{span:?}"), "file#3:4:7@40..4:9@42");
}
