//! Attribute validation.
//!
//! Each declaration kind accepts a fixed set of attributes, each with a
//! fixed argument shape. Validation only reports; readers below fall back
//! to defaults when an attribute was rejected.

use idef_diagnostic::{Diagnostic, ErrorCode};
use idef_ir::{Attribute, AttributeValue, Attributes};
use rustc_hash::FxHashSet;

use super::Resolver;

/// Argument shape an attribute must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Shape {
    /// `@name`
    Flag,
    /// `@name(42)`
    Integer,
    /// `@name("text")`
    String,
    /// `@name` or `@name(text)`
    OptionalName,
    /// `@name(a, b, ...)`, at least one
    Names,
}

impl Shape {
    fn accepts(self, values: &[AttributeValue]) -> bool {
        match self {
            Shape::Flag => values.is_empty(),
            Shape::Integer => matches!(values, [AttributeValue::Integer(_)]),
            Shape::String => matches!(values, [AttributeValue::String(_)]),
            Shape::OptionalName => {
                values.is_empty() || matches!(values, [v] if v.as_str().is_some())
            }
            Shape::Names => !values.is_empty() && values.iter().all(|v| v.as_str().is_some()),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Shape::Flag => "takes no arguments",
            Shape::Integer => "takes one integer argument",
            Shape::String => "takes one string argument",
            Shape::OptionalName => "takes at most one name or string argument",
            Shape::Names => "takes one or more names",
        }
    }
}

pub(super) const ENUM_ENTRY: &[(&str, Shape)] = &[("internal", Shape::Flag)];
pub(super) const TYPE: &[(&str, Shape)] =
    &[("precedence", Shape::Integer), ("display", Shape::String)];
pub(super) const INTRINSIC: &[(&str, Shape)] = &[
    ("must_use", Shape::Flag),
    ("stage", Shape::Names),
    ("const", Shape::OptionalName),
    ("deprecated", Shape::OptionalName),
];
pub(super) const PARAMETER: &[(&str, Shape)] = &[("const", Shape::Flag)];
pub(super) const NONE: &[(&str, Shape)] = &[];

impl Resolver {
    /// Report unknown, repeated and malformed attributes.
    pub(super) fn check_attributes(
        &mut self,
        attributes: &Attributes,
        allowed: &[(&str, Shape)],
        on: &str,
    ) {
        let mut seen = FxHashSet::default();
        for attr in attributes {
            let Some(&(_, shape)) = allowed.iter().find(|(name, _)| *name == attr.name) else {
                self.error(unknown_attribute(attr, allowed, on));
                continue;
            };
            if !seen.insert(attr.name.as_str()) {
                self.error(
                    Diagnostic::error(ErrorCode::E2007)
                        .with_message(format!("duplicate attribute `@{}`", attr.name))
                        .with_label(attr.span, "repeated here"),
                );
                continue;
            }
            if !shape.accepts(&attr.values) {
                self.error(
                    Diagnostic::error(ErrorCode::E2007)
                        .with_message(format!("malformed attribute `{attr}`"))
                        .with_label(attr.span, format!("`@{}` {}", attr.name, shape.describe())),
                );
            }
        }
    }
}

fn unknown_attribute(attr: &Attribute, allowed: &[(&str, Shape)], on: &str) -> Diagnostic {
    let diagnostic = Diagnostic::error(ErrorCode::E2007)
        .with_message(format!("unknown attribute `@{}` on {on}", attr.name))
        .with_label(attr.span, "not recognized here");
    if allowed.is_empty() {
        diagnostic.with_note(format!("{on} declarations take no attributes"))
    } else {
        let names: Vec<String> = allowed.iter().map(|(name, _)| format!("`@{name}`")).collect();
        diagnostic.with_note(format!("expected one of {}", names.join(", ")))
    }
}

/// The integer argument of `@name(N)`, if present and well-formed.
pub(super) fn integer(attributes: &Attributes, name: &str) -> Option<i64> {
    match attributes.get(name)?.values.as_slice() {
        [value] => value.as_integer(),
        _ => None,
    }
}

/// The single textual argument of `@name(text)`, if present and well-formed.
pub(super) fn text<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
    match attributes.get(name)?.values.as_slice() {
        [value] => value.as_str(),
        _ => None,
    }
}
