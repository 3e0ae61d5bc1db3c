//! idef IR - source locations, tokens and the AST
//!
//! This crate contains the data structures shared by every stage of the
//! intrinsic definition compiler:
//! - Spans carrying file, line, column and byte offset
//! - Tokens produced by the lexer
//! - AST nodes produced by the parser and consumed by the resolver
//!
//! Every value here is plain data. Positions are carried on the values
//! themselves rather than in any ambient state, so each stage can be driven
//! and tested in isolation.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{
    Attribute, AttributeValue, Attributes, EnumDecl, EnumEntry, File, Import, IntrinsicDecl,
    IntrinsicKind, MatcherDecl, MatcherOption, MemberName, Parameter, TemplateParam,
    TemplatedName, TypeDecl,
};
pub use span::{FileId, Location, Span};
pub use token::{Token, TokenKind};
