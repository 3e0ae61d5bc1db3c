//! Semantic model of intrinsic definitions, and the resolver that builds it.
//!
//! [`resolve`] turns a parsed [`idef_ir::File`] into a [`Sem`]: every name
//! bound to its entity, every matcher classified, every overload grouped
//! under its intrinsic. Resolution errors accumulate across the whole file
//! and come back together.

mod ids;
mod model;
mod resolve;

pub use ids::{EnumEntryId, EnumId, EnumMatcherId, IntrinsicId, OverloadId, TypeId, TypeMatcherId};
pub use model::{
    Enum, EnumConstraint, EnumEntry, EnumMatcher, FqnDisplay, FullyQualifiedName, Intrinsic,
    IntrinsicGroup, Overload, OverloadParameter, Sem, Stages, Target, TemplateParam,
    TemplateParamKind, Type, TypeConstraint, TypeMatcher,
};
pub use resolve::{parse_and_resolve, resolve};
