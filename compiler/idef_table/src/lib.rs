//! Overload expansion and table building for intrinsic definitions.
//!
//! - [`Permuter`] expands one overload into its concrete signatures.
//! - [`build_table`] checks every overload and encodes the whole [`Sem`]
//!   into an [`IntrinsicTable`].
//! - [`lut`] packs many short sequences into one array by reusing overlaps.
//!
//! [`Sem`]: idef_sem::Sem

mod aggregate;
mod error;
pub mod lut;
mod permute;
mod table;

pub use aggregate::Aggregates;
pub use error::{BuildError, PermuteError};
pub use lut::{Compacted, Lut, SequenceId};
pub use permute::{
    ConcreteArg, Permutation, PermutedParameter, Permuter, PermuterConfig, TemplateBinding,
};
pub use table::{
    build_table, build_table_with, IntrinsicRecord, IntrinsicTable, MatcherSlot, OverloadRecord,
    ParameterRecord, SlotKind, TemplateKind, TemplateRecord,
};
