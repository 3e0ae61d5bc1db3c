//! Grammar productions, split by construct.
//!
//! - `item`: top-level declarations and imports
//! - `attr`: attribute lists
//! - `ty`: templated names and template parameter lists

mod attr;
mod item;
mod ty;
