//! Enums, their entries, and enum matchers.

use idef_ir::Span;

use crate::{EnumEntryId, EnumId, EnumMatcherId, Sem};

/// A resolved `enum` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Enum {
    pub id: EnumId,
    pub name: String,
    pub span: Span,
    /// Entries in declaration order.
    pub entries: Vec<EnumEntry>,
}

/// One entry of an [`Enum`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumEntry {
    pub id: EnumEntryId,
    pub name: String,
    pub span: Span,
    /// Marked `@internal`: usable by the compiler, not by shader authors.
    pub is_internal: bool,
}

impl Enum {
    /// Entries not marked `@internal`, in declaration order.
    pub fn public_entries(&self) -> impl Iterator<Item = &EnumEntry> {
        self.entries.iter().filter(|e| !e.is_internal)
    }

    /// Entries marked `@internal`, in declaration order.
    pub fn internal_entries(&self) -> impl Iterator<Item = &EnumEntry> {
        self.entries.iter().filter(|e| e.is_internal)
    }

    /// Public entries first, then internal ones; declaration order within each.
    ///
    /// This is the order enum template parameters enumerate in, and the
    /// order numeric values are assigned in.
    pub fn canonical_entries(&self) -> impl Iterator<Item = &EnumEntry> {
        self.public_entries().chain(self.internal_entries())
    }

    pub fn find_entry(&self, name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Position of `entry` in [`Enum::canonical_entries`].
    pub fn canonical_index(&self, entry: EnumEntryId) -> Option<usize> {
        self.canonical_entries().position(|e| e.id == entry)
    }
}

/// A `match` declaration whose options are entries of a single enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumMatcher {
    pub id: EnumMatcherId,
    pub name: String,
    pub span: Span,
    pub enum_id: EnumId,
    /// Admitted entries, in the order the matcher lists them, without duplicates.
    pub entries: Vec<EnumEntryId>,
}

impl EnumMatcher {
    /// Admitted entries in the owning enum's canonical order.
    pub fn canonical_entries<'s>(&self, sem: &'s Sem) -> Vec<&'s EnumEntry> {
        sem.enum_def(self.enum_id)
            .canonical_entries()
            .filter(|e| self.entries.contains(&e.id))
            .collect()
    }
}
