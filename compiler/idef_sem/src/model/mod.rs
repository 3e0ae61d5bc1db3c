//! The semantic model.
//!
//! Every entity lives in an arena owned by [`Sem`] and is addressed by an
//! index newtype from [`crate::ids`]. Arena order is declaration order.

mod enums;
mod fqn;
mod intrinsic;
mod types;

pub use enums::{Enum, EnumEntry, EnumMatcher};
pub use fqn::{FqnDisplay, FullyQualifiedName, Target};
pub use intrinsic::{Intrinsic, IntrinsicGroup, Overload, OverloadParameter, Stages};
pub use types::{
    EnumConstraint, TemplateParam, TemplateParamKind, Type, TypeConstraint, TypeMatcher,
};

use crate::{
    EnumEntryId, EnumId, EnumMatcherId, IntrinsicId, OverloadId, TypeId, TypeMatcherId,
};

/// A fully resolved set of definitions.
///
/// Only [`crate::resolve`] builds one, and only when every reference
/// resolved; a `Sem` is never partially valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sem {
    pub(crate) enums: Vec<Enum>,
    pub(crate) types: Vec<Type>,
    pub(crate) type_matchers: Vec<TypeMatcher>,
    pub(crate) enum_matchers: Vec<EnumMatcher>,
    pub(crate) intrinsics: Vec<Intrinsic>,
    pub(crate) overloads: Vec<Overload>,
}

impl Sem {
    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn type_matchers(&self) -> &[TypeMatcher] {
        &self.type_matchers
    }

    pub fn enum_matchers(&self) -> &[EnumMatcher] {
        &self.enum_matchers
    }

    pub fn intrinsics(&self) -> &[Intrinsic] {
        &self.intrinsics
    }

    pub fn overloads(&self) -> &[Overload] {
        &self.overloads
    }

    pub fn enum_def(&self, id: EnumId) -> &Enum {
        &self.enums[id.index()]
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    pub fn type_matcher(&self, id: TypeMatcherId) -> &TypeMatcher {
        &self.type_matchers[id.index()]
    }

    pub fn enum_matcher(&self, id: EnumMatcherId) -> &EnumMatcher {
        &self.enum_matchers[id.index()]
    }

    pub fn intrinsic(&self, id: IntrinsicId) -> &Intrinsic {
        &self.intrinsics[id.index()]
    }

    pub fn overload(&self, id: OverloadId) -> &Overload {
        &self.overloads[id.index()]
    }

    pub fn entry(&self, id: EnumEntryId) -> &EnumEntry {
        &self.enum_def(id.owner).entries[id.index as usize]
    }

    /// Intrinsics of one group, in first-declaration order.
    pub fn intrinsics_in(&self, group: IntrinsicGroup) -> impl Iterator<Item = &Intrinsic> {
        self.intrinsics.iter().filter(move |i| i.group == group)
    }

    /// Overloads of `intrinsic`, in declaration order.
    pub fn overloads_of<'s>(
        &'s self,
        intrinsic: &'s Intrinsic,
    ) -> impl Iterator<Item = &'s Overload> + 's {
        intrinsic.overloads.iter().map(|&id| self.overload(id))
    }

    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn find_type(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn find_type_matcher(&self, name: &str) -> Option<&TypeMatcher> {
        self.type_matchers.iter().find(|m| m.name == name)
    }

    pub fn find_enum_matcher(&self, name: &str) -> Option<&EnumMatcher> {
        self.enum_matchers.iter().find(|m| m.name == name)
    }

    pub fn find_intrinsic(&self, group: IntrinsicGroup, name: &str) -> Option<&Intrinsic> {
        self.intrinsics_in(group).find(|i| i.name == name)
    }

    /// Non-templated types in declaration order.
    pub fn plain_types(&self) -> impl Iterator<Item = &Type> {
        self.types.iter().filter(|t| !t.is_templated())
    }
}
