//! Index newtypes into the arenas of [`Sem`](crate::Sem).
//!
//! Child-to-parent links (an entry's enum, an overload's intrinsic) are
//! stored as these indices; ownership always flows parent to child.

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Id of the element about to be pushed onto `arena`.
            #[inline]
            pub(crate) fn next<T>(arena: &[T]) -> Self {
                $name(u32::try_from(arena.len()).unwrap_or(u32::MAX))
            }
        }
    };
}

define_id!(
    /// Index of an [`Enum`](crate::Enum).
    EnumId
);
define_id!(
    /// Index of a [`Type`](crate::Type).
    TypeId
);
define_id!(
    /// Index of a [`TypeMatcher`](crate::TypeMatcher).
    TypeMatcherId
);
define_id!(
    /// Index of an [`EnumMatcher`](crate::EnumMatcher).
    EnumMatcherId
);
define_id!(
    /// Index of an [`Intrinsic`](crate::Intrinsic).
    IntrinsicId
);
define_id!(
    /// Index of an [`Overload`](crate::Overload) in the overload arena.
    OverloadId
);

/// An entry of one enum: the owning enum plus the entry's declaration index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumEntryId {
    pub owner: EnumId,
    pub index: u32,
}

impl EnumEntryId {
    pub const fn new(owner: EnumId, index: u32) -> Self {
        EnumEntryId { owner, index }
    }
}

idef_ir::static_assert_size!(EnumEntryId, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_the_arena_length() {
        let arena = vec![(), (), ()];
        assert_eq!(TypeId::next(&arena), TypeId::new(3));
        assert_eq!(TypeId::next(&arena).index(), 3);
    }

    #[test]
    fn entry_ids_order_by_owner_then_index() {
        let a = EnumEntryId::new(EnumId::new(0), 5);
        let b = EnumEntryId::new(EnumId::new(1), 0);
        assert!(a < b);
    }
}
