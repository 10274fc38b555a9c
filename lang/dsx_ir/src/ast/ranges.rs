//! Range types for arena side tables.
//!
//! Variable-length node payloads (call arguments, object entries, signal
//! chains, statement sequences) are stored in per-kind vectors on the arena.
//! Nodes hold a `(start, len)` range into those vectors, so every node stays
//! `Copy` and 8 bytes buys an arbitrary-length list.

/// Defines a compact arena range type.
///
/// Each generated type holds `start: u32` plus `len: u16`, an `EMPTY`
/// constant, `new()` / `is_empty()` / `len()`, and a `Debug` impl printed as
/// `TypeName(start..end)`.
macro_rules! define_range {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            #[must_use]
            pub const fn new(start: u32, len: u16) -> Self {
                Self { start, len }
            }

            #[inline]
            #[must_use]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            #[must_use]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(
                    f,
                    "{}({}..{})",
                    stringify!($name),
                    self.start,
                    self.start + u32::from(self.len),
                )
            }
        }
    )* };
}

define_range!(
    /// Call arguments or array elements in the arena's element table.
    ElementRange,
    /// Object literal entries in the arena's property table.
    PropertyRange,
    /// Arrow function parameters in the arena's parameter table.
    ParamRange,
    /// Signal access chain segments in the arena's link table.
    SignalLinkRange,
    /// Consecutive statements in the arena's statement table.
    StmtRange,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_constant() {
        assert!(ElementRange::EMPTY.is_empty());
        assert_eq!(ElementRange::EMPTY.len(), 0);
        assert!(PropertyRange::EMPTY.is_empty());
        assert!(ParamRange::EMPTY.is_empty());
        assert!(SignalLinkRange::EMPTY.is_empty());
        assert!(StmtRange::EMPTY.is_empty());
    }

    #[test]
    fn new_and_len() {
        let range = ElementRange::new(10, 3);
        assert_eq!(range.start, 10);
        assert_eq!(range.len(), 3);
        assert!(!range.is_empty());
    }

    #[test]
    fn debug_shows_end_exclusive() {
        assert_eq!(format!("{:?}", PropertyRange::new(5, 2)), "PropertyRange(5..7)");
        assert_eq!(format!("{:?}", StmtRange::EMPTY), "StmtRange(0..0)");
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(SignalLinkRange::default(), SignalLinkRange::EMPTY);
    }
}
