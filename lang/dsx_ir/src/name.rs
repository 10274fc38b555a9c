//! Interned string handles.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Number of shards in the interner. Must be a power of two so the shard
/// index fits the packed layout below.
pub const NUM_SHARDS: usize = 16;

/// A compact handle to an interned string.
///
/// Signal names, member names, string literal contents, and attribute keys
/// are all interned once and referenced by `Name` everywhere else, so AST
/// nodes stay `Copy` and comparisons are a single `u32` compare.
///
/// The `u32` packs a 4-bit shard index in the high bits and a 28-bit
/// per-shard slot in the low bits.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, interned at slot 0 of shard 0.
    pub const EMPTY: Name = Name(0);

    /// Largest slot index a single shard can hold.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Packs a shard index and a per-shard slot into a handle.
    #[inline]
    #[must_use]
    pub fn new(shard: usize, local: u32) -> Self {
        debug_assert!(shard < NUM_SHARDS, "shard index {shard} out of range");
        debug_assert!(
            local <= Self::MAX_LOCAL,
            "local index {local} exceeds shard capacity"
        );
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard < NUM_SHARDS = 16 always fits in u32"
        )]
        let shard_bits = (shard as u32) << 28;
        Name(shard_bits | local)
    }

    /// Shard index this name lives in.
    #[inline]
    #[must_use]
    pub fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Slot index within the shard.
    #[inline]
    #[must_use]
    pub fn local(self) -> u32 {
        self.0 & Self::MAX_LOCAL
    }

    /// The raw packed value.
    #[inline]
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Rebuilds a name from [`Name::raw`] output.
    #[inline]
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl Hash for Name {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.0);
    }
}

impl Default for Name {
    #[inline]
    fn default() -> Self {
        Name::EMPTY
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(shard={}, local={})", self.shard(), self.local())
    }
}

mod size_asserts {
    use super::Name;

    crate::static_assert_size!(Name, 4);
}
