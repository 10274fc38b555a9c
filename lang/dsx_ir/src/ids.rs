//! Arena indices for the flat AST.
//!
//! Expressions never box their children. Every child slot is an [`ExprId`]
//! pointing back into the [`ExprArena`](crate::ExprArena), which keeps nodes
//! `Copy` and packs the whole tree into contiguous vectors.

use core::fmt;

/// Index of an expression in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Position in the arena's expression table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a statement in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    /// Position in the arena's statement table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

mod size_asserts {
    use super::{ExprId, StmtId};

    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(StmtId, 4);
}
