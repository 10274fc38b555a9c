//! Variable-length node payloads stored in arena side tables.

use crate::ids::ExprId;
use crate::name::Name;
use crate::span::Span;

/// One array element or call argument.
///
/// `[1, ...rest]` and `@post('/save', ...extra)` share this shape; spread
/// is a flag rather than a wrapper node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Element {
    pub value: ExprId,
    pub is_spread: bool,
    /// Covers the `...` prefix when present.
    pub span: Span,
}

/// One entry of an object literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Property {
    /// `key: value` in any of its key spellings.
    Entry {
        key: PropertyKey,
        value: ExprId,
        span: Span,
    },
    /// `...expr`
    Spread { expr: ExprId, span: Span },
}

impl Property {
    #[inline]
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Property::Entry { span, .. } | Property::Spread { span, .. } => *span,
        }
    }
}

/// The key of an object entry: `name:`, `'string':`, or `[computed]:`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyKey {
    Ident(Name),
    String(Name),
    Computed(ExprId),
}

/// One arrow function parameter. Parameters are plain names only, no
/// defaults and no destructuring.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// One segment of a signal access chain.
///
/// Member segments here allow hyphens in the name (`$fetch-user.is-loading`),
/// unlike generic member access.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SignalLink {
    /// `.name` or `?.name`.
    Member {
        name: Name,
        optional: bool,
        span: Span,
    },
    /// `[index]` or `?.[index]`.
    Index {
        index: ExprId,
        optional: bool,
        span: Span,
    },
}

impl SignalLink {
    #[inline]
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            SignalLink::Member { span, .. } | SignalLink::Index { span, .. } => *span,
        }
    }

    /// Whether the segment short-circuits on null (`?.` forms).
    #[inline]
    #[must_use]
    pub fn is_optional(&self) -> bool {
        match self {
            SignalLink::Member { optional, .. } | SignalLink::Index { optional, .. } => *optional,
        }
    }
}
