//! Expression nodes.

use core::fmt;

use crate::ast::operators::{BinaryOp, PostfixOp, UnaryOp};
use crate::ast::ranges::{ElementRange, ParamRange, PropertyRange, SignalLinkRange};
use crate::ids::ExprId;
use crate::name::Name;
use crate::span::Span;

/// An expression: kind plus the span it was parsed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    #[must_use]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// The closed set of expression forms.
///
/// Children are [`ExprId`] indices into the arena; variable-length payloads
/// are ranges into the arena's side tables. Every variant is `Copy`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Numeric literal, stored as `f64` bits.
    Number(u64),
    /// String literal, contents interned after escape processing.
    String(Name),
    /// `true` or `false`.
    Bool(bool),
    Null,
    Undefined,
    /// A plain identifier: a name the host scope provides (`evt`, `el`).
    Ident(Name),
    /// `$head` followed by its access chain.
    ///
    /// The chain covers accesses spelled directly on the reference
    /// (`$user.profile.name`, `$items[0]?.label`). Accesses applied to some
    /// other expression, for example the result of a call, are the generic
    /// [`ExprKind::Member`] / [`ExprKind::Index`] nodes instead.
    Signal { head: Name, chain: SignalLinkRange },
    /// `@name(args)`. The callee is the action name itself, never an
    /// arbitrary expression.
    ActionCall { name: Name, args: ElementRange },
    /// `[a, b, ...rest]`
    Array(ElementRange),
    /// `{key: value, 'str': v, [computed]: v, ...spread}`
    Object(PropertyRange),
    /// Infix operation.
    Binary { op: BinaryOp, lhs: ExprId, rhs: ExprId },
    /// Prefix operation.
    Unary { op: UnaryOp, operand: ExprId },
    /// Postfix `++` or `--`.
    Postfix { op: PostfixOp, operand: ExprId },
    /// `test ? consequent : alternate`
    Conditional {
        test: ExprId,
        consequent: ExprId,
        alternate: ExprId,
    },
    /// `callee(args)` where the callee is an expression.
    Call { callee: ExprId, args: ElementRange },
    /// `object.property` or `object?.property`.
    Member {
        object: ExprId,
        property: Name,
        optional: bool,
    },
    /// `object[index]` or `object?.[index]`.
    Index {
        object: ExprId,
        index: ExprId,
        optional: bool,
    },
    /// Explicit parentheses. Kept as a node so printing preserves the
    /// author's grouping exactly.
    Paren(ExprId),
    /// `(a, b) => body` or `x => body`. The body is always an expression.
    Arrow { params: ParamRange, body: ExprId },
}
