//! Statement nodes and the parse root.

use core::fmt;

use crate::ast::attr::Attribute;
use crate::ast::operators::AssignOp;
use crate::ast::ranges::StmtRange;
use crate::ids::{ExprId, StmtId};
use crate::span::Span;

/// A statement: an expression evaluated for its effect or value, or an
/// assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    #[must_use]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// A bare expression statement.
    Expr(ExprId),
    /// `target op value`.
    ///
    /// Compound operators stay compound: `$n += 1` keeps `+=` rather than
    /// desugaring to `$n = $n + 1`; what a compound assignment means is the
    /// host's decision. The target is restricted to signal references,
    /// member accesses, and computed member accesses; the parser enforces
    /// this before constructing the node.
    Assign {
        target: ExprId,
        op: AssignOp,
        value: ExprId,
    },
}

/// What one parsed input amounts to.
///
/// The attribute-name form and the statement form are a tagged choice, not a
/// fallback chain: input that begins `data-` is an attribute name and is
/// never reinterpreted as statements, however member-expression-like it
/// looks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Root {
    /// An attribute name such as `data-on:click__debounce.500ms`.
    Attribute(Attribute),
    /// A single statement. Never a one-element sequence.
    Statement(StmtId),
    /// Two or more statements joined by `,` or `;`.
    Sequence(StmtRange),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stmt_debug_shows_kind_and_span() {
        let stmt = Stmt::new(StmtKind::Expr(ExprId::new(3)), Span::new(0, 5));
        assert_eq!(format!("{stmt:?}"), "Expr(ExprId(3)) @ 0..5");
    }

    #[test]
    fn assign_keeps_compound_operator() {
        let kind = StmtKind::Assign {
            target: ExprId::new(0),
            op: AssignOp::Add,
            value: ExprId::new(1),
        };
        let StmtKind::Assign { op, .. } = kind else {
            panic!("constructed an assignment");
        };
        assert_eq!(op.symbol(), "+=");
    }
}
