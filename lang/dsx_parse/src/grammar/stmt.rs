//! Statement parsing: the root, sequences, and assignment detection.

use dsx_ir::{AssignOp, ExprId, ExprKind, Root, Stmt, StmtKind, TokenKind};

use crate::error::{ErrorContext, ParseError, ParseErrorKind};
use crate::Parser;

impl Parser<'_> {
    /// Parses a whole attribute value: statements joined by `,` or `;`,
    /// then end of input.
    ///
    /// A lone statement becomes [`Root::Statement`]; two or more become
    /// [`Root::Sequence`]. The separators are interchangeable and carry no
    /// meaning of their own.
    pub(crate) fn parse_root(&mut self) -> Result<Root, ParseError> {
        let first = self.parse_statement()?;
        if !matches!(
            self.current_kind(),
            TokenKind::Comma | TokenKind::Semicolon
        ) {
            self.expect_sequence_end()?;
            return Ok(Root::Statement(self.arena.alloc_stmt(first)));
        }
        let mut stmts = vec![first];
        while matches!(
            self.current_kind(),
            TokenKind::Comma | TokenKind::Semicolon
        ) {
            self.advance();
            stmts.push(self.parse_statement()?);
        }
        self.expect_sequence_end()?;
        Ok(Root::Sequence(self.arena.alloc_stmts(stmts)))
    }

    /// After a statement only `,`, `;`, or the end of input may follow.
    fn expect_sequence_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self
                .unexpected_here("`,`, `;`, or end of input")
                .with_context(ErrorContext::Sequence))
        }
    }

    /// One statement: an assignment or a bare expression.
    ///
    /// Telling the two apart needs unbounded lookahead, since the target of
    /// `$user.profile.name = 'x'` is an arbitrarily long access chain. The
    /// chain is parsed speculatively: if an assignment operator follows, it
    /// was the target and the parse commits; otherwise the cursor rewinds
    /// and the statement reparses as an expression, so a failed speculation
    /// consumes nothing.
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.snapshot();
        if let Ok(target) = self.parse_call_chain() {
            if let Some(op) = AssignOp::from_token(self.current_kind()) {
                return self.finish_assignment(target, op);
            }
        }
        self.restore(start);

        let value = self.parse_expr()?;
        if AssignOp::from_token(self.current_kind()).is_some() {
            // The full expression grammar accepted more than a chain, so
            // whatever precedes the operator cannot be an assignment target
            // (`$a + 1 = 2`, `$a ? $b : $c = 1`).
            return Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                self.arena.get_expr(value).span,
            ));
        }
        let span = self.arena.get_expr(value).span;
        Ok(Stmt::new(StmtKind::Expr(value), span))
    }

    /// The target chain is parsed and the operator is next; validate the
    /// target shape, then take the operator and the value.
    fn finish_assignment(&mut self, target: ExprId, op: AssignOp) -> Result<Stmt, ParseError> {
        let target_expr = *self.arena.get_expr(target);
        if !matches!(
            target_expr.kind,
            ExprKind::Signal { .. } | ExprKind::Member { .. } | ExprKind::Index { .. }
        ) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                target_expr.span,
            ));
        }
        self.advance();
        let value = self.parse_expr()?;
        let span = target_expr.span.merge(self.arena.get_expr(value).span);
        Ok(Stmt::new(StmtKind::Assign { target, op, value }, span))
    }
}
