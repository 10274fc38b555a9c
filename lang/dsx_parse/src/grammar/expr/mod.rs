//! Expression parsing.
//!
//! `parse_expr` is the single entry point. The module splits by binding
//! level:
//!
//! - `mod.rs`: arrows and ternaries on top, then one precedence-climbing
//!   loop over the [`BinaryOp`] table, then prefix and postfix operators
//! - `postfix.rs`: access chains (calls, members, indexes) and signal
//!   references
//! - `primary.rs`: literals, identifiers, actions, collections, parens
//!
//! Infix precedence is data, not structure: the climb reads binding powers
//! from the operator table instead of dedicating a function to each level.

mod postfix;
mod primary;

use dsx_ir::{Assoc, BinaryOp, Expr, ExprId, ExprKind, Param, PostfixOp, TokenKind, UnaryOp};

use crate::error::{ErrorContext, ParseError};
use crate::series::{SeriesConfig, TrailingSeparator};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    /// Parses one expression. Assignment and sequencing are statement-level
    /// forms and are not reachable from here.
    ///
    /// Wraps the work in `ensure_sufficient_stack`, so recursion through
    /// nested subexpressions grows the stack instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    /// Arrow functions and the conditional operator, the two loosest
    /// levels.
    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        if self.at_arrow_function() {
            return self.parse_arrow();
        }
        let test = self.parse_binary(0)?;
        if !self.check(TokenKind::Question) {
            return Ok(test);
        }
        self.advance();
        let consequent = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        // Right associativity falls out here: the alternate swallows any
        // further `? :` before control returns.
        let alternate = self.parse_expr()?;
        let span = self
            .arena
            .get_expr(test)
            .span
            .merge(self.arena.get_expr(alternate).span);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            },
            span,
        )))
    }

    /// Infix operators by precedence climbing.
    ///
    /// `min_prec` is the loosest binding power this call may consume. For a
    /// left-associative operator the right operand climbs one level
    /// tighter; for the right-associative `**` it climbs at the same level,
    /// so `2 ** 3 ** 2` nests to the right.
    fn parse_binary(&mut self, min_prec: u8) -> Result<ExprId, ParseError> {
        let mut lhs = self.parse_prefix()?;
        while let Some(op) = BinaryOp::from_token(self.current_kind()) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.advance();
            let next_min = match op.assoc() {
                Assoc::Left => prec + 1,
                Assoc::Right => prec,
            };
            let rhs = self.parse_binary(next_min)?;
            let span = self
                .arena
                .get_expr(lhs)
                .span
                .merge(self.arena.get_expr(rhs).span);
            lhs = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Binary { op, lhs, rhs }, span));
        }
        Ok(lhs)
    }

    /// Prefix operators, stacking right to left: `!!x`, `typeof -$n`.
    fn parse_prefix(&mut self) -> Result<ExprId, ParseError> {
        if let Some(op) = UnaryOp::from_token(self.current_kind()) {
            let start = self.current_span();
            self.advance();
            let operand = self.parse_prefix()?;
            let span = start.merge(self.arena.get_expr(operand).span);
            return Ok(self
                .arena
                .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)));
        }
        self.parse_postfix_ops()
    }

    /// Postfix `++` / `--`, binding tighter than any prefix operator.
    fn parse_postfix_ops(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_call_chain()?;
        while let Some(op) = PostfixOp::from_token(self.current_kind()) {
            let span = self.arena.get_expr(expr).span.merge(self.current_span());
            self.advance();
            expr = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Postfix { op, operand: expr }, span));
        }
        Ok(expr)
    }

    /// Whether an arrow function begins at the current token.
    ///
    /// `x =>` needs one token of lookahead. `(a, b) =>` needs a bounded
    /// walk: only identifiers and commas may sit between the parens of a
    /// parameter list, so the walk either reaches `) =>` or disproves the
    /// arrow within a few tokens. Neither path consumes input.
    fn at_arrow_function(&self) -> bool {
        match self.current_kind() {
            TokenKind::Ident(_) => matches!(self.peek_kind_at(1), TokenKind::Arrow),
            TokenKind::LParen => {
                let mut n = 1;
                while matches!(
                    self.peek_kind_at(n),
                    TokenKind::Ident(_) | TokenKind::Comma
                ) {
                    n += 1;
                }
                matches!(self.peek_kind_at(n), TokenKind::RParen)
                    && matches!(self.peek_kind_at(n + 1), TokenKind::Arrow)
            }
            _ => false,
        }
    }

    /// Parses `x => body`, `() => body`, or `(a, b) => body`.
    fn parse_arrow(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span();
        let params = if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.current_span();
            self.advance();
            vec![Param { name, span }]
        } else {
            self.expect(TokenKind::LParen)?;
            let config = SeriesConfig::comma(TokenKind::RParen, ErrorContext::ArrowParams)
                .trailing(TrailingSeparator::Forbidden);
            let params = self.series(&config, Self::parse_param)?;
            self.expect(TokenKind::RParen)?;
            params
        };
        self.expect(TokenKind::Arrow)?;
        // Nested arrows nest to the right: `a => b => c` is `a => (b => c)`.
        let body = self.parse_expr()?;
        let span = start.merge(self.arena.get_expr(body).span);
        let params = self.arena.alloc_params(params);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Arrow { params, body }, span)))
    }

    /// One arrow parameter: a plain name, nothing else.
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.current_span();
            self.advance();
            Ok(Param { name, span })
        } else {
            Err(self
                .unexpected_here("a parameter name")
                .with_context(ErrorContext::ArrowParams))
        }
    }
}
