//! Access chains: calls, member access, computed indexing, and signal
//! references with their chains.

use dsx_ir::{Element, Expr, ExprId, ExprKind, Name, SignalLink, Span, TokenKind};

use crate::error::{ErrorContext, ParseError, ParseErrorKind};
use crate::series::{SeriesConfig, TrailingSeparator};
use crate::Parser;

impl Parser<'_> {
    /// Parses a primary expression and every postfix access on it: calls,
    /// `.name` / `?.name` members, `[expr]` / `?.[expr]` indexes.
    ///
    /// This is also the shape of an assignment target, which is why the
    /// statement parser speculates over exactly this production.
    pub(crate) fn parse_call_chain(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.check(TokenKind::LParen) {
                self.advance();
                let args = self.parse_arguments(ErrorContext::FunctionCall)?;
                self.expect(TokenKind::RParen)
                    .map_err(|e| e.with_context(ErrorContext::FunctionCall))?;
                let span = self.arena.get_expr(expr).span.merge(self.previous_span());
                let args = self.arena.alloc_elements(args);
                expr = self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Call { callee: expr, args }, span));
            } else if self.check(TokenKind::Dot) || self.check(TokenKind::QuestionDot) {
                let optional = self.check(TokenKind::QuestionDot);
                self.advance();
                let property = self.expect_member_name()?;
                let span = self.arena.get_expr(expr).span.merge(self.previous_span());
                expr = self.arena.alloc_expr(Expr::new(
                    ExprKind::Member {
                        object: expr,
                        property,
                        optional,
                    },
                    span,
                ));
            } else if self.check(TokenKind::LBracket)
                || self.check(TokenKind::QuestionDotBracket)
            {
                let optional = self.check(TokenKind::QuestionDotBracket);
                self.advance();
                let index = self.parse_expr()?;
                self.expect(TokenKind::RBracket)
                    .map_err(|e| e.with_context(ErrorContext::IndexExpression))?;
                let span = self.arena.get_expr(expr).span.merge(self.previous_span());
                expr = self.arena.alloc_expr(Expr::new(
                    ExprKind::Index {
                        object: expr,
                        index,
                        optional,
                    },
                    span,
                ));
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Parses call arguments up to the closing paren. Spread is allowed,
    /// trailing commas are not.
    pub(crate) fn parse_arguments(
        &mut self,
        context: ErrorContext,
    ) -> Result<Vec<Element>, ParseError> {
        let config =
            SeriesConfig::comma(TokenKind::RParen, context).trailing(TrailingSeparator::Forbidden);
        self.series(&config, Self::parse_element)
    }

    /// One array element or call argument, optionally spread.
    pub(crate) fn parse_element(&mut self) -> Result<Element, ParseError> {
        if self.check(TokenKind::DotDotDot) {
            let dots = self.current_span();
            self.advance();
            let value = self.parse_expr()?;
            let span = dots.merge(self.arena.get_expr(value).span);
            return Ok(Element {
                value,
                is_spread: true,
                span,
            });
        }
        let value = self.parse_expr()?;
        let span = self.arena.get_expr(value).span;
        Ok(Element {
            value,
            is_spread: false,
            span,
        })
    }

    /// Parses `$head` and the access chain spelled directly on it.
    ///
    /// The chain stays part of the signal node rather than generic member
    /// nodes because its names follow different rules: hyphens are legal in
    /// chain members (`$fetch-user.is-loading`) but not in ordinary member
    /// access.
    pub(crate) fn parse_signal_reference(&mut self) -> Result<ExprId, ParseError> {
        let TokenKind::Signal(head) = self.current_kind() else {
            return Err(self.unexpected_here("a signal reference"));
        };
        let mut span = self.current_span();
        self.advance();

        let mut links = Vec::new();
        loop {
            if self.check(TokenKind::Dot) || self.check(TokenKind::QuestionDot) {
                let optional = self.check(TokenKind::QuestionDot);
                let opener = self.current_span();
                self.advance();
                let (name, name_span) = self.parse_chain_name()?;
                let link_span = opener.merge(name_span);
                links.push(SignalLink::Member {
                    name,
                    optional,
                    span: link_span,
                });
                span = span.merge(link_span);
            } else if self.check(TokenKind::LBracket)
                || self.check(TokenKind::QuestionDotBracket)
            {
                let optional = self.check(TokenKind::QuestionDotBracket);
                let opener = self.current_span();
                self.advance();
                let index = self.parse_expr()?;
                self.expect(TokenKind::RBracket)
                    .map_err(|e| e.with_context(ErrorContext::IndexExpression))?;
                let link_span = opener.merge(self.previous_span());
                links.push(SignalLink::Index {
                    index,
                    optional,
                    span: link_span,
                });
                span = span.merge(link_span);
            } else {
                break;
            }
        }

        let chain = self.arena.alloc_links(links);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Signal { head, chain }, span)))
    }

    /// A chain member name, possibly glued out of several tokens.
    ///
    /// The expression lexer has no hyphenated-identifier rule, so
    /// `is-loading` arrives as `is`, `-`, `loading`. The name continues
    /// across a `-` only while the tokens touch byte-to-byte; any
    /// whitespace ends the name and leaves the `-` to parse as
    /// subtraction. Number tokens may land inside a glued name
    /// (`$stats.p-99`), but only when their spelling is name-shaped:
    /// `1.5` or `2e3` inside a name is an error.
    fn parse_chain_name(&mut self) -> Result<(Name, Span), ParseError> {
        let kind = self.current_kind();
        let is_name_start = matches!(kind, TokenKind::Ident(_)) || kind.keyword_str().is_some();
        if !is_name_start {
            return Err(self
                .unexpected_here("a property name")
                .with_context(ErrorContext::SignalChain));
        }
        let mut span = self.current_span();
        self.advance();

        while self.check(TokenKind::Minus)
            && self.previous_span().end == self.current_span().start
            && self.hyphen_continues_name()
        {
            let part_span = self.peek_next_span();
            let part = self.slice(part_span);
            if !part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        found: self.peek_kind_at(1).display_name(),
                        expected: "a property name",
                    },
                    part_span,
                )
                .with_context(ErrorContext::SignalChain));
            }
            self.advance(); // the hyphen
            self.advance(); // the glued part
            span = span.extend_to(part_span.end);
        }

        let name = self.interner().intern(self.slice(span));
        Ok((name, span))
    }

    /// Whether the token after the current `-` keeps a glued chain name
    /// going: name-shaped and touching the hyphen.
    fn hyphen_continues_name(&self) -> bool {
        let next = self.peek_kind_at(1);
        let name_shaped = matches!(next, TokenKind::Ident(_) | TokenKind::Number(_))
            || next.keyword_str().is_some();
        name_shaped && self.current_span().end == self.peek_next_span().start
    }
}
