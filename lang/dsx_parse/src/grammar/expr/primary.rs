//! Primary expressions: literals, identifiers, action calls, collections,
//! and parenthesized groups.

use dsx_ir::{Expr, ExprId, ExprKind, Property, PropertyKey, TokenKind};
use tracing::debug;

use crate::error::{ErrorContext, ParseError};
use crate::series::SeriesConfig;
use crate::Parser;

impl Parser<'_> {
    /// Token-dispatched primary expression parsing.
    ///
    /// Every alternative is decided by the current token alone; the
    /// fallback arm produces the "expected an expression" error, which also
    /// covers the lexer-signalled tokens (unterminated strings, bytes no
    /// rule matched).
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        debug!(
            pos = self.cursor.position(),
            kind = self.cursor.current_kind().display_name(),
            span_start = self.cursor.current_span().start,
            span_end = self.cursor.current_span().end,
            "parse_primary"
        );
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Number(bits) => {
                self.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Number(bits), span)))
            }
            TokenKind::String(name) => {
                self.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::String(name), span)))
            }
            TokenKind::True => {
                self.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Bool(true), span)))
            }
            TokenKind::False => {
                self.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Bool(false), span)))
            }
            TokenKind::Null => {
                self.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Null, span)))
            }
            TokenKind::Undefined => {
                self.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Undefined, span)))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Ident(name), span)))
            }
            TokenKind::Signal(_) => self.parse_signal_reference(),
            TokenKind::Action(_) => self.parse_action_call(),
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_object(),
            _ => Err(self.unexpected_here("an expression")),
        }
    }

    /// `@name(args)`. The parentheses are required; a bare `@name` is not
    /// an expression.
    fn parse_action_call(&mut self) -> Result<ExprId, ParseError> {
        let TokenKind::Action(name) = self.current_kind() else {
            return Err(self.unexpected_here("an action call"));
        };
        let head = self.current_span();
        self.advance();
        self.expect(TokenKind::LParen)
            .map_err(|e| e.with_context(ErrorContext::ActionCall))?;
        let args = self.parse_arguments(ErrorContext::ActionCall)?;
        self.expect(TokenKind::RParen)
            .map_err(|e| e.with_context(ErrorContext::ActionCall))?;
        let span = head.merge(self.previous_span());
        let args = self.arena.alloc_elements(args);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::ActionCall { name, args }, span)))
    }

    /// `( expression )`, kept as a node so printing preserves the grouping.
    fn parse_parenthesized(&mut self) -> Result<ExprId, ParseError> {
        let open = self.current_span();
        self.advance();
        let inner = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let span = open.merge(self.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Paren(inner), span)))
    }

    /// `[a, b, ...rest]`, trailing comma allowed.
    fn parse_array(&mut self) -> Result<ExprId, ParseError> {
        let open = self.current_span();
        self.advance();
        let config = SeriesConfig::comma(TokenKind::RBracket, ErrorContext::ArrayLiteral);
        let elements = self.series(&config, Self::parse_element)?;
        self.expect(TokenKind::RBracket)
            .map_err(|e| e.with_context(ErrorContext::ArrayLiteral))?;
        let span = open.merge(self.previous_span());
        let elements = self.arena.alloc_elements(elements);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Array(elements), span)))
    }

    /// `{key: v, 'str': v, [expr]: v, ...spread}`, trailing comma allowed.
    fn parse_object(&mut self) -> Result<ExprId, ParseError> {
        let open = self.current_span();
        self.advance();
        let config = SeriesConfig::comma(TokenKind::RBrace, ErrorContext::ObjectLiteral);
        let properties = self.series(&config, Self::parse_property)?;
        self.expect(TokenKind::RBrace)
            .map_err(|e| e.with_context(ErrorContext::ObjectLiteral))?;
        let span = open.merge(self.previous_span());
        let properties = self.arena.alloc_properties(properties);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Object(properties), span)))
    }

    /// One object property: `key: value` in any key spelling, or a spread.
    ///
    /// Keywords work as bare keys (`{in: 1, typeof: 2}`): a name
    /// immediately before `:` can only be a key, so the reserved meaning
    /// never applies there.
    fn parse_property(&mut self) -> Result<Property, ParseError> {
        if self.check(TokenKind::DotDotDot) {
            let dots = self.current_span();
            self.advance();
            let expr = self.parse_expr()?;
            let span = dots.merge(self.arena.get_expr(expr).span);
            return Ok(Property::Spread { expr, span });
        }
        let key_span = self.current_span();
        let key = match self.current_kind() {
            TokenKind::Ident(name) => {
                self.advance();
                PropertyKey::Ident(name)
            }
            TokenKind::String(name) => {
                self.advance();
                PropertyKey::String(name)
            }
            TokenKind::LBracket => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RBracket)
                    .map_err(|e| e.with_context(ErrorContext::ObjectLiteral))?;
                PropertyKey::Computed(expr)
            }
            kind => {
                if let Some(text) = kind.keyword_str() {
                    let name = self.interner().intern(text);
                    self.advance();
                    PropertyKey::Ident(name)
                } else {
                    return Err(self
                        .unexpected_here("a property key")
                        .with_context(ErrorContext::ObjectLiteral));
                }
            }
        };
        self.expect(TokenKind::Colon)?;
        let value = self.parse_expr()?;
        let span = key_span.merge(self.arena.get_expr(value).span);
        Ok(Property::Entry { key, value, span })
    }
}
