//! Parser for Datastar attribute expressions and attribute names.
//!
//! Two input forms share this crate:
//!
//! - **Attribute values**: statements joined by `,` or `;`, each an
//!   expression or an assignment (`$open = !$open, @post('/save')`).
//! - **Attribute names**: `data-<plugin>` with optional `__modifier` and
//!   `:key` suffixes (`data-on:click__debounce.500ms`).
//!
//! [`parse`] dispatches between them on the `data-` prefix;
//! [`parse_statements`] and [`parse_attribute`] take one form directly.
//! Value parsing is single-pass recursive descent over the token list from
//! `dsx_lexer`, with every choice decided by the current token except
//! assignment detection, which speculates over one access chain and rewinds
//! (see the `snapshot` module). Name parsing never tokenizes; it is a byte
//! scanner over the raw attribute text.
//!
//! Errors are terminal: the first failure aborts the parse with a
//! [`ParseError`]. There is no recovery and no partial tree.

mod cursor;
mod error;
mod grammar;
mod series;
mod snapshot;
mod stack;

#[cfg(test)]
mod tests;

pub use error::{ErrorContext, ParseError, ParseErrorKind};

use dsx_ir::{ExprArena, Name, Root, Span, StringInterner, Token, TokenKind, TokenList};

use crate::cursor::Cursor;

/// A successful parse: the root plus the arena its nodes live in.
#[derive(Debug)]
pub struct ParseOutput {
    pub root: Root,
    pub arena: ExprArena,
}

/// Parses either form of attribute input.
///
/// Input starting with `data-` is an attribute name; everything else is an
/// attribute value. The dispatch is a commitment, not a fallback: input
/// that begins `data-` never reparses as an expression when it fails as an
/// attribute name.
pub fn parse(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    if source.starts_with("data-") {
        parse_attribute(source, interner)
    } else {
        parse_statements(source, interner)
    }
}

/// Parses an attribute value: one or more statements joined by `,` or `;`.
pub fn parse_statements(
    source: &str,
    interner: &StringInterner,
) -> Result<ParseOutput, ParseError> {
    let tokens = dsx_lexer::lex(source, interner);
    let mut parser = Parser::new(&tokens, source, interner);
    let root = parser.parse_root()?;
    Ok(ParseOutput {
        root,
        arena: parser.arena,
    })
}

/// Parses an attribute name of the form
/// `data-<plugin>[__modifier][:key[__modifier]]`.
pub fn parse_attribute(
    source: &str,
    interner: &StringInterner,
) -> Result<ParseOutput, ParseError> {
    let attribute = grammar::attr::parse_attribute_name(source, interner)?;
    Ok(ParseOutput {
        root: Root::Attribute(attribute),
        arena: ExprArena::new(),
    })
}

/// Recursive-descent parser over a lexed token list.
///
/// Grammar productions live in [`grammar`] as `impl Parser` blocks; this
/// type holds the state they share. The methods below are thin delegations
/// to the cursor so productions read as grammar rather than plumbing.
pub(crate) struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        tokens: &'a TokenList,
        source: &'a str,
        interner: &'a StringInterner,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source, interner),
            arena: ExprArena::new(),
        }
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind_at(n)
    }

    #[inline]
    fn peek_next_span(&self) -> Span {
        self.cursor.peek_next_span()
    }

    #[inline]
    fn advance(&mut self) -> &Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_member_name(&mut self) -> Result<Name, ParseError> {
        self.cursor.expect_member_name()
    }

    #[inline]
    fn slice(&self, span: Span) -> &'a str {
        self.cursor.slice(span)
    }

    #[inline]
    fn unexpected_here(&self, expected: &'static str) -> ParseError {
        self.cursor.unexpected_here(expected)
    }
}
