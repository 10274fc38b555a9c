//! Token cursor: position tracking and primitive stream operations.
//!
//! The cursor owns nothing; it walks a lexed [`TokenList`] and hands out
//! tokens, spans, and source slices. The final token is always `Eof`, so
//! every read is in bounds and `advance` saturates there.

use dsx_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList, source: &'a str, interner: &'a StringInterner) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            source,
            interner,
            pos: 0,
        }
    }

    pub(crate) fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position, for snapshot and restore.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position {pos} out of bounds");
        self.pos = pos;
    }

    pub(crate) fn current(&self) -> &Token {
        debug_assert!(self.pos < self.tokens.len());
        &self.tokens[self.pos]
    }

    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token. [`Span::DUMMY`] before any
    /// token has been consumed.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos == 0 {
            Span::DUMMY
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token is exactly `kind`. Only meaningful for
    /// payload-free kinds.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Kind of the token `n` places ahead, `Eof` past the end.
    pub(crate) fn peek_kind_at(&self, n: usize) -> TokenKind {
        match self.tokens.get(self.pos + n) {
            Some(token) => token.kind,
            None => TokenKind::Eof,
        }
    }

    /// Span of the token after the current one. At the end of the stream
    /// this is the `Eof` span itself.
    pub(crate) fn peek_next_span(&self) -> Span {
        match self.tokens.get(self.pos + 1) {
            Some(token) => token.span,
            None => self.current_span(),
        }
    }

    /// Consumes and returns the current token. Saturates at `Eof`.
    pub(crate) fn advance(&mut self) -> &Token {
        debug_assert!(self.pos < self.tokens.len());
        let token = &self.tokens[self.pos];
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is `kind`, or fails.
    #[inline]
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(*self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        self.unexpected_here(kind.display_name())
    }

    /// Consumes an identifier or keyword as a member name.
    ///
    /// `$obj.in` and `{}.typeof` are legal: after `.` the input can only be
    /// a name, so keywords lose their reserved meaning there.
    pub(crate) fn expect_member_name(&mut self) -> Result<Name, ParseError> {
        let kind = self.current_kind();
        if let TokenKind::Ident(name) = kind {
            self.advance();
            return Ok(name);
        }
        if let Some(text) = kind.keyword_str() {
            let name = self.interner.intern(text);
            self.advance();
            return Ok(name);
        }
        Err(self.unexpected_here("a property name"))
    }

    /// The source text under `span`.
    pub(crate) fn slice(&self, span: Span) -> &'a str {
        &self.source[span.to_range()]
    }

    /// Builds the error for "the current token is not what the grammar
    /// wants here".
    ///
    /// This is the single place lexer-signalled tokens turn into their own
    /// error kinds: an unterminated string becomes
    /// [`ParseErrorKind::UnterminatedLiteral`] regardless of what was
    /// expected, since the real problem is the missing close quote.
    pub(crate) fn unexpected_here(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        if matches!(token.kind, TokenKind::UnterminatedString) {
            let delimiter = self
                .slice(token.span)
                .chars()
                .next()
                .unwrap_or('\'');
            return ParseError::new(
                ParseErrorKind::UnterminatedLiteral { delimiter },
                token.span,
            );
        }
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: token.kind.display_name(),
                expected,
            },
            token.span,
        )
    }
}

#[cfg(test)]
mod tests {
    use dsx_lexer::lex;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn advance_saturates_at_eof() {
        let interner = StringInterner::new();
        let tokens = lex("1 + 2", &interner);
        let mut cursor = Cursor::new(&tokens, "1 + 2", &interner);

        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        let pos = cursor.position();
        cursor.advance();
        assert_eq!(cursor.position(), pos);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn expect_reports_expected_and_found() {
        let interner = StringInterner::new();
        let tokens = lex("]", &interner);
        let mut cursor = Cursor::new(&tokens, "]", &interner);

        let Err(error) = cursor.expect(TokenKind::RParen) else {
            panic!("expect must fail on a mismatched token");
        };
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "]",
                expected: ")",
            }
        );
        assert_eq!(error.span, Span::new(0, 1));
        // A failed expect consumes nothing.
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn unexpected_here_reports_unterminated_strings_as_such() {
        let interner = StringInterner::new();
        let source = "\"abc";
        let tokens = lex(source, &interner);
        let cursor = Cursor::new(&tokens, source, &interner);

        let error = cursor.unexpected_here("an expression");
        assert_eq!(
            error.kind,
            ParseErrorKind::UnterminatedLiteral { delimiter: '"' }
        );
        assert_eq!(error.span.start, 0);
    }

    #[test]
    fn member_names_accept_keywords() {
        let interner = StringInterner::new();
        let tokens = lex("instanceof", &interner);
        let mut cursor = Cursor::new(&tokens, "instanceof", &interner);

        let Ok(name) = cursor.expect_member_name() else {
            panic!("keywords are valid member names");
        };
        assert_eq!(interner.lookup(name), "instanceof");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn previous_span_is_dummy_at_the_start() {
        let interner = StringInterner::new();
        let tokens = lex("x", &interner);
        let mut cursor = Cursor::new(&tokens, "x", &interner);

        assert_eq!(cursor.previous_span(), Span::DUMMY);
        cursor.advance();
        assert_eq!(cursor.previous_span(), Span::new(0, 1));
    }
}
