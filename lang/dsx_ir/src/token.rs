//! Token types shared between the lexer and the parser.

use core::fmt;

use crate::name::Name;
use crate::span::Span;

/// A single lexed token: kind plus source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Every token of the expression language.
///
/// Literal payloads are pre-resolved: numbers carry the `f64` bit pattern of
/// their value (bits rather than `f64` so the kind stays `Eq` and `Hash`),
/// strings carry the interned unescaped contents, and `$name` / `@name`
/// sigils carry the interned name without the sigil.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Literals and names
    /// Numeric literal, stored as `f64` bits.
    Number(u64),
    /// String literal contents after escape processing.
    String(Name),
    /// Plain identifier.
    Ident(Name),
    /// `$name`: signal reference head. Hyphens are part of the name.
    Signal(Name),
    /// `@name`: action call head.
    Action(Name),

    // Keywords
    True,
    False,
    Null,
    Undefined,
    Typeof,
    Void,
    Delete,
    In,
    Instanceof,

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Shl,
    Shr,
    UnsignedShr,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    Tilde,
    Bang,
    QuestionQuestion,
    PlusPlus,
    MinusMinus,

    // Ternary and access chains
    Question,
    Colon,
    Dot,
    /// `?.`, optional member access.
    QuestionDot,
    /// `?.[`, optional computed access. One token: whitespace between
    /// `?.` and `[` does not form it.
    QuestionDotBracket,
    /// `=>`
    Arrow,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    StarStarEq,
    SlashEq,
    PercentEq,
    ShlEq,
    ShrEq,
    UnsignedShrEq,
    AmpEq,
    CaretEq,
    PipeEq,
    AmpAmpEq,
    PipePipeEq,
    QuestionQuestionEq,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    /// `...`, the spread marker.
    DotDotDot,

    // Lexer-signalled errors and the end marker
    /// A quote was opened but never closed. Carries no payload; the span
    /// covers the opening quote through end of input.
    UnterminatedString,
    /// A byte sequence no lexer rule matched.
    Error,
    /// End of input. Always the final token of a [`TokenList`].
    Eof,
}

impl TokenKind {
    /// Human-readable name for diagnostics: keyword and operator tokens show
    /// their spelling, payload tokens show their category.
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Signal(_) => "signal",
            TokenKind::Action(_) => "action",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Undefined => "undefined",
            TokenKind::Typeof => "typeof",
            TokenKind::Void => "void",
            TokenKind::Delete => "delete",
            TokenKind::In => "in",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::StarStar => "**",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::EqEqEq => "===",
            TokenKind::NotEqEq => "!==",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::UnsignedShr => ">>>",
            TokenKind::Amp => "&",
            TokenKind::AmpAmp => "&&",
            TokenKind::Pipe => "|",
            TokenKind::PipePipe => "||",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Bang => "!",
            TokenKind::QuestionQuestion => "??",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::QuestionDot => "?.",
            TokenKind::QuestionDotBracket => "?.[",
            TokenKind::Arrow => "=>",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::StarStarEq => "**=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::ShrEq => ">>=",
            TokenKind::UnsignedShrEq => ">>>=",
            TokenKind::AmpEq => "&=",
            TokenKind::CaretEq => "^=",
            TokenKind::PipeEq => "|=",
            TokenKind::AmpAmpEq => "&&=",
            TokenKind::PipePipeEq => "||=",
            TokenKind::QuestionQuestionEq => "??=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::DotDotDot => "...",
            TokenKind::UnterminatedString => "unterminated string",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }

    /// The source spelling if this is a keyword token.
    ///
    /// Keywords double as member and property names (`$obj.in`,
    /// `{ typeof: 1 }`), where the parser needs the spelling back as text.
    #[inline]
    #[must_use]
    pub fn keyword_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            TokenKind::Undefined => Some("undefined"),
            TokenKind::Typeof => Some("typeof"),
            TokenKind::Void => Some("void"),
            TokenKind::Delete => Some("delete"),
            TokenKind::In => Some("in"),
            TokenKind::Instanceof => Some("instanceof"),
            _ => None,
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(bits) => write!(f, "Number({})", f64::from_bits(*bits)),
            TokenKind::String(name) => write!(f, "String({name:?})"),
            TokenKind::Ident(name) => write!(f, "Ident({name:?})"),
            TokenKind::Signal(name) => write!(f, "Signal({name:?})"),
            TokenKind::Action(name) => write!(f, "Action({name:?})"),
            _ => write!(f, "{}", self.display_name()),
        }
    }
}

/// The lexer's output: a token vector whose final entry is always
/// [`TokenKind::Eof`], so the parser can peek without bounds checks.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl core::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn token_debug_shows_kind_and_span() {
        let token = Token::new(TokenKind::Plus, Span::new(4, 5));
        assert_eq!(format!("{token:?}"), "+ @ 4..5");
    }

    #[test]
    fn number_debug_shows_value() {
        let kind = TokenKind::Number(2.5f64.to_bits());
        assert_eq!(format!("{kind:?}"), "Number(2.5)");
    }

    #[test]
    fn display_names_for_payload_tokens_are_categories() {
        assert_eq!(TokenKind::Ident(Name::EMPTY).display_name(), "identifier");
        assert_eq!(TokenKind::Signal(Name::EMPTY).display_name(), "signal");
        assert_eq!(TokenKind::Eof.display_name(), "end of input");
    }

    #[test]
    fn display_names_for_operators_are_spellings() {
        assert_eq!(TokenKind::QuestionQuestionEq.display_name(), "??=");
        assert_eq!(TokenKind::UnsignedShr.display_name(), ">>>");
        assert_eq!(TokenKind::QuestionDotBracket.display_name(), "?.[");
    }

    #[test]
    fn keyword_str_covers_keywords_only() {
        assert_eq!(TokenKind::Instanceof.keyword_str(), Some("instanceof"));
        assert_eq!(TokenKind::In.keyword_str(), Some("in"));
        assert_eq!(TokenKind::Undefined.keyword_str(), Some("undefined"));
        assert_eq!(TokenKind::Ident(Name::EMPTY).keyword_str(), None);
        assert_eq!(TokenKind::Plus.keyword_str(), None);
    }

    #[test]
    fn token_list_indexing() {
        let mut list = TokenList::new();
        list.push(Token::new(TokenKind::LParen, Span::new(0, 1)));
        list.push(Token::new(TokenKind::Eof, Span::point(1)));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].kind, TokenKind::LParen);
        let Some(last) = list.last() else {
            panic!("list is not empty");
        };
        assert_eq!(last.kind, TokenKind::Eof);
    }
}
