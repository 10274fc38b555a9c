//! Lexer for Datastar attribute expressions, built on logos.
//!
//! Produces a [`TokenList`] with names already interned. Strings are
//! unescaped here, numbers parsed here; the parser never re-reads literal
//! text.
//!
//! Two lexical quirks worth knowing about:
//!
//! - `$name` signal heads admit hyphens (`$fetch-user` is one token), and
//!   maximal munch applies, so `$a-b` is a single signal while `$a - b` is
//!   a subtraction.
//! - An opening quote with no matching close lexes as one
//!   [`TokenKind::UnterminatedString`] token covering the rest of the valid
//!   string body. This falls out of longest-match: the terminated rule wins
//!   whenever it can, and the unterminated rule catches what remains.

use logos::Logos;

use dsx_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Raw token from logos, before interning and literal conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
enum RawToken {
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("undefined")]
    Undefined,
    #[token("typeof")]
    Typeof,
    #[token("void")]
    Void,
    #[token("delete")]
    Delete,
    #[token("in")]
    In,
    #[token("instanceof")]
    Instanceof,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("...")]
    DotDotDot,
    #[token(".")]
    Dot,
    #[token("?.[")]
    QuestionDotBracket,
    #[token("?.")]
    QuestionDot,
    #[token("??=")]
    QuestionQuestionEq,
    #[token("??")]
    QuestionQuestion,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=>")]
    Arrow,

    #[token("===")]
    EqEqEq,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!==")]
    NotEqEq,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("<<=")]
    ShlEq,
    #[token("<<")]
    Shl,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">>>=")]
    UnsignedShrEq,
    #[token(">>>")]
    UnsignedShr,
    #[token(">>=")]
    ShrEq,
    #[token(">>")]
    Shr,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusEq,
    #[token("+")]
    Plus,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusEq,
    #[token("-")]
    Minus,
    #[token("**=")]
    StarStarEq,
    #[token("**")]
    StarStar,
    #[token("*=")]
    StarEq,
    #[token("*")]
    Star,
    #[token("/=")]
    SlashEq,
    #[token("/")]
    Slash,
    #[token("%=")]
    PercentEq,
    #[token("%")]
    Percent,
    #[token("&&=")]
    AmpAmpEq,
    #[token("&&")]
    AmpAmp,
    #[token("&=")]
    AmpEq,
    #[token("&")]
    Amp,
    #[token("||=")]
    PipePipeEq,
    #[token("||")]
    PipePipe,
    #[token("|=")]
    PipeEq,
    #[token("|")]
    Pipe,
    #[token("^=")]
    CaretEq,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,

    // Number: decimal digits, optional fraction, optional exponent. No
    // leading-dot or hex forms.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Strings in three quote styles. The body admits any character except
    // the delimiter and backslash (newlines included), or one of the
    // closed set of escapes; an unknown escape fails the rule.
    #[regex(r#""([^"\\]|\\([\\'"nrtbf]|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[0-7]{1,3}))*""#)]
    #[regex(r#"'([^'\\]|\\([\\'"nrtbf]|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[0-7]{1,3}))*'"#)]
    #[regex(r#"`([^`\\]|\\([\\'"nrtbf]|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[0-7]{1,3}))*`"#)]
    String,

    // Same bodies without the closing delimiter.
    #[regex(r#""([^"\\]|\\([\\'"nrtbf]|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[0-7]{1,3}))*"#)]
    #[regex(r#"'([^'\\]|\\([\\'"nrtbf]|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[0-7]{1,3}))*"#)]
    #[regex(r#"`([^`\\]|\\([\\'"nrtbf]|u[0-9a-fA-F]{4}|x[0-9a-fA-F]{2}|[0-7]{1,3}))*"#)]
    UnterminatedString,

    // `$head` including any hyphens.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_-]*")]
    Signal,

    // `@name`; action names are plain identifiers, no hyphens.
    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    Action,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lexes one attribute value into a token list ending in `Eof`.
///
/// Never fails: unrecognized bytes become [`TokenKind::Error`] tokens and
/// unterminated strings become [`TokenKind::UnterminatedString`], both
/// reported by the parser.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw, logos.slice(), interner);
                result.push(Token::new(kind, span));
            }
            Err(()) => {
                result.push(Token::new(TokenKind::Error, span));
            }
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("attribute value exceeds {} bytes", u32::MAX));
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    result
}

/// Converts a raw token to a [`TokenKind`], interning names and resolving
/// literal payloads.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Number(value) => TokenKind::Number(value.to_bits()),
        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            if body.contains('\\') {
                TokenKind::String(interner.intern_owned(unescape(body)))
            } else {
                TokenKind::String(interner.intern(body))
            }
        }
        RawToken::UnterminatedString => TokenKind::UnterminatedString,
        RawToken::Signal => TokenKind::Signal(interner.intern(&slice[1..])),
        RawToken::Action => TokenKind::Action(interner.intern(&slice[1..])),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,
        RawToken::Undefined => TokenKind::Undefined,
        RawToken::Typeof => TokenKind::Typeof,
        RawToken::Void => TokenKind::Void,
        RawToken::Delete => TokenKind::Delete,
        RawToken::In => TokenKind::In,
        RawToken::Instanceof => TokenKind::Instanceof,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::DotDotDot => TokenKind::DotDotDot,
        RawToken::Dot => TokenKind::Dot,
        RawToken::QuestionDotBracket => TokenKind::QuestionDotBracket,
        RawToken::QuestionDot => TokenKind::QuestionDot,
        RawToken::QuestionQuestionEq => TokenKind::QuestionQuestionEq,
        RawToken::QuestionQuestion => TokenKind::QuestionQuestion,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Arrow => TokenKind::Arrow,

        RawToken::EqEqEq => TokenKind::EqEqEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEqEq => TokenKind::NotEqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::ShlEq => TokenKind::ShlEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::UnsignedShrEq => TokenKind::UnsignedShrEq,
        RawToken::UnsignedShr => TokenKind::UnsignedShr,
        RawToken::ShrEq => TokenKind::ShrEq,
        RawToken::Shr => TokenKind::Shr,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::Minus => TokenKind::Minus,
        RawToken::StarStarEq => TokenKind::StarStarEq,
        RawToken::StarStar => TokenKind::StarStar,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::Star => TokenKind::Star,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::Slash => TokenKind::Slash,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::Percent => TokenKind::Percent,
        RawToken::AmpAmpEq => TokenKind::AmpAmpEq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::PipePipeEq => TokenKind::PipePipeEq,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
    }
}

/// Resolves the escape sequences in a string body.
///
/// The string rules admit exactly: the single-character escapes
/// `\\ \' \" \n \r \t \b \f`, `\uXXXX`, `\xXX`, and one to three octal
/// digits. `\u` values in the surrogate range have no char form and become
/// U+FFFD.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('u') => {
                let code = take_hex(&mut chars, 4);
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            Some('x') => {
                let code = take_hex(&mut chars, 2);
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            Some(d @ '0'..='7') => {
                let mut code = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    let Some(digit) = chars.peek().and_then(|c| c.to_digit(8)) else {
                        break;
                    };
                    chars.next();
                    code = code * 8 + digit;
                }
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            }
            // The string rules admit no other escape.
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Reads up to `n` hex digits. The string rules guarantee exactly `n` are
/// present.
fn take_hex(chars: &mut core::iter::Peekable<core::str::Chars<'_>>, n: usize) -> u32 {
    let mut value = 0;
    for _ in 0..n {
        let Some(digit) = chars.next().and_then(|c| c.to_digit(16)) else {
            break;
        };
        value = value * 16 + digit;
    }
    value
}
