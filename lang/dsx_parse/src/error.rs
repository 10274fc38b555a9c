//! Parse error types.
//!
//! Errors here are terminal: the first failure aborts the whole parse and no
//! partial tree is surfaced. A [`ParseError`] therefore describes exactly one
//! problem: a closed [`ParseErrorKind`], the span it occurred at, and an
//! optional [`ErrorContext`] naming the construct being parsed when it broke.

use core::fmt;

use dsx_diagnostic::{Diagnostic, ErrorCode};
use dsx_ir::{Span, TokenKind};

/// The closed set of ways a parse can fail.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    /// The grammar has no rule for what was found here.
    ///
    /// `found` and `expected` are short human-readable descriptions: a token
    /// spelling, a category like "an expression", or, for attribute names,
    /// a description of the offending character run.
    UnexpectedToken {
        found: &'static str,
        expected: &'static str,
    },
    /// A string literal was opened but never closed.
    UnterminatedLiteral { delimiter: char },
    /// The left-hand side of an assignment is not a signal reference,
    /// member access, or computed member access.
    InvalidAssignmentTarget,
    /// A list position held a separator or terminator where an expression
    /// was required (`[1, , 3]`, `@f(a,)`).
    EmptyElement,
    /// Reserved: a statement sequence that cannot be resolved
    /// deterministically. The grammar as implemented resolves every sequence
    /// (sequence binds loosest), so nothing constructs this today.
    AmbiguousSequenceConflict,
}

/// Context describing what was being parsed when an error occurred.
///
/// Rendered as "while parsing X" on the diagnostic label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// Parsing an array literal.
    ArrayLiteral,
    /// Parsing an object literal.
    ObjectLiteral,
    /// Parsing the arguments of an `@action(...)` call.
    ActionCall,
    /// Parsing the arguments of a call expression.
    FunctionCall,
    /// Parsing arrow function parameters.
    ArrowParams,
    /// Parsing a computed index (`[expr]` / `?.[expr]`).
    IndexExpression,
    /// Parsing a `$signal` access chain.
    SignalChain,
    /// Parsing a `,`/`;`-joined statement sequence.
    Sequence,
    /// Parsing a `data-*` attribute name.
    AttributeName,
}

impl ErrorContext {
    /// A phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::ArrayLiteral => "an array literal",
            Self::ObjectLiteral => "an object literal",
            Self::ActionCall => "an action call",
            Self::FunctionCall => "a call argument list",
            Self::ArrowParams => "arrow function parameters",
            Self::IndexExpression => "an index expression",
            Self::SignalChain => "a signal access chain",
            Self::Sequence => "a statement sequence",
            Self::AttributeName => "an attribute name",
        }
    }
}

/// A parse failure: kind, location, and optionally what was being parsed.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    /// Attach the construct being parsed when the error occurred.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// The diagnostic code for this error.
    ///
    /// Lexical failures map to `E0xxx`, syntactic ones to `E1xxx`. The
    /// lexer signals foreign characters through a dedicated token whose
    /// display name is the only source of that `found` text, so the match
    /// below is exact.
    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::UnterminatedLiteral { .. } => ErrorCode::E0001,
            ParseErrorKind::UnexpectedToken { found, .. }
                if *found == TokenKind::Error.display_name() =>
            {
                ErrorCode::E0002
            }
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1002,
            ParseErrorKind::EmptyElement => ErrorCode::E1003,
            ParseErrorKind::AmbiguousSequenceConflict => ErrorCode::E1004,
        }
    }

    /// One-line description of the failure.
    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, expected } => {
                format!("expected {expected}, found {found}")
            }
            ParseErrorKind::UnterminatedLiteral { .. } => "unterminated string literal".to_string(),
            ParseErrorKind::InvalidAssignmentTarget => "cannot assign to this expression".to_string(),
            ParseErrorKind::EmptyElement => "empty element".to_string(),
            ParseErrorKind::AmbiguousSequenceConflict => {
                "statement sequence is ambiguous".to_string()
            }
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.message());
        let diagnostic = match self.context {
            Some(context) => diagnostic.with_label(
                self.span,
                format!("while parsing {}", context.description()),
            ),
            None => diagnostic.with_label(self.span, "here"),
        };
        match &self.kind {
            ParseErrorKind::UnterminatedLiteral { delimiter } => diagnostic.with_note(format!(
                "the string opens with `{delimiter}` and runs to the end of the input"
            )),
            ParseErrorKind::InvalidAssignmentTarget => diagnostic.with_note(
                "assignment targets are signal references, member accesses, and index accesses",
            ),
            ParseErrorKind::EmptyElement => {
                diagnostic.with_note("separators must sit between expressions")
            }
            _ => diagnostic,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] at {}", self.message(), self.code(), self.span)
    }
}

impl std::error::Error for ParseError {}
