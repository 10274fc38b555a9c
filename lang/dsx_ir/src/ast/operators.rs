//! Operator vocabulary and the binding-power table.
//!
//! Binary operator precedence lives here as data, not as a cascade of
//! per-level parsing functions: each [`BinaryOp`] knows its binding power
//! and associativity, and the parser runs one precedence-climbing loop over
//! that table. Adding an operator means adding a variant and two match arms.

use crate::token::TokenKind;

/// Operator associativity, consulted by the precedence-climbing loop.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// Binary operators, from loosest (`??`) to tightest (`**`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `??`
    NullishCoalesce,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `===`
    StrictEq,
    /// `!==`
    StrictNotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `in`
    In,
    /// `instanceof`
    Instanceof,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UnsignedShr,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `**`
    Pow,
}

impl BinaryOp {
    /// Every binary operator, in table order.
    pub const ALL: [BinaryOp; 25] = [
        BinaryOp::NullishCoalesce,
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::BitAnd,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::StrictEq,
        BinaryOp::StrictNotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::In,
        BinaryOp::Instanceof,
        BinaryOp::Shl,
        BinaryOp::Shr,
        BinaryOp::UnsignedShr,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Pow,
    ];

    /// Source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::NullishCoalesce => "??",
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::In => "in",
            BinaryOp::Instanceof => "instanceof",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UnsignedShr => ">>>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
        }
    }

    /// Binding power of the operator. Higher binds tighter.
    ///
    /// Levels 1 (arrow), 2 (ternary), 15 (prefix), 16 (postfix), and 17
    /// (call/member) are handled structurally by the parser; only the infix
    /// levels live in this table.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::NullishCoalesce => 3,
            BinaryOp::Or => 4,
            BinaryOp::And => 5,
            BinaryOp::BitOr => 6,
            BinaryOp::BitXor => 7,
            BinaryOp::BitAnd => 8,
            BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::StrictEq | BinaryOp::StrictNotEq => 9,
            BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq
            | BinaryOp::In
            | BinaryOp::Instanceof => 10,
            BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UnsignedShr => 11,
            BinaryOp::Add | BinaryOp::Sub => 12,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 13,
            BinaryOp::Pow => 14,
        }
    }

    /// Associativity of the operator.
    ///
    /// Exponentiation is the one right-associative infix operator, matching
    /// JavaScript: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
    #[must_use]
    pub const fn assoc(self) -> Assoc {
        match self {
            BinaryOp::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    /// Maps an infix token to its operator, or `None` if the token cannot
    /// start an infix operation.
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::QuestionQuestion => BinaryOp::NullishCoalesce,
            TokenKind::PipePipe => BinaryOp::Or,
            TokenKind::AmpAmp => BinaryOp::And,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::EqEqEq => BinaryOp::StrictEq,
            TokenKind::NotEqEq => BinaryOp::StrictNotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::In => BinaryOp::In,
            TokenKind::Instanceof => BinaryOp::Instanceof,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Shr => BinaryOp::Shr,
            TokenKind::UnsignedShr => BinaryOp::UnsignedShr,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Rem,
            TokenKind::StarStar => BinaryOp::Pow,
            _ => return None,
        };
        Some(op)
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `typeof`
    Typeof,
    /// `void`
    Void,
    /// `delete`
    Delete,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Not,
        UnaryOp::BitNot,
        UnaryOp::Neg,
        UnaryOp::Plus,
        UnaryOp::Typeof,
        UnaryOp::Void,
        UnaryOp::Delete,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Typeof => "typeof",
            UnaryOp::Void => "void",
            UnaryOp::Delete => "delete",
        }
    }

    /// Whether the operator is spelled as a keyword and needs a space
    /// before its operand when printed.
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, UnaryOp::Typeof | UnaryOp::Void | UnaryOp::Delete)
    }

    /// Maps a token to the prefix operator it introduces.
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<UnaryOp> {
        let op = match kind {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Typeof => UnaryOp::Typeof,
            TokenKind::Void => UnaryOp::Void,
            TokenKind::Delete => UnaryOp::Delete,
            _ => return None,
        };
        Some(op)
    }
}

/// Postfix operators. `++` and `--` exist only in this position; the
/// language has no prefix increment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PostfixOp {
    /// `++`
    Inc,
    /// `--`
    Dec,
}

impl PostfixOp {
    pub const ALL: [PostfixOp; 2] = [PostfixOp::Inc, PostfixOp::Dec];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            PostfixOp::Inc => "++",
            PostfixOp::Dec => "--",
        }
    }

    /// Maps a token to the postfix operator it spells.
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<PostfixOp> {
        match kind {
            TokenKind::PlusPlus => Some(PostfixOp::Inc),
            TokenKind::MinusMinus => Some(PostfixOp::Dec),
            _ => None,
        }
    }
}

/// Assignment operators: plain `=` plus the fifteen compound forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
    /// `%=`
    Rem,
    /// `**=`
    Pow,
    /// `<<=`
    Shl,
    /// `>>=`
    Shr,
    /// `>>>=`
    UnsignedShr,
    /// `&=`
    BitAnd,
    /// `^=`
    BitXor,
    /// `|=`
    BitOr,
    /// `&&=`
    And,
    /// `||=`
    Or,
    /// `??=`
    Nullish,
}

impl AssignOp {
    pub const ALL: [AssignOp; 16] = [
        AssignOp::Assign,
        AssignOp::Add,
        AssignOp::Sub,
        AssignOp::Mul,
        AssignOp::Div,
        AssignOp::Rem,
        AssignOp::Pow,
        AssignOp::Shl,
        AssignOp::Shr,
        AssignOp::UnsignedShr,
        AssignOp::BitAnd,
        AssignOp::BitXor,
        AssignOp::BitOr,
        AssignOp::And,
        AssignOp::Or,
        AssignOp::Nullish,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::Pow => "**=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UnsignedShr => ">>>=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitXor => "^=",
            AssignOp::BitOr => "|=",
            AssignOp::And => "&&=",
            AssignOp::Or => "||=",
            AssignOp::Nullish => "??=",
        }
    }

    /// Maps a token to the assignment operator it spells.
    #[must_use]
    pub fn from_token(kind: TokenKind) -> Option<AssignOp> {
        let op = match kind {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::PlusEq => AssignOp::Add,
            TokenKind::MinusEq => AssignOp::Sub,
            TokenKind::StarEq => AssignOp::Mul,
            TokenKind::SlashEq => AssignOp::Div,
            TokenKind::PercentEq => AssignOp::Rem,
            TokenKind::StarStarEq => AssignOp::Pow,
            TokenKind::ShlEq => AssignOp::Shl,
            TokenKind::ShrEq => AssignOp::Shr,
            TokenKind::UnsignedShrEq => AssignOp::UnsignedShr,
            TokenKind::AmpEq => AssignOp::BitAnd,
            TokenKind::CaretEq => AssignOp::BitXor,
            TokenKind::PipeEq => AssignOp::BitOr,
            TokenKind::AmpAmpEq => AssignOp::And,
            TokenKind::PipePipeEq => AssignOp::Or,
            TokenKind::QuestionQuestionEq => AssignOp::Nullish,
            _ => return None,
        };
        Some(op)
    }
}
