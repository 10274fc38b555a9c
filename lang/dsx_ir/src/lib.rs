//! Core types for Datastar attribute expressions.
//!
//! This crate holds everything the lexer, parser, and printer share:
//!
//! - **Flat AST**: expressions are `Copy` structs indexed by `ExprId`,
//!   stored in an [`ExprArena`] with side tables for list payloads.
//! - **Interned names**: every identifier-like string becomes a 4-byte
//!   [`Name`] via the sharded [`StringInterner`].
//! - **Tokens**: the token vocabulary and [`TokenList`] the lexer produces.
//! - **Operator table**: binding powers and associativity as data, consumed
//!   by the parser's single precedence-climbing loop.

/// Asserts at compile time that a type has the expected size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::core::mem::size_of::<$ty>()];
    };
}

pub mod arena;
pub mod ast;
pub mod ids;
pub mod interner;
pub mod name;
pub mod span;
pub mod token;

pub use arena::ExprArena;
pub use ast::{
    AssignOp, Assoc, Attribute, AttributeDetail, BinaryOp, Element, ElementRange, Expr, ExprKind,
    Modifier, Param, ParamRange, Plugin, PostfixOp, Property, PropertyKey, PropertyRange, Root,
    SignalLink, SignalLinkRange, Stmt, StmtKind, StmtRange, UnaryOp,
};
pub use ids::{ExprId, StmtId};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::{Name, NUM_SHARDS};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
