//! The flat AST.
//!
//! Nodes reference children through [`ExprId`](crate::ids::ExprId) indices
//! and range types instead of boxing, so a parsed tree is a handful of
//! contiguous vectors owned by the arena.

pub mod attr;
pub mod collections;
pub mod expr;
pub mod operators;
pub mod ranges;
pub mod stmt;

pub use attr::{Attribute, AttributeDetail, Modifier, Plugin};
pub use collections::{Element, Param, Property, PropertyKey, SignalLink};
pub use expr::{Expr, ExprKind};
pub use operators::{AssignOp, Assoc, BinaryOp, PostfixOp, UnaryOp};
pub use ranges::{ElementRange, ParamRange, PropertyRange, SignalLinkRange, StmtRange};
pub use stmt::{Root, Stmt, StmtKind};
