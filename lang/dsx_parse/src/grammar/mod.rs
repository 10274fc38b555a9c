//! Grammar productions, one module per syntactic area.
//!
//! - `stmt`: the parse root, statement sequences, assignment detection
//! - `expr`: expressions, from arrows and ternaries down to literals
//! - `attr`: the `data-*` attribute-name recognizer

pub(crate) mod attr;
pub(crate) mod expr;
pub(crate) mod stmt;
