//! Canonical printer for parsed attribute input.
//!
//! [`format_root`] renders a parse result back to text in one normal form:
//! single spaces around operators, `, ` between statements and list items,
//! single-quoted strings. The parser keeps explicit parentheses as nodes,
//! so grouping prints exactly as written and re-parsing the output yields
//! a structurally identical tree.
//!
//! ```
//! use dsx_ir::StringInterner;
//!
//! let interner = StringInterner::new();
//! let parsed = dsx_parse::parse("$open=!$open;@post('/save')", &interner)?;
//! let canonical = dsx_fmt::format_root(parsed.root, &parsed.arena, &interner);
//! assert_eq!(canonical, "$open = !$open, @post('/save')");
//! # Ok::<(), dsx_parse::ParseError>(())
//! ```

mod printer;

#[cfg(test)]
mod tests;

pub use printer::{format_expr, format_root};
