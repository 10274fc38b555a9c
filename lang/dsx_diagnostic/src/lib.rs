//! Diagnostic types and terminal rendering for Datastar expression errors.
//!
//! Errors are terminal: the parser stops at the first problem, so a
//! diagnostic here is always "the" error for its input. What this crate
//! provides:
//!
//! - Error codes for searchability ([`ErrorCode`])
//! - A builder-style [`Diagnostic`] with labeled spans, notes, and
//!   suggestions
//! - A line/column index over the source ([`LineIndex`])
//! - A terminal emitter with optional ANSI colors
//!   ([`emitter::TerminalEmitter`])

mod code;
mod diagnostic;
pub mod emitter;
mod line_index;

pub use code::ErrorCode;
pub use diagnostic::{Diagnostic, Label, Severity};
pub use line_index::LineIndex;
