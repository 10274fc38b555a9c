//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `parser`: Expression-level tests for literals, operators, signal and
//!   member chains, collections, arrows, actions, and the errors each
//!   construct reports.
//! - `statements`: Statement-level tests for assignments, assignment
//!   targets, and `,`/`;` sequences.
