//! Parser snapshots for bounded speculation.
//!
//! The one place the grammar cannot decide from tokens alone is the start of
//! a statement: `$user.name = 1` is an assignment, `$user.name == 1` is an
//! expression, and the difference sits past an arbitrarily long access
//! chain. The statement parser takes a snapshot, tries the assignment
//! target, and rewinds if no assignment operator follows.

use crate::Parser;

/// A restorable parser position.
///
/// Only the cursor position is captured. Arena allocations made by an
/// abandoned speculative parse are not rolled back; those nodes stay in the
/// arena unreachable from the final root and are dropped with it. The
/// speculation window is a single access chain, so the waste is a handful
/// of nodes at most.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ParserSnapshot {
    cursor_pos: usize,
}

impl Parser<'_> {
    /// Captures the current position for a later [`Parser::restore`].
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
        }
    }

    /// Rewinds to a snapshot taken earlier on this parser.
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
    }
}

#[cfg(test)]
mod tests {
    use dsx_ir::StringInterner;
    use dsx_lexer::lex;
    use pretty_assertions::assert_eq;

    use crate::Parser;

    #[test]
    fn restore_rewinds_the_cursor() {
        let interner = StringInterner::new();
        let source = "$count + 1";
        let tokens = lex(source, &interner);
        let mut parser = Parser::new(&tokens, source, &interner);

        let snapshot = parser.snapshot();
        parser.cursor.advance();
        parser.cursor.advance();
        assert_eq!(parser.cursor.position(), 2);

        parser.restore(snapshot);
        assert_eq!(parser.cursor.position(), 0);
    }

    #[test]
    fn snapshots_nest() {
        let interner = StringInterner::new();
        let source = "a b c";
        let tokens = lex(source, &interner);
        let mut parser = Parser::new(&tokens, source, &interner);

        let outer = parser.snapshot();
        parser.cursor.advance();
        let inner = parser.snapshot();
        parser.cursor.advance();

        parser.restore(inner);
        assert_eq!(parser.cursor.position(), 1);
        parser.restore(outer);
        assert_eq!(parser.cursor.position(), 0);
    }
}
