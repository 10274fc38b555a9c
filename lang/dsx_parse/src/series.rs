//! Separated-series parsing.
//!
//! Argument lists, array elements, object properties, and arrow parameters
//! are all `item (, item)*` with per-construct rules for trailing commas.
//! [`SeriesConfig`] captures the shape; [`Parser::series`] runs it.

use dsx_ir::TokenKind;

use crate::error::{ErrorContext, ParseError, ParseErrorKind};
use crate::Parser;

/// Whether a separator may sit directly before the terminator.
///
/// Arrays and objects take trailing commas, argument lists and arrow
/// parameters do not.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum TrailingSeparator {
    Allowed,
    Forbidden,
}

/// Shape of one separated list.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SeriesConfig {
    pub(crate) separator: TokenKind,
    pub(crate) terminator: TokenKind,
    pub(crate) trailing: TrailingSeparator,
    /// Attached to every error raised inside the series.
    pub(crate) context: ErrorContext,
}

impl SeriesConfig {
    /// Comma-separated series, trailing comma allowed.
    pub(crate) fn comma(terminator: TokenKind, context: ErrorContext) -> Self {
        SeriesConfig {
            separator: TokenKind::Comma,
            terminator,
            trailing: TrailingSeparator::Allowed,
            context,
        }
    }

    pub(crate) fn trailing(mut self, trailing: TrailingSeparator) -> Self {
        self.trailing = trailing;
        self
    }
}

impl Parser<'_> {
    /// Parses `item (separator item)* separator?` up to the terminator.
    ///
    /// The terminator itself is not consumed; the caller expects it next and
    /// folds its span into the enclosing node. A separator where an item
    /// should start (`[1, , 3]`) is an [`ParseErrorKind::EmptyElement`], as
    /// is a trailing separator where [`TrailingSeparator::Forbidden`].
    pub(crate) fn series<T>(
        &mut self,
        config: &SeriesConfig,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.check(config.terminator) {
            return Ok(items);
        }
        loop {
            if self.cursor.check(config.separator) {
                return Err(ParseError::new(
                    ParseErrorKind::EmptyElement,
                    self.cursor.current_span(),
                )
                .with_context(config.context));
            }
            items.push(parse_item(self)?);
            if !self.cursor.check(config.separator) {
                break;
            }
            self.cursor.advance();
            if self.cursor.check(config.terminator) {
                match config.trailing {
                    TrailingSeparator::Allowed => break,
                    TrailingSeparator::Forbidden => {
                        return Err(ParseError::new(
                            ParseErrorKind::EmptyElement,
                            self.cursor.previous_span(),
                        )
                        .with_context(config.context));
                    }
                }
            }
        }
        Ok(items)
    }
}
