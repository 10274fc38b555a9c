//! Byte spans into attribute source text.
//!
//! Every token and AST node carries a [`Span`] locating it in the original
//! input. Spans are half-open byte ranges (`start..end`) stored as `u32`,
//! which keeps them `Copy` and 8 bytes wide. Attribute values are short
//! strings, so `u32` offsets leave plenty of headroom.

use core::fmt;

/// Error produced when a `usize` range does not fit in a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// The range start exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// The range end exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTooLarge(start) => {
                write!(f, "span start {start} does not fit in u32")
            }
            Self::EndTooLarge(end) => write!(f, "span end {end} does not fit in u32"),
        }
    }
}

impl std::error::Error for SpanError {}

/// A half-open byte range `start..end` into the source text.
///
/// `start == end` encodes an empty span, used for end-of-input markers and
/// zero-width error positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span for synthesized nodes with no source position.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Creates a span from byte offsets.
    ///
    /// Debug-asserts `start <= end`; a reversed span is always a caller bug.
    #[inline]
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Span { start, end }
    }

    /// Converts a `usize` range, failing if either offset overflows `u32`.
    #[inline]
    pub fn try_from_range(range: core::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span::new(start, end))
    }

    /// Converts a `usize` range, panicking on offsets past `u32::MAX`.
    ///
    /// Lexer and parser positions are bounded by the input length, which for
    /// attribute values is far below 4 GiB, so the panic path is unreachable
    /// in practice.
    #[inline]
    #[must_use]
    pub fn from_range(range: core::ops::Range<usize>) -> Self {
        Span::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
    }

    /// A zero-width span at `offset`.
    #[inline]
    #[must_use]
    pub fn point(offset: u32) -> Self {
        Span { start: offset, end: offset }
    }

    /// Length of the span in bytes.
    #[inline]
    #[must_use]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside the half-open range.
    #[inline]
    #[must_use]
    pub fn contains(self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether `other` lies entirely within this span.
    #[inline]
    #[must_use]
    pub fn contains_span(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Self {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extends the end of the span to `end`, keeping the start.
    #[inline]
    #[must_use]
    pub fn extend_to(self, end: u32) -> Self {
        Span::new(self.start, end.max(self.end))
    }

    /// Converts back to a `usize` range for slicing source text.
    #[inline]
    #[must_use]
    pub fn to_range(self) -> core::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

mod size_asserts {
    use super::Span;

    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_and_len() {
        let span = Span::new(3, 9);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 9);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
    }

    #[test]
    fn point_is_empty() {
        let span = Span::point(7);
        assert_eq!(span.start, 7);
        assert_eq!(span.end, 7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn try_from_range_ok() {
        let Ok(span) = Span::try_from_range(2..5) else {
            panic!("range 2..5 must convert");
        };
        assert_eq!(span, Span::new(2, 5));
    }

    #[test]
    fn try_from_range_rejects_oversized_start() {
        let huge = usize::try_from(u64::from(u32::MAX) + 1);
        let Ok(huge) = huge else {
            // 32-bit targets cannot even represent the overflow.
            return;
        };
        let result = Span::try_from_range(huge..huge + 1);
        assert_eq!(result, Err(SpanError::StartTooLarge(huge)));
    }

    #[test]
    fn contains_is_half_open() {
        let span = Span::new(2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn contains_span_includes_boundaries() {
        let outer = Span::new(0, 10);
        assert!(outer.contains_span(Span::new(0, 10)));
        assert!(outer.contains_span(Span::new(3, 7)));
        assert!(!outer.contains_span(Span::new(3, 11)));
    }

    #[test]
    fn merge_covers_both() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 5);
        assert_eq!(a.merge(b), Span::new(1, 6));
        assert_eq!(b.merge(a), Span::new(1, 6));
    }

    #[test]
    fn extend_to_never_shrinks() {
        let span = Span::new(2, 8);
        assert_eq!(span.extend_to(12), Span::new(2, 12));
        assert_eq!(span.extend_to(5), Span::new(2, 8));
    }

    #[test]
    fn to_range_round_trips() {
        let span = Span::new(3, 9);
        assert_eq!(span.to_range(), 3..9);
        assert_eq!(Span::from_range(span.to_range()), span);
    }

    #[test]
    fn debug_and_display_agree() {
        let span = Span::new(1, 4);
        assert_eq!(format!("{span:?}"), "1..4");
        assert_eq!(format!("{span}"), "1..4");
    }
}
