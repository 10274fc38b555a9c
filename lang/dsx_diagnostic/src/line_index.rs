//! Line/column mapping for byte offsets.
//!
//! Attribute values are usually one line, but string literals may contain
//! raw newlines, so spans can land past line 1. [`LineIndex`] pre-computes
//! line starts once and answers lookups by binary search.

/// Byte offsets of every line start in a source string.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    // offsets[0] is always 0; each later entry is the byte after a '\n'.
    offsets: Vec<u32>,
}

impl LineIndex {
    /// Build the index with a single scan over the source.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                let next = u32::try_from(i + 1).unwrap_or(u32::MAX);
                offsets.push(next);
            }
        }
        LineIndex { offsets }
    }

    /// Get the 1-based line number containing a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) for a byte offset.
    ///
    /// The column counts characters, not bytes, from the line start.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get(line as usize - 1)
            .copied()
            .unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let col_chars = source[line_start..offset].chars().count();
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
