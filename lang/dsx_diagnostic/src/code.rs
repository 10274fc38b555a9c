use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: lexical errors
/// - E1xxx: syntax errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Character outside the expression grammar
    E0002,
    /// Unexpected token
    E1001,
    /// Assignment to a non-assignable expression
    E1002,
    /// Empty element in an array literal
    E1003,
    /// Sequence-binding conflict (reserved)
    E1004,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    /// Check if this is a lexical error (E0xxx range).
    pub fn is_lexical(self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E0001.as_str(), "E0001");
    }

    #[test]
    fn lexical_split() {
        assert!(ErrorCode::E0001.is_lexical());
        assert!(ErrorCode::E0002.is_lexical());
        assert!(!ErrorCode::E1002.is_lexical());
    }
}
