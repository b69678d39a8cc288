//! This mod provides error types used by this crate.
//!
//! Parsers never return errors: a parser that does not match yields an empty
//! [`ResultSet`](crate::ResultSet). The types here are returned by the helpers
//! that pick one answer out of a result set.

/// Reasons a single answer could not be selected from a result set.
#[derive(thiserror::Error, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum SelectError {
    /// The parser produced no candidates.
    #[error("no candidate parse")]
    NoMatch,
    /// Candidates exist but none of them consumed the whole input.
    #[error("input not fully consumed, at least {remaining} byte(s) left")]
    Incomplete {
        /// Leftover length of the candidate that got furthest.
        remaining: usize,
    },
    /// More than one candidate where exactly one was required.
    #[error("ambiguous parse, {0} candidates")]
    Ambiguous(usize),
}

/// `Result` type used by the result set selectors.
pub type Result<T> = std::result::Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::SelectError;

    #[test]
    fn test_display() {
        assert_eq!(SelectError::NoMatch.to_string(), "no candidate parse");
        assert_eq!(
            SelectError::Incomplete { remaining: 2 }.to_string(),
            "input not fully consumed, at least 2 byte(s) left"
        );
        assert_eq!(
            SelectError::Ambiguous(3).to_string(),
            "ambiguous parse, 3 candidates"
        );
    }
}
