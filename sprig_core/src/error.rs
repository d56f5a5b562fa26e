use thiserror::Error;

/// The ways a token (or a token stream) can fail to parse against a grammar.
///
/// Every variant carries the index of the offending token where one exists, so callers can point at it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token at `index` does not satisfy any candidate component.
    #[error("Token '{token}' (index {index}) does not match the grammar.")]
    NoMatch {
        /// Position of the token in the input.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// The input ended where a token was needed.
    #[error("No more tokens to match against.")]
    TokensExhausted,

    /// No open node of an incremental parse accepts the token at `index`.
    #[error("Token '{token}' (index {index}) cannot attach to any open node.")]
    ContextStuck {
        /// Position of the token in the input.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// A strict parse matched the root, but left tokens over, starting from `index`.
    #[error("Token '{token}' (index {index}) was not consumed by the grammar.")]
    Unconsumed {
        /// Position of the first un-consumed token.
        index: usize,
        /// The first un-consumed token.
        token: String,
    },
}

impl ParseError {
    /// The index of the token this error points at, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::NoMatch { index, .. }
            | ParseError::ContextStuck { index, .. }
            | ParseError::Unconsumed { index, .. } => Some(*index),
            ParseError::TokensExhausted => None,
        }
    }
}

/// A help formatter width is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidthError {
    /// The width was below the minimum for its column.
    #[error("The {column} width must be at least {minimum} (provided={provided}).")]
    TooNarrow {
        /// The column being sized.
        column: &'static str,
        /// The smallest allowed width.
        minimum: usize,
        /// The width that was provided.
        provided: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParseError::NoMatch { index: 2, token: "x".to_string() }, Some(2))]
    #[case(ParseError::ContextStuck { index: 0, token: "x".to_string() }, Some(0))]
    #[case(ParseError::Unconsumed { index: 5, token: "x".to_string() }, Some(5))]
    #[case(ParseError::TokensExhausted, None)]
    fn parse_error_index(#[case] error: ParseError, #[case] expected: Option<usize>) {
        assert_eq!(error.index(), expected);
    }

    #[test]
    fn parse_error_display() {
        let error = ParseError::NoMatch {
            index: 1,
            token: "--wrong".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Token '--wrong' (index 1) does not match the grammar."
        );
    }
}
