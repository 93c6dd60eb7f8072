//! Math evaluation errors.

use crate::error::{ErrorSeverity, MenuError};

/// Errors raised while parsing or evaluating an arithmetic expression.
///
/// These never escape the math provider; any of them renders as `"0"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Expression was empty after whitespace removal.
    #[error("empty expression")]
    Empty,

    /// A character that no grammar rule accepts.
    #[error("unexpected character '{found}' at {position}")]
    UnexpectedChar { found: char, position: usize },

    /// Input ended where an operand was required (`2+`).
    #[error("expected operand at {position}")]
    ExpectedOperand { position: usize },

    /// Opening parenthesis without a matching close.
    #[error("unmatched parenthesis opened at {position}")]
    UnmatchedParen { position: usize },

    /// A digit run that is not a valid decimal number (`1.2.3`).
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Parentheses or unary minus nested past the parser's limit.
    #[error("expression nested deeper than {limit} at {position}")]
    TooDeep { limit: usize, position: usize },

    /// Function name not recognized.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// Function called with the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {found}")]
    Arity {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },
}

impl MenuError for MathError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        use MathError::*;
        match self {
            Empty => "MATH_EMPTY",
            UnexpectedChar { .. } => "MATH_UNEXPECTED_CHAR",
            ExpectedOperand { .. } => "MATH_EXPECTED_OPERAND",
            UnmatchedParen { .. } => "MATH_UNMATCHED_PAREN",
            InvalidNumber(_) => "MATH_INVALID_NUMBER",
            TooDeep { .. } => "MATH_TOO_DEEP",
            UnknownFunction(_) => "MATH_UNKNOWN_FUNCTION",
            Arity { .. } => "MATH_ARITY",
        }
    }
}
