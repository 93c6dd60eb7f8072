//! Action construction and execution errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, MenuError};

use super::ActionKind;

// ============================================================================
// Execution Errors
// ============================================================================

/// Errors raised by a single action while executing.
///
/// Every variant is caught at the action boundary: the executor logs it and
/// moves on to the next action in the sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// A collaborator was missing or refused the request.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The action reads or writes session state but the trigger has none.
    #[error("{kind} requires an open menu session")]
    NoSession { kind: ActionKind },

    /// A command action resolved to empty text.
    #[error("command is empty after placeholder resolution")]
    EmptyCommand,

    /// A value that must name something resolved to empty text.
    #[error("{kind} value is empty after placeholder resolution")]
    EmptyValue { kind: ActionKind },

    /// The player does not hold enough of the item to take.
    #[error("need {required} x {item}, player holds {available}")]
    InsufficientItems {
        item: String,
        required: u32,
        available: u32,
    },

    /// Nested sequences exceed the configured depth.
    #[error("sequence nesting exceeds depth {limit}")]
    DepthExceeded { limit: usize },
}

impl MenuError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            Oracle(e) => e.severity(),
            NoSession { .. } | EmptyCommand | EmptyValue { .. } | DepthExceeded { .. } => {
                ErrorSeverity::Configuration
            }
            InsufficientItems { .. } => ErrorSeverity::Collaborator,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            Oracle(e) => e.error_code(),
            NoSession { .. } => "ACTION_NO_SESSION",
            EmptyCommand => "ACTION_EMPTY_COMMAND",
            EmptyValue { .. } => "ACTION_EMPTY_VALUE",
            InsufficientItems { .. } => "ACTION_INSUFFICIENT_ITEMS",
            DepthExceeded { .. } => "ACTION_DEPTH_EXCEEDED",
        }
    }
}

// ============================================================================
// Construction Errors
// ============================================================================

/// Errors raised while building actions from configuration text.
///
/// Only structural problems fail construction. Malformed values (bad numbers,
/// bad coordinates) degrade to defaults instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    /// No constructor is registered under this type string.
    #[error("unknown action type '{0}'")]
    UnknownType(String),

    /// The action type requires a value and none was given.
    #[error("{kind} requires a value")]
    MissingValue { kind: ActionKind },

    /// A line had neither `type: value` nor `[type] value` shape.
    #[error("malformed action line '{0}'")]
    MalformedLine(String),
}

impl MenuError for ActionParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionParseError::UnknownType(_) => "ACTION_PARSE_UNKNOWN_TYPE",
            ActionParseError::MissingValue { .. } => "ACTION_PARSE_MISSING_VALUE",
            ActionParseError::MalformedLine(_) => "ACTION_PARSE_MALFORMED_LINE",
        }
    }
}
