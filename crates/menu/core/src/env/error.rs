//! Collaborator access errors.

use crate::error::{ErrorSeverity, MenuError};

/// Errors raised when a collaborator is missing or refuses a request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// CommandSink is not available in the environment.
    #[error("CommandSink not available")]
    CommandsNotAvailable,

    /// SessionStore is not available in the environment.
    #[error("SessionStore not available")]
    SessionsNotAvailable,

    /// ItemFactory is not available in the environment.
    #[error("ItemFactory not available")]
    ItemsNotAvailable,

    /// ServerOracle is not available in the environment.
    #[error("ServerOracle not available")]
    ServerNotAvailable,

    /// The item factory does not know this identifier.
    #[error("unknown item '{0}'")]
    UnknownItem(String),

    /// The session store has no menu with this identifier.
    #[error("menu '{0}' not found")]
    MenuNotFound(String),

    /// The player is no longer connected.
    #[error("player is offline")]
    PlayerOffline,

    /// A collaborator rejected the request.
    #[error("{collaborator} rejected request: {reason}")]
    Rejected {
        collaborator: &'static str,
        reason: String,
    },
}

impl OracleError {
    /// Shorthand for [`OracleError::Rejected`].
    pub fn rejected(collaborator: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            collaborator,
            reason: reason.into(),
        }
    }
}

impl MenuError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Unknown identifiers come from menu configuration
            UnknownItem(_) | MenuNotFound(_) => ErrorSeverity::Configuration,

            CommandsNotAvailable | SessionsNotAvailable | ItemsNotAvailable
            | ServerNotAvailable | PlayerOffline | Rejected { .. } => {
                ErrorSeverity::Collaborator
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CommandsNotAvailable => "ORACLE_COMMANDS_NOT_AVAILABLE",
            SessionsNotAvailable => "ORACLE_SESSIONS_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            ServerNotAvailable => "ORACLE_SERVER_NOT_AVAILABLE",
            UnknownItem(_) => "ORACLE_UNKNOWN_ITEM",
            MenuNotFound(_) => "ORACLE_MENU_NOT_FOUND",
            PlayerOffline => "ORACLE_PLAYER_OFFLINE",
            Rejected { .. } => "ORACLE_REJECTED",
        }
    }
}
