use core::fmt;

use super::OracleError;
use crate::state::PlayerId;

/// Who a dispatched command runs as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandSource {
    /// The player, with their own permissions.
    Player(PlayerId),
    /// The server console.
    Console,
    /// The player, temporarily elevated to operator permission level.
    Operator(PlayerId),
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSource::Player(id) => write!(f, "player:{id}"),
            CommandSource::Console => write!(f, "console"),
            CommandSource::Operator(id) => write!(f, "operator:{id}"),
        }
    }
}

/// Host command dispatcher.
///
/// Dispatch is fire-and-forget from the engine's point of view: the sink must
/// return within the current tick.
pub trait CommandSink: Send + Sync {
    /// Runs `command` (without a leading slash) as `source`.
    fn perform(&self, source: CommandSource, command: &str) -> Result<(), OracleError>;
}
