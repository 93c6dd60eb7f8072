//! Collaborator ("oracle") traits the engine runs against.
//!
//! Everything with a side effect outside this crate goes through one of these
//! narrow surfaces: the player handle, the command sink, the session store, the
//! item factory, the server view and the host tick source. The [`MenuEnv`]
//! aggregate bundles borrowed references so actions can reach everything they
//! need without a global plugin instance.
mod commands;
mod error;
mod items;
mod player;
mod server;
mod sessions;
mod ticks;

pub use commands::{CommandSink, CommandSource};
pub use error::OracleError;
pub use items::ItemFactory;
pub use player::{PlayerHandle, TitleTimings};
pub use server::{MemoryUsage, ServerOracle};
pub use sessions::SessionStore;
pub use ticks::TickSource;

use crate::config::ActionDefaults;
use crate::placeholder::PlaceholderManager;

/// Borrowed view over the collaborators and shared managers for one call.
///
/// The placeholder manager and action defaults are always present. External
/// collaborators are optional so that partial hosts (and tests) can run the
/// actions they support; an action that needs a missing collaborator fails with
/// [`OracleError`] and the sequence moves on.
#[derive(Clone, Copy)]
pub struct MenuEnv<'a> {
    placeholders: &'a PlaceholderManager,
    defaults: &'a ActionDefaults,
    commands: Option<&'a dyn CommandSink>,
    sessions: Option<&'a dyn SessionStore>,
    items: Option<&'a dyn ItemFactory>,
    server: Option<&'a dyn ServerOracle>,
}

impl<'a> MenuEnv<'a> {
    pub fn new(placeholders: &'a PlaceholderManager, defaults: &'a ActionDefaults) -> Self {
        Self {
            placeholders,
            defaults,
            commands: None,
            sessions: None,
            items: None,
            server: None,
        }
    }

    pub fn with_commands(mut self, commands: &'a dyn CommandSink) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn with_sessions(mut self, sessions: &'a dyn SessionStore) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn with_items(mut self, items: &'a dyn ItemFactory) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_server(mut self, server: &'a dyn ServerOracle) -> Self {
        self.server = Some(server);
        self
    }

    pub fn placeholders(&self) -> &'a PlaceholderManager {
        self.placeholders
    }

    pub fn defaults(&self) -> &'a ActionDefaults {
        self.defaults
    }

    /// Returns the command sink, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CommandsNotAvailable` if no command sink was provided.
    pub fn commands(&self) -> Result<&'a dyn CommandSink, OracleError> {
        self.commands.ok_or(OracleError::CommandsNotAvailable)
    }

    /// Returns the session store, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SessionsNotAvailable` if no session store was provided.
    pub fn sessions(&self) -> Result<&'a dyn SessionStore, OracleError> {
        self.sessions.ok_or(OracleError::SessionsNotAvailable)
    }

    /// Returns the item factory, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item factory was provided.
    pub fn items(&self) -> Result<&'a dyn ItemFactory, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the server view, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ServerNotAvailable` if no server oracle was provided.
    pub fn server(&self) -> Result<&'a dyn ServerOracle, OracleError> {
        self.server.ok_or(OracleError::ServerNotAvailable)
    }
}
