//! Shared ownership of the host collaborators.
//!
//! [`CollaboratorSet`] keeps `Arc`s of everything the host provides and lends
//! them out as a borrowed [`MenuEnv`] for the duration of one engine call.
use std::sync::Arc;

use menu_core::{
    ActionDefaults, CommandSink, ItemFactory, MenuEnv, PlaceholderManager, ServerOracle,
    SessionStore, TickSource,
};

/// Collaborators bound to one engine.
///
/// The tick source and server view are required because the built-in
/// placeholder providers read them. The rest are optional; actions that need
/// a missing collaborator fail individually.
#[derive(Clone)]
pub struct CollaboratorSet {
    pub(crate) ticks: Arc<dyn TickSource>,
    pub(crate) server: Arc<dyn ServerOracle>,
    pub(crate) commands: Option<Arc<dyn CommandSink>>,
    pub(crate) sessions: Option<Arc<dyn SessionStore>>,
    pub(crate) items: Option<Arc<dyn ItemFactory>>,
}

impl CollaboratorSet {
    pub fn new(ticks: Arc<dyn TickSource>, server: Arc<dyn ServerOracle>) -> Self {
        Self {
            ticks,
            server,
            commands: None,
            sessions: None,
            items: None,
        }
    }

    pub fn with_commands(mut self, commands: Arc<dyn CommandSink>) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn with_sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn with_items(mut self, items: Arc<dyn ItemFactory>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn ticks(&self) -> &Arc<dyn TickSource> {
        &self.ticks
    }

    pub fn server(&self) -> &Arc<dyn ServerOracle> {
        &self.server
    }

    pub fn sessions(&self) -> Option<&Arc<dyn SessionStore>> {
        self.sessions.as_ref()
    }

    /// Borrowed view for one engine call.
    pub fn as_menu_env<'a>(
        &'a self,
        placeholders: &'a PlaceholderManager,
        defaults: &'a ActionDefaults,
    ) -> MenuEnv<'a> {
        let mut env = MenuEnv::new(placeholders, defaults).with_server(self.server.as_ref());

        if let Some(commands) = &self.commands {
            env = env.with_commands(commands.as_ref());
        }
        if let Some(sessions) = &self.sessions {
            env = env.with_sessions(sessions.as_ref());
        }
        if let Some(items) = &self.items {
            env = env.with_items(items.as_ref());
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ManualTicks, MemoryServer, MemorySessionStore};
    use menu_core::OracleError;

    #[test]
    fn env_lends_only_bound_collaborators() {
        let placeholders = PlaceholderManager::new();
        let defaults = ActionDefaults::default();
        let set = CollaboratorSet::new(
            Arc::new(ManualTicks::new()),
            Arc::new(MemoryServer::new(50)),
        )
        .with_sessions(Arc::new(MemorySessionStore::new()));

        let env = set.as_menu_env(&placeholders, &defaults);
        assert_eq!(env.server().map(|server| server.max_players()).ok(), Some(50));
        assert!(env.sessions().is_ok());
        assert_eq!(env.commands().err(), Some(OracleError::CommandsNotAvailable));
        assert_eq!(env.items().err(), Some(OracleError::ItemsNotAvailable));
    }
}
