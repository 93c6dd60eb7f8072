//! Long-lived engine tying placeholders, the action registry and the
//! executor to one set of host collaborators.
//!
//! Hosts build one [`MenuEngine`] at startup and route three kinds of events
//! into it: triggers (`execute`), host ticks (`on_tick`) and teardown
//! (`on_session_closed`, `on_player_quit`).

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, info};

use menu_core::{
    Action, ActionContext, ActionParseError, ActionRegistry, CommandSink, ItemFactory, MenuEnv,
    PlaceholderManager, PlaceholderProvider, PlayerId, ServerOracle, SessionId, SessionStore,
    TickSource,
};

use crate::api::{Result, RuntimeError};
use crate::config::EngineConfig;
use crate::executor::{ActionExecutor, SequenceId, SequenceOutcome, TickReport};
use crate::oracle::CollaboratorSet;

/// Placeholder manager, action registry and scheduler bound to one host.
pub struct MenuEngine {
    config: EngineConfig,
    placeholders: PlaceholderManager,
    registry: ActionRegistry,
    collaborators: CollaboratorSet,
    executor: ActionExecutor,
}

impl MenuEngine {
    pub fn builder() -> MenuEngineBuilder {
        MenuEngineBuilder::new()
    }

    /// Builds actions from configuration lines through the registry.
    pub fn parse_actions<'a, I>(&self, lines: I) -> std::result::Result<Vec<Action>, ActionParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.registry.parse_lines(lines)
    }

    /// Runs `actions` for a trigger at the current host tick.
    pub fn execute(&mut self, actions: impl Into<Arc<[Action]>>, ctx: ActionContext) -> SequenceOutcome {
        let now = self.collaborators.ticks.current_tick();
        let env = self
            .collaborators
            .as_menu_env(&self.placeholders, &self.config.actions);
        self.executor.execute_all(actions, ctx, &env, now)
    }

    /// Host tick callback: resumes sequences whose delay has elapsed.
    pub fn on_tick(&mut self) -> TickReport {
        let now = self.collaborators.ticks.current_tick();
        let env = self
            .collaborators
            .as_menu_env(&self.placeholders, &self.config.actions);
        self.executor.tick(&env, now)
    }

    /// Drops sequences of a session the host just closed.
    pub fn on_session_closed(&mut self, session: SessionId) -> Vec<SequenceId> {
        self.executor.cancel_session(session)
    }

    /// Drops sequences of a player who disconnected.
    pub fn on_player_quit(&mut self, player: PlayerId) -> Vec<SequenceId> {
        self.executor.cancel_player(player)
    }

    /// Resolves placeholders in `text` for `ctx`, e.g. for menu item lore.
    pub fn resolve<'t>(&self, text: &'t str, ctx: &ActionContext) -> Cow<'t, str> {
        self.placeholders.parse(text, &ctx.placeholder_context())
    }

    /// Borrowed collaborator view, for hosts that execute single actions.
    pub fn env(&self) -> MenuEnv<'_> {
        self.collaborators
            .as_menu_env(&self.placeholders, &self.config.actions)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn placeholders(&self) -> &PlaceholderManager {
        &self.placeholders
    }

    pub fn placeholders_mut(&mut self) -> &mut PlaceholderManager {
        &mut self.placeholders
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    pub fn executor(&self) -> &ActionExecutor {
        &self.executor
    }

    pub fn collaborators(&self) -> &CollaboratorSet {
        &self.collaborators
    }
}

/// Builder for [`MenuEngine`].
pub struct MenuEngineBuilder {
    config: EngineConfig,
    ticks: Option<Arc<dyn TickSource>>,
    server: Option<Arc<dyn ServerOracle>>,
    commands: Option<Arc<dyn CommandSink>>,
    sessions: Option<Arc<dyn SessionStore>>,
    items: Option<Arc<dyn ItemFactory>>,
    registry: Option<ActionRegistry>,
    providers: Vec<Arc<dyn PlaceholderProvider>>,
}

impl MenuEngineBuilder {
    fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            ticks: None,
            server: None,
            commands: None,
            sessions: None,
            items: None,
            registry: None,
            providers: Vec::new(),
        }
    }

    /// Override engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required host tick source
    pub fn ticks(mut self, ticks: Arc<dyn TickSource>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// Set required server view
    pub fn server(mut self, server: Arc<dyn ServerOracle>) -> Self {
        self.server = Some(server);
        self
    }

    pub fn commands(mut self, commands: Arc<dyn CommandSink>) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn items(mut self, items: Arc<dyn ItemFactory>) -> Self {
        self.items = Some(items);
        self
    }

    /// Replace the built-in action registry.
    pub fn registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Register an extra placeholder provider after the built-in ones.
    pub fn provider(mut self, provider: Arc<dyn PlaceholderProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn build(self) -> Result<MenuEngine> {
        let ticks = self.ticks.ok_or(RuntimeError::MissingCollaborator("tick source"))?;
        let server = self.server.ok_or(RuntimeError::MissingCollaborator("server"))?;

        let mut placeholders = PlaceholderManager::with_builtins(
            &self.config.placeholders,
            Arc::clone(&server),
            Arc::clone(&ticks),
            self.config.tps_sample_window,
        );
        for provider in self.providers {
            debug!(target: "menu::engine", provider = provider.identifier(), "registering placeholder provider");
            placeholders.register_arc(provider);
        }

        let mut collaborators = CollaboratorSet::new(ticks, server);
        if let Some(commands) = self.commands {
            collaborators = collaborators.with_commands(commands);
        }
        if let Some(sessions) = self.sessions {
            collaborators = collaborators.with_sessions(sessions);
        }
        if let Some(items) = self.items {
            collaborators = collaborators.with_items(items);
        }

        let registry = self.registry.unwrap_or_else(ActionRegistry::with_builtins);
        let executor = ActionExecutor::new(self.config.max_sequence_depth);

        info!(
            target: "menu::engine",
            providers = placeholders.len(),
            overlaps = placeholders.overlaps().len(),
            marker = %placeholders.marker(),
            max_sequence_depth = executor.max_depth(),
            "menu engine ready"
        );

        Ok(MenuEngine {
            config: self.config,
            placeholders,
            registry,
            collaborators,
            executor,
        })
    }
}
