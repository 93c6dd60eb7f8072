use core::fmt;
use std::sync::Arc;

use crate::env::PlayerHandle;
use crate::placeholder::PlaceholderContext;
use crate::state::{MenuSession, SessionId};

/// Per-invocation context: who triggered the actions, from which menu, with
/// which arguments.
///
/// Cloning is cheap; a suspended sequence keeps its own clone until it is
/// resumed or cancelled.
#[derive(Clone)]
pub struct ActionContext {
    player: Arc<dyn PlayerHandle>,
    session: Option<Arc<MenuSession>>,
    args: Arc<[String]>,
}

impl ActionContext {
    pub fn new(player: Arc<dyn PlayerHandle>) -> Self {
        Self {
            player,
            session: None,
            args: Arc::from(Vec::new()),
        }
    }

    pub fn with_session(mut self, session: Arc<MenuSession>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn player(&self) -> &dyn PlayerHandle {
        self.player.as_ref()
    }

    pub fn player_arc(&self) -> &Arc<dyn PlayerHandle> {
        &self.player
    }

    pub fn session(&self) -> Option<&Arc<MenuSession>> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id())
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolution view over the same player, session and arguments.
    pub fn placeholder_context(&self) -> PlaceholderContext<'_> {
        PlaceholderContext::new(
            Some(self.player.as_ref()),
            self.session.as_deref(),
            &self.args,
        )
    }
}

impl fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("player", &self.player.id())
            .field("session", &self.session_id())
            .field("args", &self.args)
            .finish()
    }
}
