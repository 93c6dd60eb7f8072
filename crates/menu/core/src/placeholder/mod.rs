//! Placeholder resolution pipeline.
//!
//! Configuration text such as `Hello %player_name%, TPS %server_tps%` is
//! resolved at execution time. The [`PlaceholderManager`] tokenizes the template
//! and hands each token to registered [`PlaceholderProvider`]s in order; the
//! first provider that recognizes it wins.
//!
//! # Module Structure
//!
//! - `manager`: tokenizer, provider dispatch and overlap detection
//! - `providers`: built-in provider families (player, server, session, date, math, args)
//! - `math`: recursive-descent arithmetic evaluator used by the math provider
//! - `format`: shared number and duration rendering

mod format;
mod manager;
pub mod math;
pub mod providers;

pub use format::{format_duration, format_number};
pub use manager::{PlaceholderManager, TokenOverlap};
pub use providers::{
    ArgumentsProvider, Clock, DateTimeProvider, MathProvider, PlayerProvider, ServerProvider,
    SessionProvider,
};

use crate::env::PlayerHandle;
use crate::state::MenuSession;

/// Read-only view used while resolving tokens.
///
/// Structurally mirrors the addressable parts of an action context, but kept
/// separate so resolvers depend only on what they read.
#[derive(Clone, Copy)]
pub struct PlaceholderContext<'a> {
    player: Option<&'a dyn PlayerHandle>,
    session: Option<&'a MenuSession>,
    args: &'a [String],
}

impl<'a> PlaceholderContext<'a> {
    pub fn new(
        player: Option<&'a dyn PlayerHandle>,
        session: Option<&'a MenuSession>,
        args: &'a [String],
    ) -> Self {
        Self {
            player,
            session,
            args,
        }
    }

    /// Context with no player, session or arguments bound.
    pub fn detached() -> Self {
        Self {
            player: None,
            session: None,
            args: &[],
        }
    }

    pub fn player(&self) -> Option<&'a dyn PlayerHandle> {
        self.player
    }

    pub fn session(&self) -> Option<&'a MenuSession> {
        self.session
    }

    pub fn args(&self) -> &'a [String] {
        self.args
    }
}

/// Resolver for one family of tokens.
///
/// Providers are stateless per call. Tokens arrive lower-cased and without
/// markers (`server_tps`, not `%Server_TPS%`).
pub trait PlaceholderProvider: Send + Sync {
    /// Informational grouping key (`"player"`, `"math"`, ...).
    fn identifier(&self) -> &'static str;

    /// Resolves `token`, or returns `None` if it is not handled here.
    fn resolve(&self, token: &str, ctx: &PlaceholderContext<'_>) -> Option<String>;

    /// Token names this provider answers, for documentation and overlap checks.
    ///
    /// Parameterized families are listed with a `<...>` suffix
    /// (`session_data_<key>`).
    fn supported_tokens(&self) -> &[&'static str];
}
