//! Host-agnostic menu action rules and placeholder resolution.
//!
//! `menu-core` defines the action variants a menu can trigger, the placeholder
//! pipeline that resolves `%token%` text at execution time, and the narrow
//! collaborator traits every effect goes through. It owns no threads and no
//! clocks; scheduling across host ticks lives in `menu-runtime`.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod placeholder;
pub mod state;

#[cfg(test)]
mod test_support;

pub use action::{
    Action, ActionConstructor, ActionContext, ActionError, ActionKind, ActionOutcome,
    ActionParseError, ActionRegistry, Coordinate, ItemSpec, SoundSpec, TeleportSpec, TitleSpec,
};
pub use config::{ActionDefaults, PlaceholderConfig};
pub use env::{
    CommandSink, CommandSource, ItemFactory, MemoryUsage, MenuEnv, OracleError, PlayerHandle,
    ServerOracle, SessionStore, TickSource, TitleTimings,
};
pub use error::{ErrorSeverity, MenuError};
pub use placeholder::{
    PlaceholderContext, PlaceholderManager, PlaceholderProvider, TokenOverlap,
    math::{MathError, evaluate},
};
pub use state::{
    GameMode, ItemStack, Location, MenuSession, PlayerFlags, PlayerId, SessionId, Tick,
};
