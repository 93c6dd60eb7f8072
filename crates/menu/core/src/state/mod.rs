//! Runtime values shared by actions and placeholder providers.
//!
//! Nothing in this module is persisted; sessions live exactly as long as the
//! external menu manager keeps them open.
mod common;
mod session;

pub use common::{GameMode, ItemStack, Location, PlayerFlags, PlayerId, SessionId, Tick};
pub use session::MenuSession;
