use std::sync::Arc;

use super::OracleError;
use crate::state::{MenuSession, PlayerId, SessionId};

/// Externally owned menu manager.
///
/// The engine never creates or destroys sessions itself; it asks the store to
/// open, close or refresh menus and reads the session objects it hands out.
pub trait SessionStore: Send + Sync {
    /// The session currently open for `player`, if any.
    fn current(&self, player: PlayerId) -> Option<Arc<MenuSession>>;

    /// Whether `session` is still open.
    fn is_open(&self, session: SessionId) -> bool;

    /// Opens `menu_id` for `player`, replacing any open menu.
    fn open_menu(&self, player: PlayerId, menu_id: &str) -> Result<Arc<MenuSession>, OracleError>;

    /// Closes the menu open for `player`.
    fn close_menu(&self, player: PlayerId) -> Result<(), OracleError>;

    /// Re-renders the menu open for `player`.
    fn refresh_menu(&self, player: PlayerId) -> Result<(), OracleError>;
}
