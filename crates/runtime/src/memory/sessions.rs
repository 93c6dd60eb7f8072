use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use menu_core::{MenuSession, OracleError, PlayerId, SessionId, SessionStore};

use super::{lock, read, write};

/// Menu manager holding at most one open session per player.
///
/// With no registered menus every menu id opens; otherwise unknown ids fail
/// with [`OracleError::MenuNotFound`].
#[derive(Default)]
pub struct MemorySessionStore {
    menus: HashSet<String>,
    open: RwLock<HashMap<PlayerId, Arc<MenuSession>>>,
    next_id: AtomicU64,
    refreshes: Mutex<HashMap<PlayerId, u32>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts openable menus to `menus`.
    pub fn with_menus<I, S>(mut self, menus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menus = menus.into_iter().map(Into::into).collect();
        self
    }

    /// Opens a menu directly, as the host menu manager would on a click.
    pub fn open(&self, player: PlayerId, menu_id: &str) -> Result<Arc<MenuSession>, OracleError> {
        if !self.menus.is_empty() && !self.menus.contains(menu_id) {
            return Err(OracleError::MenuNotFound(menu_id.to_string()));
        }

        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let session = Arc::new(MenuSession::new(id, player, menu_id));
        write(&self.open).insert(player, Arc::clone(&session));
        Ok(session)
    }

    /// Closes the player's menu, returning the closed session id.
    pub fn close(&self, player: PlayerId) -> Option<SessionId> {
        write(&self.open).remove(&player).map(|session| session.id())
    }

    pub fn open_count(&self) -> usize {
        read(&self.open).len()
    }

    pub fn refresh_count(&self, player: PlayerId) -> u32 {
        lock(&self.refreshes).get(&player).copied().unwrap_or(0)
    }
}

impl SessionStore for MemorySessionStore {
    fn current(&self, player: PlayerId) -> Option<Arc<MenuSession>> {
        read(&self.open).get(&player).cloned()
    }

    fn is_open(&self, session: SessionId) -> bool {
        read(&self.open).values().any(|open| open.id() == session)
    }

    fn open_menu(&self, player: PlayerId, menu_id: &str) -> Result<Arc<MenuSession>, OracleError> {
        self.open(player, menu_id)
    }

    fn close_menu(&self, player: PlayerId) -> Result<(), OracleError> {
        self.close(player);
        Ok(())
    }

    fn refresh_menu(&self, player: PlayerId) -> Result<(), OracleError> {
        if !read(&self.open).contains_key(&player) {
            return Err(OracleError::rejected("sessions", "no menu open"));
        }
        *lock(&self.refreshes).entry(player).or_default() += 1;
        Ok(())
    }
}
