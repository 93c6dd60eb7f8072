//! Per-player, per-open-menu runtime state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use super::{PlayerId, SessionId};

/// Runtime state of one open menu for one player.
///
/// Sessions are created and destroyed by the external menu manager; the engine
/// only holds shared references. The data map is string-keyed, case-sensitive
/// and last-write-wins, and it lives exactly as long as this object.
///
/// The data map sits behind a lock so a session can be shared with a host that
/// delivers ticks from more than one thread.
#[derive(Debug)]
pub struct MenuSession {
    id: SessionId,
    player: PlayerId,
    menu_id: String,
    page: AtomicU32,
    opened_at: DateTime<Utc>,
    data: RwLock<HashMap<String, String>>,
}

impl MenuSession {
    /// Creates a session opened now, on page 0.
    pub fn new(id: SessionId, player: PlayerId, menu_id: impl Into<String>) -> Self {
        Self::opened_at(id, player, menu_id, Utc::now())
    }

    pub fn opened_at(
        id: SessionId,
        player: PlayerId,
        menu_id: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            player,
            menu_id: menu_id.into(),
            page: AtomicU32::new(0),
            opened_at,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    pub fn page(&self) -> u32 {
        self.page.load(Ordering::Relaxed)
    }

    pub fn set_page(&self, page: u32) {
        self.page.store(page, Ordering::Relaxed);
    }

    pub fn open_time(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Whole seconds the session has been open at `now` (never negative).
    pub fn open_seconds_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.opened_at).num_seconds().max(0)
    }

    /// Reads a data value. Keys are case-sensitive.
    pub fn data(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Writes a data value, replacing any previous value for `key`.
    pub fn set_data(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove_data(&self, key: &str) -> Option<String> {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Copy of the whole data map.
    pub fn data_snapshot(&self) -> HashMap<String, String> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session() -> MenuSession {
        MenuSession::new(SessionId(1), PlayerId(7), "main")
    }

    #[test]
    fn data_is_last_write_wins() {
        let session = session();
        session.set_data("color", "red");
        session.set_data("color", "blue");
        assert_eq!(session.data("color").as_deref(), Some("blue"));
    }

    #[test]
    fn data_keys_are_case_sensitive() {
        let session = session();
        session.set_data("Key", "upper");
        assert_eq!(session.data("key"), None);
        assert_eq!(session.data("Key").as_deref(), Some("upper"));
    }

    #[test]
    fn open_seconds_never_negative() {
        let now = Utc::now();
        let session = MenuSession::opened_at(SessionId(1), PlayerId(7), "main", now);
        assert_eq!(session.open_seconds_at(now - Duration::seconds(5)), 0);
        assert_eq!(session.open_seconds_at(now + Duration::seconds(42)), 42);
    }
}
