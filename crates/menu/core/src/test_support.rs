//! Recording collaborators for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::env::{
    CommandSink, CommandSource, ItemFactory, MemoryUsage, OracleError, PlayerHandle,
    ServerOracle, SessionStore, TickSource, TitleTimings,
};
use crate::state::{
    GameMode, ItemStack, Location, MenuSession, PlayerFlags, PlayerId, SessionId, Tick,
};

const MIB: u64 = 1024 * 1024;

pub struct TestPlayer {
    name: String,
    location: Mutex<Location>,
    pub messages: Mutex<Vec<String>>,
    pub action_bars: Mutex<Vec<String>>,
    pub titles: Mutex<Vec<(String, String, TitleTimings)>>,
    pub sounds: Mutex<Vec<(String, f32, f32)>>,
    pub connects: Mutex<Vec<String>>,
    pub inventory: Mutex<HashMap<String, u32>>,
}

impl TestPlayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: Mutex::new(Location::new("world", 10.0, 20.0, 30.0)),
            messages: Mutex::new(Vec::new()),
            action_bars: Mutex::new(Vec::new()),
            titles: Mutex::new(Vec::new()),
            sounds: Mutex::new(Vec::new()),
            connects: Mutex::new(Vec::new()),
            inventory: Mutex::new(HashMap::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn holding(&self, item: &str) -> u32 {
        self.inventory.lock().unwrap().get(item).copied().unwrap_or(0)
    }
}

impl PlayerHandle for TestPlayer {
    fn id(&self) -> PlayerId {
        PlayerId(7)
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn location(&self) -> Location {
        self.location.lock().unwrap().clone()
    }

    fn health(&self) -> f64 {
        20.0
    }

    fn max_health(&self) -> f64 {
        20.0
    }

    fn food_level(&self) -> u32 {
        18
    }

    fn saturation(&self) -> f32 {
        5.0
    }

    fn level(&self) -> u32 {
        12
    }

    fn exp_progress(&self) -> f32 {
        0.5
    }

    fn total_experience(&self) -> u32 {
        350
    }

    fn game_mode(&self) -> GameMode {
        GameMode::Survival
    }

    fn ping_ms(&self) -> u32 {
        42
    }

    fn playtime_ticks(&self) -> u64 {
        1800
    }

    fn flags(&self) -> PlayerFlags {
        PlayerFlags::OPERATOR
    }

    fn send_message(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }

    fn send_action_bar(&self, text: &str) {
        self.action_bars.lock().unwrap().push(text.to_string());
    }

    fn send_title(&self, title: &str, subtitle: &str, timings: TitleTimings) {
        self.titles
            .lock()
            .unwrap()
            .push((title.to_string(), subtitle.to_string(), timings));
    }

    fn play_sound(&self, sound: &str, volume: f32, pitch: f32) -> Result<(), OracleError> {
        if sound.is_empty() {
            return Err(OracleError::rejected("player", "empty sound id"));
        }
        self.sounds.lock().unwrap().push((sound.to_string(), volume, pitch));
        Ok(())
    }

    fn teleport(&self, target: &Location) -> Result<(), OracleError> {
        *self.location.lock().unwrap() = target.clone();
        Ok(())
    }

    fn connect(&self, server: &str) -> Result<(), OracleError> {
        self.connects.lock().unwrap().push(server.to_string());
        Ok(())
    }

    fn add_item(&self, stack: &ItemStack) -> Result<(), OracleError> {
        *self
            .inventory
            .lock()
            .unwrap()
            .entry(stack.item.clone())
            .or_default() += stack.amount;
        Ok(())
    }

    fn count_item(&self, item: &str) -> u32 {
        self.holding(item)
    }

    fn remove_item(&self, stack: &ItemStack) -> Result<(), OracleError> {
        let mut inventory = self.inventory.lock().unwrap();
        let held = inventory.entry(stack.item.clone()).or_default();
        *held = held.saturating_sub(stack.amount);
        Ok(())
    }
}

pub struct TestServer;

impl ServerOracle for TestServer {
    fn online_players(&self) -> usize {
        3
    }

    fn max_players(&self) -> usize {
        20
    }

    fn memory(&self) -> MemoryUsage {
        MemoryUsage {
            used: 512 * MIB,
            max: 2048 * MIB,
        }
    }

    fn uptime(&self) -> Duration {
        Duration::from_secs(3605)
    }

    fn motd(&self) -> String {
        "A test server".to_string()
    }

    fn version(&self) -> String {
        "1.21".to_string()
    }

    fn broadcast(&self, _text: &str) {}
}

pub struct TestTicks {
    samples: Vec<f64>,
}

impl TestTicks {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl TickSource for TestTicks {
    fn current_tick(&self) -> Tick {
        Tick(100)
    }

    fn recent_tick_durations(&self) -> Vec<f64> {
        self.samples.clone()
    }
}

#[derive(Default)]
pub struct TestCommands {
    pub dispatched: Mutex<Vec<(CommandSource, String)>>,
}

impl CommandSink for TestCommands {
    fn perform(&self, source: CommandSource, command: &str) -> Result<(), OracleError> {
        if command.starts_with("fail") {
            return Err(OracleError::rejected("commands", "unknown command"));
        }
        self.dispatched
            .lock()
            .unwrap()
            .push((source, command.to_string()));
        Ok(())
    }
}

/// Knows every item except ones named `unknown*`.
pub struct TestItems;

impl ItemFactory for TestItems {
    fn create(&self, item: &str, amount: u32) -> Result<ItemStack, OracleError> {
        if item.starts_with("unknown") {
            return Err(OracleError::UnknownItem(item.to_string()));
        }
        Ok(ItemStack::new(item, amount))
    }
}

/// Single-player store; menus named `missing*` do not exist.
#[derive(Default)]
pub struct TestSessions {
    current: Mutex<Option<Arc<MenuSession>>>,
    next_id: Mutex<u64>,
    pub closed: Mutex<u32>,
    pub refreshed: Mutex<u32>,
}

impl TestSessions {
    pub fn open(&self, player: PlayerId, menu_id: &str) -> Arc<MenuSession> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let session = Arc::new(MenuSession::new(SessionId(*next), player, menu_id));
        *self.current.lock().unwrap() = Some(Arc::clone(&session));
        session
    }
}

impl SessionStore for TestSessions {
    fn current(&self, _player: PlayerId) -> Option<Arc<MenuSession>> {
        self.current.lock().unwrap().clone()
    }

    fn is_open(&self, session: SessionId) -> bool {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|open| open.id() == session)
    }

    fn open_menu(&self, player: PlayerId, menu_id: &str) -> Result<Arc<MenuSession>, OracleError> {
        if menu_id.starts_with("missing") {
            return Err(OracleError::MenuNotFound(menu_id.to_string()));
        }
        Ok(self.open(player, menu_id))
    }

    fn close_menu(&self, _player: PlayerId) -> Result<(), OracleError> {
        *self.current.lock().unwrap() = None;
        *self.closed.lock().unwrap() += 1;
        Ok(())
    }

    fn refresh_menu(&self, _player: PlayerId) -> Result<(), OracleError> {
        *self.refreshed.lock().unwrap() += 1;
        Ok(())
    }
}
