use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use menu_core::{
    GameMode, ItemStack, Location, OracleError, PlayerFlags, PlayerHandle, PlayerId, TitleTimings,
};

use super::{lock, read, write};

/// Effect delivered to a [`MemoryPlayer`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerEvent {
    Message(String),
    ActionBar(String),
    Title {
        title: String,
        subtitle: String,
        timings: TitleTimings,
    },
    Sound {
        sound: String,
        volume: f32,
        pitch: f32,
    },
    Teleport(Location),
    Connect(String),
}

#[derive(Clone, Debug)]
struct Vitals {
    location: Location,
    health: f64,
    max_health: f64,
    food_level: u32,
    saturation: f32,
    level: u32,
    exp_progress: f32,
    total_experience: u32,
    game_mode: GameMode,
    ping_ms: u32,
    playtime_ticks: u64,
    flags: PlayerFlags,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            location: Location::new("world", 0.0, 64.0, 0.0),
            health: 20.0,
            max_health: 20.0,
            food_level: 20,
            saturation: 5.0,
            level: 0,
            exp_progress: 0.0,
            total_experience: 0,
            game_mode: GameMode::Survival,
            ping_ms: 0,
            playtime_ticks: 0,
            flags: PlayerFlags::empty(),
        }
    }
}

/// Scriptable player that records every effect it receives.
pub struct MemoryPlayer {
    id: PlayerId,
    name: String,
    online: AtomicBool,
    vitals: RwLock<Vitals>,
    inventory: Mutex<HashMap<String, u32>>,
    events: Mutex<Vec<PlayerEvent>>,
}

impl MemoryPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            online: AtomicBool::new(true),
            vitals: RwLock::new(Vitals::default()),
            inventory: Mutex::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn with_location(self, location: Location) -> Self {
        write(&self.vitals).location = location;
        self
    }

    pub fn with_flags(self, flags: PlayerFlags) -> Self {
        write(&self.vitals).flags = flags;
        self
    }

    pub fn with_health(self, health: f64) -> Self {
        write(&self.vitals).health = health;
        self
    }

    pub fn with_playtime(self, ticks: u64) -> Self {
        write(&self.vitals).playtime_ticks = ticks;
        self
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }

    pub fn set_game_mode(&self, mode: GameMode) {
        write(&self.vitals).game_mode = mode;
    }

    /// Puts `amount` of `item` into the inventory.
    pub fn stock(&self, item: &str, amount: u32) {
        *lock(&self.inventory).entry(item.to_string()).or_default() += amount;
    }

    pub fn events(&self) -> Vec<PlayerEvent> {
        lock(&self.events).clone()
    }

    /// Chat messages received, in order.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter_map(|event| match event {
                PlayerEvent::Message(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&self) {
        lock(&self.events).clear();
    }

    fn record(&self, event: PlayerEvent) {
        lock(&self.events).push(event);
    }

    fn ensure_online(&self) -> Result<(), OracleError> {
        if self.is_online() {
            Ok(())
        } else {
            Err(OracleError::PlayerOffline)
        }
    }
}

impl PlayerHandle for MemoryPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    fn location(&self) -> Location {
        read(&self.vitals).location.clone()
    }

    fn health(&self) -> f64 {
        read(&self.vitals).health
    }

    fn max_health(&self) -> f64 {
        read(&self.vitals).max_health
    }

    fn food_level(&self) -> u32 {
        read(&self.vitals).food_level
    }

    fn saturation(&self) -> f32 {
        read(&self.vitals).saturation
    }

    fn level(&self) -> u32 {
        read(&self.vitals).level
    }

    fn exp_progress(&self) -> f32 {
        read(&self.vitals).exp_progress
    }

    fn total_experience(&self) -> u32 {
        read(&self.vitals).total_experience
    }

    fn game_mode(&self) -> GameMode {
        read(&self.vitals).game_mode
    }

    fn ping_ms(&self) -> u32 {
        read(&self.vitals).ping_ms
    }

    fn playtime_ticks(&self) -> u64 {
        read(&self.vitals).playtime_ticks
    }

    fn flags(&self) -> PlayerFlags {
        read(&self.vitals).flags
    }

    fn send_message(&self, text: &str) {
        self.record(PlayerEvent::Message(text.to_string()));
    }

    fn send_action_bar(&self, text: &str) {
        self.record(PlayerEvent::ActionBar(text.to_string()));
    }

    fn send_title(&self, title: &str, subtitle: &str, timings: TitleTimings) {
        self.record(PlayerEvent::Title {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            timings,
        });
    }

    fn play_sound(&self, sound: &str, volume: f32, pitch: f32) -> Result<(), OracleError> {
        self.ensure_online()?;
        self.record(PlayerEvent::Sound {
            sound: sound.to_string(),
            volume,
            pitch,
        });
        Ok(())
    }

    fn teleport(&self, target: &Location) -> Result<(), OracleError> {
        self.ensure_online()?;
        write(&self.vitals).location = target.clone();
        self.record(PlayerEvent::Teleport(target.clone()));
        Ok(())
    }

    fn connect(&self, server: &str) -> Result<(), OracleError> {
        self.ensure_online()?;
        self.record(PlayerEvent::Connect(server.to_string()));
        Ok(())
    }

    fn add_item(&self, stack: &ItemStack) -> Result<(), OracleError> {
        self.ensure_online()?;
        self.stock(&stack.item, stack.amount);
        Ok(())
    }

    fn count_item(&self, item: &str) -> u32 {
        lock(&self.inventory).get(item).copied().unwrap_or(0)
    }

    fn remove_item(&self, stack: &ItemStack) -> Result<(), OracleError> {
        self.ensure_online()?;
        let mut inventory = lock(&self.inventory);
        let held = inventory.get(&stack.item).copied().unwrap_or(0);
        if held < stack.amount {
            return Err(OracleError::rejected("inventory", format!("only {held} {}", stack.item)));
        }
        if held == stack.amount {
            inventory.remove(&stack.item);
        } else {
            inventory.insert(stack.item.clone(), held - stack.amount);
        }
        Ok(())
    }
}
