use super::OracleError;
use crate::state::{GameMode, ItemStack, Location, PlayerFlags, PlayerId};

/// Title fade-in/stay/fade-out, in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleTimings {
    pub fade_in: u32,
    pub stay: u32,
    pub fade_out: u32,
}

impl TitleTimings {
    pub fn new(fade_in: u32, stay: u32, fade_out: u32) -> Self {
        Self {
            fade_in,
            stay,
            fade_out,
        }
    }
}

/// Live handle to one connected player.
///
/// Reads are snapshots of host state at call time. Effects are delivered by
/// the host; methods returning `Result` may be refused (inventory full,
/// destination unloaded, player gone).
pub trait PlayerHandle: Send + Sync {
    // ===== Identity =====

    fn id(&self) -> PlayerId;

    fn name(&self) -> String;

    fn display_name(&self) -> String {
        self.name()
    }

    fn is_online(&self) -> bool {
        true
    }

    // ===== State =====

    fn location(&self) -> Location;

    fn health(&self) -> f64;

    fn max_health(&self) -> f64;

    fn food_level(&self) -> u32;

    fn saturation(&self) -> f32;

    /// Experience level.
    fn level(&self) -> u32;

    /// Progress towards the next level, in `0.0..1.0`.
    fn exp_progress(&self) -> f32;

    fn total_experience(&self) -> u32;

    fn game_mode(&self) -> GameMode;

    /// Connection latency in milliseconds.
    fn ping_ms(&self) -> u32;

    /// Total ticks played, from the host's statistics.
    fn playtime_ticks(&self) -> u64;

    fn flags(&self) -> PlayerFlags;

    // ===== Effects =====

    fn send_message(&self, text: &str);

    fn send_action_bar(&self, text: &str);

    fn send_title(&self, title: &str, subtitle: &str, timings: TitleTimings);

    fn play_sound(&self, sound: &str, volume: f32, pitch: f32) -> Result<(), OracleError>;

    fn teleport(&self, target: &Location) -> Result<(), OracleError>;

    /// Moves the player to another server behind the proxy.
    fn connect(&self, server: &str) -> Result<(), OracleError>;

    fn add_item(&self, stack: &ItemStack) -> Result<(), OracleError>;

    /// Number of items matching `item` across the inventory.
    fn count_item(&self, item: &str) -> u32;

    /// Shrinks or removes matching stacks until `stack.amount` items are gone.
    fn remove_item(&self, stack: &ItemStack) -> Result<(), OracleError>;
}
