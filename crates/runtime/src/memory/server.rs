use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use menu_core::{MemoryUsage, ServerOracle, Tick, TickSource};

use super::lock;

/// Server view with settable population, memory and uptime.
pub struct MemoryServer {
    online: AtomicUsize,
    max_players: usize,
    memory: Mutex<MemoryUsage>,
    uptime: Mutex<Duration>,
    motd: String,
    version: String,
    broadcasts: Mutex<Vec<String>>,
}

impl MemoryServer {
    pub fn new(max_players: usize) -> Self {
        Self {
            online: AtomicUsize::new(0),
            max_players,
            memory: Mutex::new(MemoryUsage::default()),
            uptime: Mutex::new(Duration::ZERO),
            motd: "A Minecraft Server".to_string(),
            version: "1.21".to_string(),
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_motd(mut self, motd: impl Into<String>) -> Self {
        self.motd = motd.into();
        self
    }

    pub fn set_online(&self, online: usize) {
        self.online.store(online, Ordering::Relaxed);
    }

    pub fn set_memory(&self, usage: MemoryUsage) {
        *lock(&self.memory) = usage;
    }

    pub fn set_uptime(&self, uptime: Duration) {
        *lock(&self.uptime) = uptime;
    }

    pub fn broadcasts(&self) -> Vec<String> {
        lock(&self.broadcasts).clone()
    }
}

impl Default for MemoryServer {
    fn default() -> Self {
        Self::new(20)
    }
}

impl ServerOracle for MemoryServer {
    fn online_players(&self) -> usize {
        self.online.load(Ordering::Relaxed)
    }

    fn max_players(&self) -> usize {
        self.max_players
    }

    fn memory(&self) -> MemoryUsage {
        *lock(&self.memory)
    }

    fn uptime(&self) -> Duration {
        *lock(&self.uptime)
    }

    fn motd(&self) -> String {
        self.motd.clone()
    }

    fn version(&self) -> String {
        self.version.clone()
    }

    fn broadcast(&self, text: &str) {
        lock(&self.broadcasts).push(text.to_string());
    }
}

/// Tick counter advanced explicitly by the caller.
///
/// Keeps the most recent tick durations in a bounded ring for TPS estimates.
pub struct ManualTicks {
    current: AtomicU64,
    capacity: usize,
    durations: Mutex<VecDeque<f64>>,
}

impl ManualTicks {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: AtomicU64::new(0),
            capacity: capacity.max(1),
            durations: Mutex::new(VecDeque::new()),
        }
    }

    /// Completes one tick that took `millis` and returns the new tick.
    pub fn advance(&self, millis: f64) -> Tick {
        {
            let mut durations = lock(&self.durations);
            if durations.len() == self.capacity {
                durations.pop_front();
            }
            durations.push_back(millis);
        }
        Tick(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Completes `count` ticks of the nominal 50 ms each.
    pub fn advance_by(&self, count: u64) -> Tick {
        let mut tick = self.current_tick();
        for _ in 0..count {
            tick = self.advance(50.0);
        }
        tick
    }
}

impl Default for ManualTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for ManualTicks {
    fn current_tick(&self) -> Tick {
        Tick(self.current.load(Ordering::Relaxed))
    }

    fn recent_tick_durations(&self) -> Vec<f64> {
        lock(&self.durations).iter().copied().collect()
    }
}
