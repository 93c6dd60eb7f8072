use std::time::Duration;

/// JVM-style heap usage reported by the host, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    pub used: u64,
    pub max: u64,
}

impl MemoryUsage {
    pub fn free(&self) -> u64 {
        self.max.saturating_sub(self.used)
    }
}

/// Aggregate server state.
pub trait ServerOracle: Send + Sync {
    fn online_players(&self) -> usize;

    fn max_players(&self) -> usize;

    fn memory(&self) -> MemoryUsage;

    fn uptime(&self) -> Duration;

    fn motd(&self) -> String;

    fn version(&self) -> String;

    /// Sends `text` to every online player.
    fn broadcast(&self, text: &str);
}
