use std::sync::Arc;

use crate::env::{ServerOracle, TickSource};
use crate::placeholder::{PlaceholderContext, PlaceholderProvider, format_duration};

const TOKENS: &[&str] = &[
    "server_online",
    "server_max_players",
    "server_tps",
    "server_mspt",
    "server_ram_used",
    "server_ram_max",
    "server_ram_free",
    "server_uptime",
    "server_motd",
    "server_version",
    "server_tick",
];

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Aggregate server state: population, tick health, memory and uptime.
pub struct ServerProvider {
    server: Arc<dyn ServerOracle>,
    ticks: Arc<dyn TickSource>,
    window: usize,
}

impl ServerProvider {
    /// Number of recent tick samples averaged for TPS by default.
    pub const DEFAULT_WINDOW: usize = 100;

    /// Nominal host tick rate.
    pub const MAX_TPS: f64 = 20.0;

    pub fn new(server: Arc<dyn ServerOracle>, ticks: Arc<dyn TickSource>) -> Self {
        Self {
            server,
            ticks,
            window: Self::DEFAULT_WINDOW,
        }
    }

    /// Averages over the last `window` samples (minimum 1).
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Mean of the most recent tick durations, or `None` without samples.
    pub fn mean_tick_millis(&self) -> Option<f64> {
        let samples = self.ticks.recent_tick_durations();
        let recent = &samples[samples.len().saturating_sub(self.window)..];
        if recent.is_empty() {
            return None;
        }
        Some(recent.iter().sum::<f64>() / recent.len() as f64)
    }

    /// `min(20, 1000 / mean)`; a host with no samples is assumed healthy.
    pub fn tps(&self) -> f64 {
        match self.mean_tick_millis() {
            Some(mean) if mean > 0.0 => (1000.0 / mean).min(Self::MAX_TPS),
            _ => Self::MAX_TPS,
        }
    }
}

impl PlaceholderProvider for ServerProvider {
    fn identifier(&self) -> &'static str {
        "server"
    }

    fn resolve(&self, token: &str, _ctx: &PlaceholderContext<'_>) -> Option<String> {
        let field = token.strip_prefix("server_")?;

        let value = match field {
            "online" => self.server.online_players().to_string(),
            "max_players" => self.server.max_players().to_string(),
            "tps" => format!("{:.1}", self.tps()),
            "mspt" => format!("{:.2}", self.mean_tick_millis().unwrap_or(0.0)),
            "ram_used" => (self.server.memory().used / BYTES_PER_MIB).to_string(),
            "ram_max" => (self.server.memory().max / BYTES_PER_MIB).to_string(),
            "ram_free" => (self.server.memory().free() / BYTES_PER_MIB).to_string(),
            "uptime" => format_duration(self.server.uptime().as_secs()),
            "motd" => self.server.motd(),
            "version" => self.server.version(),
            "tick" => self.ticks.current_tick().to_string(),
            _ => return None,
        };

        Some(value)
    }

    fn supported_tokens(&self) -> &[&'static str] {
        TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestServer, TestTicks};

    fn provider(samples: Vec<f64>) -> ServerProvider {
        ServerProvider::new(Arc::new(TestServer), Arc::new(TestTicks::new(samples)))
    }

    #[test]
    fn tps_defaults_to_healthy_without_samples() {
        let provider = provider(Vec::new());
        assert_eq!(provider.tps(), 20.0);
        let ctx = PlaceholderContext::detached();
        assert_eq!(provider.resolve("server_tps", &ctx).as_deref(), Some("20.0"));
    }

    #[test]
    fn tps_is_capped_at_twenty() {
        assert_eq!(provider(vec![10.0, 20.0, 30.0]).tps(), 20.0);
    }

    #[test]
    fn tps_uses_mean_of_recent_window() {
        // Mean of the last two samples: (100 + 100) / 2 = 100ms -> 10 TPS
        let provider = provider(vec![1.0, 100.0, 100.0]).with_window(2);
        assert_eq!(provider.tps(), 10.0);
        let ctx = PlaceholderContext::detached();
        assert_eq!(provider.resolve("server_mspt", &ctx).as_deref(), Some("100.00"));
    }

    #[test]
    fn reads_server_state() {
        let provider = provider(Vec::new());
        let ctx = PlaceholderContext::detached();
        assert_eq!(provider.resolve("server_online", &ctx).as_deref(), Some("3"));
        assert_eq!(provider.resolve("server_ram_used", &ctx).as_deref(), Some("512"));
        assert_eq!(provider.resolve("server_ram_free", &ctx).as_deref(), Some("1536"));
        assert_eq!(provider.resolve("server_uptime", &ctx).as_deref(), Some("1h 0m 5s"));
        assert_eq!(provider.resolve("server_unknown", &ctx), None);
    }
}
