//! Host-loop simulator.
//!
//! Stands in for a game server: drives a [`MenuEngine`] from a 20 Hz tokio
//! interval against the in-memory collaborators and logs what each simulated
//! player receives.
//!
//! Environment variables:
//! - `MENU_CONFIG` - path to a RON engine config (default: built-in defaults)
//! - `MENU_SIM_TICKS` - number of host ticks to run (default: 60)
mod script;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use menu_runtime::{
    EngineConfig, ManualTicks, MemoryCommandSink, MemoryItemFactory, MemoryServer,
    MemorySessionStore, MenuEngine,
};
use tracing::info;

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const DEFAULT_TICKS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    menu_runtime::logging::init();

    let config = load_config()?;
    let total_ticks = read_env::<u64>("MENU_SIM_TICKS").unwrap_or(DEFAULT_TICKS);

    let ticks = Arc::new(ManualTicks::new());
    let server = Arc::new(MemoryServer::new(100).with_motd("menu-sim"));
    let sessions = Arc::new(MemorySessionStore::new().with_menus(["main", "shop", "warps"]));

    let mut engine = MenuEngine::builder()
        .config(config)
        .ticks(ticks.clone())
        .server(server.clone())
        .commands(Arc::new(MemoryCommandSink::new()))
        .sessions(sessions.clone())
        .items(Arc::new(MemoryItemFactory::new()))
        .build()
        .context("failed to build menu engine")?;

    let script = script::Script::new(&engine, sessions, server)?;

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    let mut last = Instant::now();
    for _ in 0..total_ticks {
        interval.tick().await;

        let elapsed = last.elapsed();
        last = Instant::now();
        let tick = ticks.advance(elapsed.as_secs_f64() * 1000.0);

        script.on_tick(&mut engine, tick);
        let report = engine.on_tick();
        if report.resumed > 0 || !report.cancelled.is_empty() {
            info!(
                tick = %tick,
                resumed = report.resumed,
                completed = report.completed,
                cancelled = report.cancelled.len(),
                "host tick"
            );
        }
    }

    script.summary(&engine);
    Ok(())
}

fn load_config() -> Result<EngineConfig> {
    let config = match std::env::var_os("MENU_CONFIG").map(PathBuf::from) {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("failed to load engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(config.with_process_env())
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    std::env::var(key).ok()?.parse().ok()
}
