//! Scripted player activity for the simulator.

use std::sync::Arc;

use anyhow::{Context, Result};
use menu_core::{Action, ActionContext, Location, PlayerFlags, PlayerHandle, PlayerId, Tick};
use menu_runtime::{MemoryPlayer, MemoryServer, MemorySessionStore, MenuEngine, SequenceOutcome};
use tracing::info;

const WELCOME: &[&str] = &[
    "message: Welcome %player_name%! TPS %server_tps%, %server_online%/%server_max_players% online",
    "title: Main Menu|opened at %date_time%",
    "wait: 20",
    "message: One second later (tick %server_tick%), page %session_page% of %session_menu%",
    "open: shop",
    "[message] Shop opened for %player_name%",
];

const JOIN_REWARD: &[&str] = &[
    "console: say %player_name% joined",
    "wait: 10",
    "give: diamond %math_max(1,2)%",
    "sequence: message: Reward delivered; sound: entity.player.levelup 0.8",
];

const WARP: &[&str] = &[
    "message: Teleporting in two seconds...",
    "wait: 40",
    "tp: ~ ~10 ~",
    "message: Arrived at %player_x%, %player_y%, %player_z%",
];

/// Tick at which the warp menu is closed, cancelling its pending teleport.
const WARP_CLOSE_TICK: u64 = 15;

pub struct Script {
    alex: Arc<MemoryPlayer>,
    sam: Arc<MemoryPlayer>,
    robin: Arc<MemoryPlayer>,
    sessions: Arc<MemorySessionStore>,
    welcome: Arc<[Action]>,
    join_reward: Arc<[Action]>,
    warp: Arc<[Action]>,
}

impl Script {
    pub fn new(
        engine: &MenuEngine,
        sessions: Arc<MemorySessionStore>,
        server: Arc<MemoryServer>,
    ) -> Result<Self> {
        server.set_online(3);

        Ok(Self {
            alex: Arc::new(MemoryPlayer::new(PlayerId(1), "Alex").with_flags(PlayerFlags::OPERATOR)),
            sam: Arc::new(MemoryPlayer::new(PlayerId(2), "Sam")),
            robin: Arc::new(
                MemoryPlayer::new(PlayerId(3), "Robin")
                    .with_location(Location::new("world", 100.0, 64.0, -20.0)),
            ),
            sessions,
            welcome: parse(engine, WELCOME).context("welcome script")?,
            join_reward: parse(engine, JOIN_REWARD).context("join reward script")?,
            warp: parse(engine, WARP).context("warp script")?,
        })
    }

    pub fn on_tick(&self, engine: &mut MenuEngine, tick: Tick) {
        match tick.0 {
            1 => {
                if let Ok(session) = self.sessions.open(self.alex.id(), "main") {
                    let ctx = ActionContext::new(self.alex.clone()).with_session(session);
                    log_outcome("alex", engine.execute(Arc::clone(&self.welcome), ctx));
                }
                let ctx = ActionContext::new(self.sam.clone());
                log_outcome("sam", engine.execute(Arc::clone(&self.join_reward), ctx));
            }
            5 => {
                if let Ok(session) = self.sessions.open(self.robin.id(), "warps") {
                    let ctx = ActionContext::new(self.robin.clone()).with_session(session);
                    log_outcome("robin", engine.execute(Arc::clone(&self.warp), ctx));
                }
            }
            WARP_CLOSE_TICK => {
                if let Some(session) = self.sessions.close(self.robin.id()) {
                    let cancelled = engine.on_session_closed(session);
                    info!(%session, cancelled = cancelled.len(), "robin closed the warp menu");
                }
            }
            _ => {}
        }
    }

    pub fn summary(&self, engine: &MenuEngine) {
        for player in [&self.alex, &self.sam, &self.robin] {
            for message in player.messages() {
                info!(player = %player.name(), "{message}");
            }
            info!(
                player = %player.name(),
                diamonds = player.count_item("diamond"),
                location = ?player.location(),
                "final state"
            );
        }
        info!(pending = engine.executor().pending_count(), "simulation finished");
    }
}

fn parse(engine: &MenuEngine, lines: &[&str]) -> Result<Arc<[Action]>> {
    Ok(engine.parse_actions(lines.iter().copied())?.into())
}

fn log_outcome(player: &str, outcome: SequenceOutcome) {
    match outcome {
        SequenceOutcome::Completed => info!(player, "sequence completed"),
        SequenceOutcome::Waiting { id, resume_at } => {
            info!(player, sequence = %id, resume_at = %resume_at, "sequence waiting")
        }
        SequenceOutcome::Queued { id } => info!(player, sequence = %id, "sequence queued"),
    }
}
