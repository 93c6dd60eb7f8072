#![allow(dead_code)]

use std::sync::Arc;

use menu_core::{ActionContext, Location, MenuSession, PlayerId};
use menu_runtime::{
    EngineConfig, ManualTicks, MemoryCommandSink, MemoryItemFactory, MemoryPlayer, MemoryServer,
    MemorySessionStore, MenuEngine,
};

pub struct Harness {
    pub engine: MenuEngine,
    pub ticks: Arc<ManualTicks>,
    pub server: Arc<MemoryServer>,
    pub commands: Arc<MemoryCommandSink>,
    pub sessions: Arc<MemorySessionStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let ticks = Arc::new(ManualTicks::new());
        let server = Arc::new(MemoryServer::new(50));
        let commands = Arc::new(MemoryCommandSink::new().failing(["broken"]));
        let sessions = Arc::new(MemorySessionStore::new().with_menus(["main", "shop"]));

        let engine = MenuEngine::builder()
            .config(config)
            .ticks(ticks.clone())
            .server(server.clone())
            .commands(commands.clone())
            .sessions(sessions.clone())
            .items(Arc::new(MemoryItemFactory::with_items(["diamond", "bread"])))
            .build()
            .expect("engine builds");

        Self {
            engine,
            ticks,
            server,
            commands,
            sessions,
        }
    }

    pub fn player(&self, id: u128, name: &str) -> Arc<MemoryPlayer> {
        Arc::new(
            MemoryPlayer::new(PlayerId(id), name)
                .with_location(Location::new("world", 10.0, 20.0, 30.0)),
        )
    }

    pub fn open(&self, player: &MemoryPlayer, menu: &str) -> Arc<MenuSession> {
        use menu_core::PlayerHandle;
        self.sessions.open(player.id(), menu).expect("menu opens")
    }

    pub fn ctx(&self, player: &Arc<MemoryPlayer>, session: Option<&Arc<MenuSession>>) -> ActionContext {
        let ctx = ActionContext::new(player.clone());
        match session {
            Some(session) => ctx.with_session(session.clone()),
            None => ctx,
        }
    }

    /// Advances one host tick and lets the engine resume due sequences.
    pub fn tick(&mut self) -> menu_runtime::TickReport {
        self.ticks.advance(50.0);
        self.engine.on_tick()
    }

    pub fn ticks_until(&mut self, count: u64) {
        for _ in 0..count {
            self.tick();
        }
    }
}
