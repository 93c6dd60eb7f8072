//! Tick-driven runtime for menu action sequences.
//!
//! This crate owns the one piece of mutable scheduling state: sequences
//! suspended at delays. Consumers build a [`MenuEngine`] with their host
//! collaborators and feed it triggers, host ticks and teardown events.
//!
//! Modules are organized by responsibility:
//! - [`executor`] hosts the cooperative scheduler and its sequence records
//! - [`engine`] binds placeholders, the action registry and the scheduler
//! - [`oracle`] holds shared collaborator handles
//! - [`memory`] provides recording collaborators for tests and simulation
//! - [`config`] loads engine tunables from RON and the environment
//! - [`api`] exposes the error types downstream callers handle
pub mod api;
pub mod config;
pub mod engine;
pub mod executor;
pub mod logging;
pub mod memory;
pub mod oracle;

pub use api::{Result, RuntimeError};
pub use config::EngineConfig;
pub use engine::{MenuEngine, MenuEngineBuilder};
pub use executor::{
    ActionExecutor, PendingSequence, SequenceId, SequenceOutcome, SequenceState, TickReport,
};
pub use memory::{
    ManualTicks, MemoryCommandSink, MemoryItemFactory, MemoryPlayer, MemoryServer,
    MemorySessionStore, PlayerEvent,
};
pub use oracle::CollaboratorSet;
