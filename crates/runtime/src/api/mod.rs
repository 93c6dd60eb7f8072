//! Public runtime API surface.
//!
//! Types exposed to embedding hosts live here so the executor and engine
//! modules can stay focused on scheduling.

pub mod errors;

pub use errors::{Result, RuntimeError};
