//! In-memory collaborators.
//!
//! Thread-safe implementations of every `menu-core` collaborator trait that
//! record what they were asked to do. Integration tests and the simulator
//! drive the engine against these instead of a real game server.
mod commands;
mod player;
mod server;
mod sessions;

pub use commands::{MemoryCommandSink, MemoryItemFactory};
pub use player::{MemoryPlayer, PlayerEvent};
pub use server::{ManualTicks, MemoryServer};
pub use sessions::MemorySessionStore;

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// A panicking test thread must not wedge every later assertion on the same
// collaborator, so poisoned locks are recovered.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
