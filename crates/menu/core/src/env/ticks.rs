use crate::state::Tick;

/// Host main-loop clock.
pub trait TickSource: Send + Sync {
    /// Monotonically increasing tick counter.
    fn current_tick(&self) -> Tick;

    /// Durations of the most recent ticks in milliseconds, oldest first.
    fn recent_tick_durations(&self) -> Vec<f64>;
}
