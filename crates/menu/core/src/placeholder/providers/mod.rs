//! Built-in placeholder providers.
//!
//! Each provider owns a token prefix (`player_`, `server_`, `session_`,
//! `date_`, `math_`, `arg`) so the default set never overlaps.
mod args;
mod date;
mod math;
mod player;
mod server;
mod session;

pub use args::ArgumentsProvider;
pub use date::{Clock, DateTimeProvider};
pub use math::MathProvider;
pub use player::PlayerProvider;
pub use server::ServerProvider;
pub use session::SessionProvider;
