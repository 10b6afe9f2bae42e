//! The game itself: rules for moving, wrapping, eating and colliding.
//!
//! Nothing in here knows about clocks, screens or sockets. A shell calls
//! [`GameState::advance`] once per tick, forwards direction requests through
//! [`GameState::submit_direction`] and draws whatever
//! [`GameState::snapshot`] hands back.

pub mod config;
pub mod food;
pub mod models;
pub mod state;
pub mod types;
pub mod utils;

pub use config::GameConfig;
pub use models::Snapshot;
pub use state::{GameState, TickReport};
pub use types::{Cell, Direction};
