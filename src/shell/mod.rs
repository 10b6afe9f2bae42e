//! Everything around the game: the clock, the text board, the HTTP host
//! and its environment settings.

pub mod host;
pub mod render;
pub mod settings;
pub mod ticker;

pub use host::{routes, run_ticker, shared, SharedGame};
pub use settings::Settings;
pub use ticker::Ticker;
