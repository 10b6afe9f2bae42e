pub mod greedy;

use color_eyre::Result;
pub use greedy::Greedy;

use crate::engine::{Direction, Snapshot};

pub trait Strategy {
    /// # Errors
    ///
    /// Fails when the snapshot does not describe a game that can be played.
    fn get_movement(&self, snapshot: &Snapshot) -> Result<Direction>;
}
