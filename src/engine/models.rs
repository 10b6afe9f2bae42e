use serde::{Deserialize, Serialize};

use crate::engine::types::{Cell, Direction};

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub head:      Cell,
    pub tail:      Vec<Cell>,
    pub food:      Cell,
    pub direction: Direction,
    pub tick:      u64,
    pub grid_size: i64,
}

impl Snapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.tail.contains(&cell)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub name:      String,
    pub version:   String,
    pub author:    String,
    pub grid_size: i64,
    pub tick_ms:   u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionRequest {
    pub direction: Direction,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionAck {
    pub accepted: bool,
    pub pending:  Direction,
}
