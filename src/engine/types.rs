use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Movement applied to the head for one tick. `y` grows downwards.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "Up",
                Direction::Down => "Down",
                Direction::Left => "Left",
                Direction::Right => "Right",
            }
        )
    }
}

/// A grid coordinate. Both axes are 1-based and live in `[1, N]`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Cell {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn within(&self, grid_size: i64) -> bool {
        self.x >= 1 && self.y >= 1 && self.x <= grid_size && self.y <= grid_size
    }

    /// The neighbouring cell in `direction`, wrapped onto the torus.
    #[must_use]
    pub const fn step(&self, direction: Direction, grid_size: i64) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: wrap(self.x + dx, grid_size),
            y: wrap(self.y + dy, grid_size),
        }
    }
}

const fn wrap(value: i64, grid_size: i64) -> i64 {
    if value > grid_size {
        1
    } else if value < 1 {
        grid_size
    } else {
        value
    }
}
