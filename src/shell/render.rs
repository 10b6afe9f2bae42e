use std::fmt;

use crate::engine::{Cell, Snapshot};

pub const HEAD: char = '@';
pub const TAIL: char = 'o';
pub const FOOD: char = '*';
pub const EMPTY: char = '.';

impl Snapshot {
    /// Glyph for one cell. The head wins over tail, tail over food.
    #[must_use]
    pub fn glyph(&self, cell: Cell) -> char {
        if self.head == cell {
            HEAD
        } else if self.tail.contains(&cell) {
            TAIL
        } else if self.food == cell {
            FOOD
        } else {
            EMPTY
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 1..=self.grid_size {
            for x in 1..=self.grid_size {
                write!(f, "{}", self.glyph(Cell::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    #[test]
    fn draws_head_tail_and_food() {
        let snapshot = Snapshot {
            head:      Cell::new(1, 1),
            tail:      vec![Cell::new(1, 2), Cell::new(2, 2)],
            food:      Cell::new(3, 3),
            direction: Direction::Up,
            tick:      0,
            grid_size: 3,
        };
        assert_eq!(snapshot.to_string(), "@..\noo.\n..*\n");
    }
}
