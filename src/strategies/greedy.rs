use color_eyre::{
    eyre::{ensure, eyre},
    Result,
};

use super::Strategy;
use crate::engine::{utils::wrapped_distance, Direction, Snapshot};

/// Heads for the food by the shortest way round, steering clear of the tail
/// when it can.
pub struct Greedy;

impl Strategy for Greedy {
    fn get_movement(&self, snapshot: &Snapshot) -> Result<Direction> {
        let n = snapshot.grid_size;
        ensure!(n >= 1, "snapshot has an empty grid");

        // every tail cell counts as occupied, growth is not visible here
        Direction::iter()
            .copied()
            .filter(|d| !d.is_opposite(snapshot.direction))
            .min_by_key(|d| {
                let next = snapshot.head.step(*d, n);
                (
                    snapshot.tail.contains(&next),
                    wrapped_distance(next, snapshot.food, n),
                )
            })
            .ok_or_else(|| eyre!("no direction left to try"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    fn snapshot(head: Cell, tail: Vec<Cell>, food: Cell, direction: Direction) -> Snapshot {
        Snapshot {
            head,
            tail,
            food,
            direction,
            tick: 0,
            grid_size: 10,
        }
    }

    #[test]
    fn goes_straight_for_food_ahead() {
        let s = snapshot(
            Cell::new(3, 3),
            vec![Cell::new(3, 4)],
            Cell::new(3, 1),
            Direction::Up,
        );
        assert_eq!(Greedy.get_movement(&s).unwrap(), Direction::Up);
    }

    #[test]
    fn turns_towards_food_on_the_side() {
        let s = snapshot(
            Cell::new(3, 3),
            vec![Cell::new(3, 4)],
            Cell::new(6, 3),
            Direction::Up,
        );
        assert_eq!(Greedy.get_movement(&s).unwrap(), Direction::Right);
    }

    #[test]
    fn avoids_the_tail_and_uses_the_wrap() {
        let s = snapshot(
            Cell::new(3, 3),
            vec![Cell::new(3, 4), Cell::new(4, 4), Cell::new(4, 3)],
            Cell::new(8, 3),
            Direction::Up,
        );
        assert_eq!(Greedy.get_movement(&s).unwrap(), Direction::Left);
    }

    #[test]
    fn never_reverses() {
        let s = snapshot(
            Cell::new(3, 3),
            vec![],
            Cell::new(3, 5),
            Direction::Up,
        );
        assert_ne!(Greedy.get_movement(&s).unwrap(), Direction::Down);
    }

    #[test]
    fn empty_grid_is_an_error() {
        let mut s = snapshot(Cell::new(1, 1), vec![], Cell::new(1, 1), Direction::Up);
        s.grid_size = 0;
        assert!(Greedy.get_movement(&s).is_err());
    }
}
