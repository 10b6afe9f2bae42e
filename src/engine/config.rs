use std::{collections::HashSet, time::Duration};

use color_eyre::{
    eyre::{ensure, eyre},
    Result,
};

use super::types::{Cell, Direction};

pub const DEFAULT_GRID_SIZE: i64 = 10;
pub const DEFAULT_CELL_SIZE: u32 = 50;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);
pub const DEFAULT_HEAD: Cell = Cell::new(3, 3);
pub const DEFAULT_DIRECTION: Direction = Direction::Up;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size:         i64,
    /// Pixel size of one cell. Only the rendering shell reads this.
    pub cell_size:         u32,
    pub tick_interval:     Duration,
    pub initial_head:      Cell,
    pub initial_tail:      Vec<Cell>,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size:         DEFAULT_GRID_SIZE,
            cell_size:         DEFAULT_CELL_SIZE,
            tick_interval:     DEFAULT_TICK_INTERVAL,
            initial_head:      DEFAULT_HEAD,
            initial_tail:      (4..=8).map(|y| Cell::new(3, y)).collect(),
            initial_direction: DEFAULT_DIRECTION,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_grid_size(self, grid_size: i64) -> Self {
        Self { grid_size, ..self }
    }

    #[must_use]
    pub fn with_tick_interval(self, tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            ..self
        }
    }

    #[must_use]
    pub fn with_snake(
        self,
        head: Cell,
        tail: Vec<Cell>,
        direction: Direction,
    ) -> Self {
        Self {
            initial_head: head,
            initial_tail: tail,
            initial_direction: direction,
            ..self
        }
    }

    /// # Errors
    ///
    /// Fails if the grid is degenerate, the tick interval is zero, or the
    /// initial snake is not a contiguous, in-bounds chain that leaves room
    /// for food.
    pub fn validate(&self) -> Result<()> {
        let n = self.grid_size;
        ensure!(n >= 2, "grid size must be at least 2, got {n}");
        ensure!(!self.tick_interval.is_zero(), "tick interval must be non-zero");

        let body: Vec<Cell> = std::iter::once(self.initial_head)
            .chain(self.initial_tail.iter().copied())
            .collect();

        for cell in &body {
            ensure!(cell.within(n), "initial cell {cell} is outside the {n}x{n} grid");
        }

        let unique: HashSet<_> = body.iter().collect();
        ensure!(unique.len() == body.len(), "initial snake overlaps itself");

        let area = n
            .checked_mul(n)
            .and_then(|area| usize::try_from(area).ok())
            .ok_or_else(|| eyre!("grid size {n} is too large"))?;
        ensure!(
            body.len() < area,
            "initial snake of length {} leaves no room for food",
            body.len()
        );

        for pair in body.windows(2) {
            let adjacent = Direction::iter()
                .any(|d| pair[0].step(*d, n) == pair[1]);
            ensure!(
                adjacent,
                "initial snake is not contiguous between {} and {}",
                pair[0],
                pair[1]
            );
        }

        if let Some(neck) = self.initial_tail.first() {
            ensure!(
                self.initial_head.step(self.initial_direction, n) != *neck,
                "initial direction {} points back into the tail",
                self.initial_direction
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.initial_head, Cell::new(3, 3));
        assert_eq!(
            config.initial_tail,
            vec![
                Cell::new(3, 4),
                Cell::new(3, 5),
                Cell::new(3, 6),
                Cell::new(3, 7),
                Cell::new(3, 8),
            ]
        );
        assert_eq!(config.initial_direction, Direction::Up);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_tiny_grid() {
        let config = GameConfig::default().with_grid_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_snake_outside_grid() {
        let config = GameConfig::default().with_grid_size(5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_gaps_in_snake() {
        let config = GameConfig::default().with_snake(
            Cell::new(3, 3),
            vec![Cell::new(3, 5)],
            Direction::Up,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_snake_wrapping_an_edge() {
        let config = GameConfig::default().with_snake(
            Cell::new(1, 1),
            vec![Cell::new(1, 10), Cell::new(1, 9)],
            Direction::Right,
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_direction_into_neck() {
        let config = GameConfig::default().with_snake(
            Cell::new(3, 3),
            vec![Cell::new(3, 4)],
            Direction::Down,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let config =
            GameConfig::default().with_tick_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_grid_too_large_to_measure() {
        let config = GameConfig::default().with_grid_size(4_000_000_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_full_grid() {
        let config = GameConfig::default().with_grid_size(2).with_snake(
            Cell::new(1, 1),
            vec![Cell::new(1, 2), Cell::new(2, 2), Cell::new(2, 1)],
            Direction::Up,
        );
        assert!(config.validate().is_err());
    }
}
