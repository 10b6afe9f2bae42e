use std::collections::VecDeque;

use color_eyre::{eyre::eyre, Result};
use itertools::Itertools;
use log::{debug, trace};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    config::GameConfig,
    food::place_food,
    models::Snapshot,
    types::{Cell, Direction},
};

/// What happened during one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub ate_food:  bool,
    /// Number of tail cells cut off because the head ran into the tail.
    pub truncated: Option<usize>,
}

/// The whole game: one snake and one piece of food on an `N`x`N` torus.
///
/// The state is driven from a single control loop. Direction requests may
/// arrive any number of times between ticks; the last accepted one wins.
#[derive(Clone, Debug)]
pub struct GameState {
    config:            GameConfig,
    head:              Cell,
    tail:              VecDeque<Cell>,
    direction:         Direction,
    pending_direction: Direction,
    growth_pending:    u64,
    food:              Cell,
    ticks:             u64,
    rng:               StdRng,
}

impl GameState {
    /// # Errors
    ///
    /// Fails if `config` does not describe a playable game.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::build(config, StdRng::from_entropy())
    }

    /// Same as [`GameState::new`] but with a reproducible food sequence.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not describe a playable game.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;

        let head = config.initial_head;
        let tail: VecDeque<Cell> = config.initial_tail.iter().copied().collect();
        let food = place_food(
            &mut rng,
            config.grid_size,
            std::iter::once(&head).chain(tail.iter()),
        )
        .ok_or_else(|| eyre!("no room for food on the initial grid"))?;

        debug!("new game, head at {head}, food at {food}");

        Ok(Self {
            direction: config.initial_direction,
            pending_direction: config.initial_direction,
            config,
            head,
            tail,
            growth_pending: 0,
            food,
            ticks: 0,
            rng,
        })
    }

    /// Puts the snake back in its starting shape and places fresh food.
    pub fn reset(&mut self) {
        self.head = self.config.initial_head;
        self.tail = self.config.initial_tail.iter().copied().collect();
        self.direction = self.config.initial_direction;
        self.pending_direction = self.config.initial_direction;
        self.growth_pending = 0;
        self.ticks = 0;
        self.generate_food();
        debug!("game reset, food at {}", self.food);
    }

    /// Records `direction` for the next tick unless it reverses the snake.
    /// Returns whether the request was kept.
    pub fn submit_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            trace!("dropping reversal {} while moving {}", direction, self.direction);
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Runs one simulation tick.
    pub fn advance(&mut self) -> TickReport {
        let n = self.config.grid_size;

        // growth postpones the shrink by one tick
        let grow = self.growth_pending > 0;
        if grow {
            self.growth_pending -= 1;
        }

        self.tail.push_front(self.head);
        if !grow {
            self.tail.pop_back();
        }

        self.direction = self.pending_direction;
        self.head = self.head.step(self.direction, n);
        self.ticks += 1;

        let mut report = TickReport::default();

        if self.head == self.food {
            self.growth_pending += 1;
            report.ate_food = true;
            debug!("tick {}: ate food at {}", self.ticks, self.head);
            self.generate_food();
        }

        if let Some(index) = self.tail.iter().position(|cell| *cell == self.head) {
            let cut = self.tail.len() - index;
            self.tail.truncate(index);
            report.truncated = Some(cut);
            debug!(
                "tick {}: head hit the tail at {}, lost {cut} cells",
                self.ticks, self.head
            );
        }

        trace!(
            "tick {}: head {} tail [{}]",
            self.ticks,
            self.head,
            self.tail.iter().join(", ")
        );

        report
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            head:      self.head,
            tail:      self.tail.iter().copied().collect(),
            food:      self.food,
            direction: self.direction,
            tick:      self.ticks,
            grid_size: self.config.grid_size,
        }
    }

    fn generate_food(&mut self) {
        let occupied = std::iter::once(&self.head).chain(self.tail.iter());
        // a full grid keeps the old food cell
        if let Some(food) = place_food(&mut self.rng, self.config.grid_size, occupied) {
            self.food = food;
            debug!("food placed at {food}");
        }
    }

    #[must_use]
    pub const fn head(&self) -> Cell {
        self.head
    }

    #[must_use]
    pub const fn tail(&self) -> &VecDeque<Cell> {
        &self.tail
    }

    #[must_use]
    pub const fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    #[must_use]
    pub const fn growth_pending(&self) -> u64 {
        self.growth_pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
