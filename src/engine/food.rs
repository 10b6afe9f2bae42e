use std::collections::HashSet;

use itertools::Itertools;
use log::warn;
use rand::{seq::SliceRandom, Rng};

use super::types::Cell;

/// Uniform draws attempted before falling back to sampling the free cells.
pub const MAX_FOOD_ATTEMPTS: usize = 100;

/// Picks a random cell in `[1, grid_size]²` not covered by `occupied`.
///
/// Returns `None` when every cell of the grid is occupied or the grid is
/// empty.
pub fn place_food<'a, R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: i64,
    occupied: impl IntoIterator<Item = &'a Cell>,
) -> Option<Cell> {
    if grid_size < 1 {
        return None;
    }

    let occupied: HashSet<Cell> = occupied.into_iter().copied().collect();

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = Cell::new(
            rng.gen_range(1..=grid_size),
            rng.gen_range(1..=grid_size),
        );
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Cell> = (1..=grid_size)
        .cartesian_product(1..=grid_size)
        .map(|(y, x)| Cell::new(x, y))
        .filter(|cell| !occupied.contains(cell))
        .collect();

    let choice = free.choose(rng).copied();
    if choice.is_none() {
        warn!("no free cell left on the {grid_size}x{grid_size} grid for food");
    }
    choice
}
