use crate::engine::types::Cell;

/// Manhattan distance on an `n`x`n` torus: each axis may go the short way
/// round.
#[must_use]
pub fn wrapped_distance(a: Cell, b: Cell, n: i64) -> i64 {
    let axis = |p: i64, q: i64| {
        let d = (p - q).abs();
        d.min(n - d)
    };
    axis(a.x, b.x) + axis(a.y, b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_distance_when_no_shortcut() {
        assert_eq!(wrapped_distance(Cell::new(2, 2), Cell::new(4, 5), 10), 5);
    }

    #[test]
    fn takes_the_short_way_round() {
        assert_eq!(wrapped_distance(Cell::new(1, 1), Cell::new(10, 10), 10), 2);
        assert_eq!(wrapped_distance(Cell::new(3, 1), Cell::new(3, 9), 10), 2);
    }
}
