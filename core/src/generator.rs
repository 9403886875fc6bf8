use std::collections::HashSet;

use rand::{Rng, RngExt};

use crate::{Axis, CellCount, Coord, mult};

/// Draws `count` distinct mine coordinates uniformly at random. Both axes are
/// sampled independently and a draw that lands on an existing mine is simply
/// repeated, so the caller must leave at least one cell free or the loop
/// cannot terminate.
pub fn place_mines(
    num_rows: Axis,
    num_cols: Axis,
    count: CellCount,
    rng: &mut impl Rng,
) -> HashSet<Coord> {
    debug_assert!(count < mult(num_rows, num_cols));

    let mut mines = HashSet::with_capacity(count as usize);
    while (mines.len() as CellCount) < count {
        let coords = (rng.random_range(0..num_cols), rng.random_range(0..num_rows));
        mines.insert(coords);
    }
    mines
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn places_the_requested_number_of_distinct_mines() {
        let mut rng = SmallRng::seed_from_u64(7);

        let mines = place_mines(8, 8, 20, &mut rng);

        assert_eq!(mines.len(), 20);
    }

    #[test]
    fn mines_stay_inside_the_board() {
        let mut rng = SmallRng::seed_from_u64(11);

        let mines = place_mines(3, 5, 9, &mut rng);

        assert!(mines.iter().all(|&(x, y)| x < 5 && y < 3));
    }

    #[test]
    fn same_seed_gives_the_same_layout() {
        let first = place_mines(16, 16, 40, &mut SmallRng::seed_from_u64(99));
        let second = place_mines(16, 16, 40, &mut SmallRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn fills_all_but_one_cell_at_maximum_density() {
        let mut rng = SmallRng::seed_from_u64(3);

        let mines = place_mines(2, 2, 3, &mut rng);

        assert_eq!(mines.len(), 3);
    }
}
