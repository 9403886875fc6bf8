/// Single coordinate axis used for board width, height, and positions.
pub type Axis = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord = (Axis, Axis);

pub const fn mult(a: Axis, b: Axis) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a * b
}

/// ndarray index of a coordinate; the grids are stored row-major.
pub(crate) const fn nd((x, y): Coord) -> [usize; 2] {
    [y as usize, x as usize]
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord, delta: (i16, i16), bounds: Coord) -> Option<Coord> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterator over the in-bounds neighbors of a cell, diagonals included.
#[derive(Debug)]
pub struct Neighbors {
    center: Coord,
    bounds: Coord,
    index: u8,
}

impl Neighbors {
    /// `bounds` is `(num_cols, num_rows)`, exclusive on both axes.
    pub fn of(center: Coord, bounds: Coord) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        while usize::from(self.index) < DISPLACEMENTS.len() {
            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord, bounds: Coord) -> Vec<Coord> {
        Neighbors::of(center, bounds).collect()
    }

    #[test]
    fn interior_cells_have_eight_neighbors() {
        let neighbors = collect((1, 1), (3, 3));

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_cells_have_three_neighbors() {
        assert_eq!(collect((0, 0), (3, 3)), vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(collect((2, 2), (3, 3)), vec![(1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn edge_cells_have_five_neighbors() {
        assert_eq!(collect((1, 0), (3, 3)).len(), 5);
        assert_eq!(collect((0, 1), (3, 3)).len(), 5);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }
}
