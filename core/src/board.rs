use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single game's grid: the fixed mine layout plus every cell's discovery
/// status, with the reveal and mark moves of the rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    values: Array2<CellValue>,
    statuses: Array2<CellStatus>,
    mine_locations: HashSet<Coord>,
    num_rows: Axis,
    num_cols: Axis,
    num_mines: CellCount,
    marked_count: CellCount,
    undiscovered_count: CellCount,
}

impl Board {
    /// Builds a board with `num_mines` mines placed uniformly at random.
    pub fn new(num_rows: Axis, num_cols: Axis, num_mines: CellCount) -> Result<Self> {
        Self::with_rng(num_rows, num_cols, num_mines, &mut rand::rng())
    }

    /// Like [`Board::new`] with an injected random source, so a seeded rng
    /// reproduces the same layout.
    pub fn with_rng(
        num_rows: Axis,
        num_cols: Axis,
        num_mines: CellCount,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        if num_mines >= mult(num_rows, num_cols) {
            return Err(BoardError::TooManyMines);
        }

        let mine_locations = place_mines(num_rows, num_cols, num_mines, rng);
        Ok(Self::build(num_rows, num_cols, mine_locations))
    }

    /// Builds a board with an explicit mine layout. Duplicate coordinates
    /// collapse into one mine; at least one cell must stay clear.
    pub fn with_mines(
        num_rows: Axis,
        num_cols: Axis,
        mines: impl IntoIterator<Item = Coord>,
    ) -> Result<Self> {
        let mut mine_locations = HashSet::new();
        for (x, y) in mines {
            if x >= num_cols || y >= num_rows {
                return Err(BoardError::OutOfBounds);
            }
            mine_locations.insert((x, y));
        }

        if mine_locations.len() as CellCount >= mult(num_rows, num_cols) {
            return Err(BoardError::TooManyMines);
        }

        Ok(Self::build(num_rows, num_cols, mine_locations))
    }

    fn build(num_rows: Axis, num_cols: Axis, mine_locations: HashSet<Coord>) -> Self {
        let dim = (num_rows as usize, num_cols as usize);
        let mut values: Array2<CellValue> = Array2::default(dim);

        for &coords in &mine_locations {
            values[nd(coords)] = CellValue::Mine;
            for pos in Neighbors::of(coords, (num_cols, num_rows)) {
                values[nd(pos)].add_adjacent_mine();
            }
        }

        let num_mines = mine_locations.len() as CellCount;
        log::debug!("built a {num_rows}x{num_cols} board with {num_mines} mines");

        Self {
            statuses: Array2::default(dim),
            undiscovered_count: mult(num_rows, num_cols) - num_mines,
            values,
            mine_locations,
            num_rows,
            num_cols,
            num_mines,
            marked_count: 0,
        }
    }

    pub fn num_rows(&self) -> Axis {
        self.num_rows
    }

    pub fn num_cols(&self) -> Axis {
        self.num_cols
    }

    pub fn num_mines(&self) -> CellCount {
        self.num_mines
    }

    /// Mines minus marks, for display. Over-marking drives it negative.
    pub fn mines_remaining(&self) -> i64 {
        i64::from(self.num_mines) - i64::from(self.marked_count)
    }

    /// Snapshot of a single cell.
    pub fn cell(&self, coords: Coord) -> Result<CellView> {
        let coords = self.validate(coords)?;
        Ok(CellView::new(self.values[nd(coords)], self.statuses[nd(coords)]))
    }

    /// Snapshots of one row of cells, ordered by column.
    pub fn row(&self, y: Axis) -> Result<impl Iterator<Item = CellView> + '_> {
        if y >= self.num_rows {
            return Err(BoardError::OutOfBounds);
        }

        let y = y as usize;
        Ok(self
            .values
            .row(y)
            .into_iter()
            .zip(self.statuses.row(y))
            .map(|(&value, &status)| CellView::new(value, status)))
    }

    /// Reveals the cell at `coords`.
    ///
    /// An empty cell uncovers its whole connected empty region plus the
    /// hinted border around it, a hinted cell uncovers just itself. Marked
    /// and already discovered cells are left alone. A mine ends the game
    /// without mutating anything, so the board still shows the state from
    /// just before the losing move.
    pub fn reveal(&mut self, coords: Coord) -> Result<RevealOutcome> {
        let coords = self.validate(coords)?;

        if self.statuses[nd(coords)] != CellStatus::Undiscovered {
            return Ok(RevealOutcome::Continue);
        }
        if self.values[nd(coords)].is_mine() {
            log::debug!("mine hit at {coords:?}");
            return Ok(RevealOutcome::Bomb);
        }

        let region = self.discoverable_region(coords);
        log::debug!("revealing {} cells from {coords:?}", region.len());
        for pos in region {
            self.statuses[nd(pos)] = CellStatus::Discovered;
            self.undiscovered_count -= 1;
        }

        Ok(if self.undiscovered_count == 0 {
            RevealOutcome::Win
        } else {
            RevealOutcome::Continue
        })
    }

    /// Collects the cells a reveal at `start` discovers: `start` alone when
    /// it carries a hint, otherwise the connected empty region in
    /// breadth-first order followed by its hinted border.
    fn discoverable_region(&self, start: Coord) -> Vec<Coord> {
        if self.values[nd(start)] != CellValue::Hint(0) {
            return vec![start];
        }

        log::trace!("starting flood fill from {start:?}");
        let mut region = Vec::new();
        let mut seen = HashSet::from([start]);
        let mut frontier = VecDeque::from([start]);
        let mut border = HashSet::new();

        while let Some(current) = frontier.pop_front() {
            for pos in self.neighbors(current) {
                if !seen.insert(pos) || self.statuses[nd(pos)] != CellStatus::Undiscovered {
                    continue;
                }

                match self.values[nd(pos)] {
                    CellValue::Hint(0) => frontier.push_back(pos),
                    CellValue::Hint(_) => {
                        border.insert(pos);
                    }
                    // a flood must never uncover a mine
                    CellValue::Mine => {}
                }
            }
            log::trace!("flood discovered {current:?}");
            region.push(current);
        }

        region.extend(border);
        region
    }

    /// Toggles the advisory mark on an undiscovered cell. Marks on
    /// discovered cells are refused silently.
    pub fn toggle_mark(&mut self, coords: Coord) -> Result<()> {
        let coords = self.validate(coords)?;

        match self.statuses[nd(coords)] {
            CellStatus::Undiscovered => {
                self.statuses[nd(coords)] = CellStatus::Marked;
                self.marked_count += 1;
            }
            CellStatus::Marked => {
                self.statuses[nd(coords)] = CellStatus::Undiscovered;
                self.marked_count -= 1;
            }
            CellStatus::Discovered => {}
        }
        Ok(())
    }

    fn validate(&self, coords: Coord) -> Result<Coord> {
        if coords.0 < self.num_cols && coords.1 < self.num_rows {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    fn neighbors(&self, coords: Coord) -> Neighbors {
        Neighbors::of(coords, (self.num_cols, self.num_rows))
    }
}
