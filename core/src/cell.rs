use serde::{Deserialize, Serialize};

/// What a cell permanently holds: a mine, or the count of mines adjacent to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Hint(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// The adjacent-mine count, `None` for a mine.
    pub const fn hint(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Hint(count) => Some(count),
        }
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        if let Self::Hint(count) = self {
            *count += 1;
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Hint(0)
    }
}

/// Player-visible lifecycle of a cell. `Discovered` is terminal, the other
/// two toggle through marking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Undiscovered,
    Marked,
    Discovered,
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Undiscovered
    }
}

/// Read-only snapshot of a single cell, as handed out to frontends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    value: CellValue,
    status: CellStatus,
}

impl CellView {
    pub(crate) const fn new(value: CellValue, status: CellStatus) -> Self {
        Self { value, status }
    }

    pub const fn value(self) -> CellValue {
        self.value
    }

    pub const fn status(self) -> CellStatus {
        self.status
    }

    pub const fn has_mine(self) -> bool {
        self.value.is_mine()
    }

    pub const fn is_marked(self) -> bool {
        matches!(self.status, CellStatus::Marked)
    }

    pub const fn is_discovered(self) -> bool {
        matches!(self.status, CellStatus::Discovered)
    }

    /// Whether the cell is mine-free with no mines around it.
    pub const fn is_empty(self) -> bool {
        matches!(self.value, CellValue::Hint(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_accumulate_adjacent_mines() {
        let mut value = CellValue::default();
        value.add_adjacent_mine();
        value.add_adjacent_mine();

        assert_eq!(value, CellValue::Hint(2));
        assert_eq!(value.hint(), Some(2));
    }

    #[test]
    fn mines_keep_their_sentinel() {
        let mut value = CellValue::Mine;
        value.add_adjacent_mine();

        assert_eq!(value, CellValue::Mine);
        assert_eq!(value.hint(), None);
    }
}
