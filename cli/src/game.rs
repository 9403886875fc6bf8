use demine_core::{CellValue, CellView, RevealOutcome};

/// How a frontend session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Quit,
}

pub const WINNER_TEXT: &str = "A winner is you!";
pub const LOSER_TEXT: &str = "There was a mine!";

/// Session outcome and closing banner for a game-ending reveal.
pub fn verdict(outcome: RevealOutcome) -> (GameOutcome, &'static str) {
    match outcome {
        RevealOutcome::Win => (GameOutcome::Won, WINNER_TEXT),
        _ => (GameOutcome::Lost, LOSER_TEXT),
    }
}

const COVERED: char = '▒';
const MARKED: char = '■';
const MINE: char = '¤';

/// Single-character rendering of one cell. Mines only show through once the
/// game is over and `show_mines` is set.
pub fn cell_glyph(cell: CellView, show_mines: bool) -> char {
    if cell.is_discovered() {
        match cell.value() {
            CellValue::Hint(0) => ' ',
            CellValue::Hint(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            CellValue::Mine => MINE,
        }
    } else if show_mines && cell.has_mine() {
        MINE
    } else if cell.is_marked() {
        MARKED
    } else {
        COVERED
    }
}

/// One board row as displayed, glyphs separated by single spaces.
pub fn render_line(cells: impl Iterator<Item = CellView>, show_mines: bool) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(cell_glyph(cell, show_mines));
    }
    line
}

#[cfg(test)]
mod tests {
    use demine_core::Board;

    use super::*;

    fn sample() -> Board {
        // mine on the left, a one-hint in the middle, empty on the right
        Board::with_mines(1, 3, [(0, 0)]).unwrap()
    }

    #[test]
    fn verdicts_pair_each_ending_with_its_banner() {
        assert_eq!(verdict(RevealOutcome::Win), (GameOutcome::Won, WINNER_TEXT));
        assert_eq!(verdict(RevealOutcome::Bomb), (GameOutcome::Lost, LOSER_TEXT));
    }

    #[test]
    fn covered_and_marked_cells_hide_their_value() {
        let mut board = sample();

        assert_eq!(cell_glyph(board.cell((0, 0)).unwrap(), false), '▒');

        board.toggle_mark((0, 0)).unwrap();
        assert_eq!(cell_glyph(board.cell((0, 0)).unwrap(), false), '■');
    }

    #[test]
    fn mines_show_through_only_when_requested() {
        let board = sample();

        assert_eq!(cell_glyph(board.cell((0, 0)).unwrap(), true), '¤');
        assert_eq!(cell_glyph(board.cell((2, 0)).unwrap(), true), '▒');
    }

    #[test]
    fn discovered_cells_show_hints_and_blanks() {
        let mut board = sample();
        board.reveal((2, 0)).unwrap();

        assert_eq!(cell_glyph(board.cell((1, 0)).unwrap(), false), '1');
        assert_eq!(cell_glyph(board.cell((2, 0)).unwrap(), false), ' ');
    }

    #[test]
    fn lines_join_glyphs_with_spaces() {
        let mut board = sample();
        board.reveal((2, 0)).unwrap();

        assert_eq!(render_line(board.row(0).unwrap(), false), "▒ 1  ");
        assert_eq!(render_line(board.row(0).unwrap(), true), "¤ 1  ");
    }
}
