use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use demine_core::{Axis, Board, Coord};

use crate::game::{GameOutcome, render_line, verdict};

/// Labels addressing rows and columns at the prompt, one character each.
const AXIS_LABELS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Uncover(Coord),
    Mark(Coord),
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    let mut chars = input.chars();
    let cmd = chars.next()?.to_ascii_lowercase();
    if cmd == 'q' {
        return Some(Command::Quit);
    }

    let x = label_index(chars.next()?)?;
    let y = label_index(chars.next()?)?;
    match cmd {
        'u' => Some(Command::Uncover((x, y))),
        'm' => Some(Command::Mark((x, y))),
        _ => None,
    }
}

fn label_index(label: char) -> Option<Axis> {
    AXIS_LABELS.find(label).map(|index| index as Axis)
}

/// Runs the line-mode loop on stdin/stdout until the game ends. Malformed
/// or out-of-bounds commands re-prompt without side effects.
pub fn run(board: &mut Board) -> anyhow::Result<GameOutcome> {
    if usize::from(board.num_rows()) > AXIS_LABELS.len()
        || usize::from(board.num_cols()) > AXIS_LABELS.len()
    {
        anyhow::bail!(
            "board too large for the prompt frontend, at most {0}x{0}, try --ui screen",
            AXIS_LABELS.len()
        );
    }

    let mut out = io::stdout();
    let stdin = io::stdin();
    loop {
        render(&mut out, board, None, false)?;
        write!(out, "(U)ncover [Uxy], (M)ark [Mxy], (Q)uit: ")?;
        out.flush()?;

        let mut response = String::new();
        if stdin.read_line(&mut response)? == 0 {
            // EOF on stdin counts as quitting
            return Ok(GameOutcome::Quit);
        }

        match parse_command(response.trim()) {
            Some(Command::Quit) => return Ok(GameOutcome::Quit),
            Some(Command::Uncover(coords)) => match board.reveal(coords) {
                Ok(outcome) if outcome.is_game_over() => {
                    let (result, msg) = verdict(outcome);
                    render(&mut out, board, Some(msg), true)?;
                    return Ok(result);
                }
                Ok(_) => {}
                Err(err) => log::debug!("uncover refused: {err}"),
            },
            Some(Command::Mark(coords)) => {
                if let Err(err) = board.toggle_mark(coords) {
                    log::debug!("mark refused: {err}");
                }
            }
            None => {}
        }
    }
}

fn render(
    out: &mut impl Write,
    board: &Board,
    msg: Option<&str>,
    show_mines: bool,
) -> anyhow::Result<()> {
    let rows = usize::from(board.num_rows());
    let cols = usize::from(board.num_cols());

    let mut axis_x = String::new();
    for (i, label) in AXIS_LABELS[..cols].chars().enumerate() {
        if i > 0 {
            axis_x.push(' ');
        }
        axis_x.push(label);
    }

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    if let Some(msg) = msg {
        writeln!(out, "{msg}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        " {}/{} Remaining\n",
        board.mines_remaining(),
        board.num_mines()
    )?;
    writeln!(out, "    {axis_x}")?;
    writeln!(out, "   ╔{}╗", "═".repeat(axis_x.len()))?;
    for (y, label) in AXIS_LABELS[..rows].chars().enumerate() {
        let line = render_line(board.row(y as Axis)?, show_mines);
        writeln!(out, " {label} ║{line}║{label}")?;
    }
    writeln!(out, "   ╚{}╝", "═".repeat(axis_x.len()))?;
    writeln!(out, "    {axis_x}\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::LOSER_TEXT;

    #[test]
    fn parses_uncover_and_mark_with_label_coordinates() {
        assert_eq!(parse_command("u53"), Some(Command::Uncover((5, 3))));
        assert_eq!(parse_command("Ua0"), Some(Command::Uncover((10, 0))));
        assert_eq!(parse_command("mAA"), Some(Command::Mark((36, 36))));
    }

    #[test]
    fn quit_works_in_any_case_and_ignores_the_rest() {
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("Quit"), Some(Command::Quit));
    }

    #[test]
    fn trailing_characters_after_the_coordinates_are_ignored() {
        assert_eq!(parse_command("u12 whatever"), Some(Command::Uncover((1, 2))));
    }

    #[test]
    fn malformed_commands_are_rejected() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("u5"), None);
        assert_eq!(parse_command("x00"), None);
        assert_eq!(parse_command("u!!"), None);
    }

    #[test]
    fn the_frame_wraps_the_grid() {
        let board = Board::with_mines(2, 3, [(0, 0)]).unwrap();
        let mut out = Vec::new();
        render(&mut out, &board, None, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(" 1/1 Remaining"));
        assert!(text.contains("    0 1 2"));
        assert!(text.contains("   ╔═════╗"));
        assert!(text.contains(" 0 ║▒ ▒ ▒║0"));
        assert!(text.contains(" 1 ║▒ ▒ ▒║1"));
        assert!(text.contains("   ╚═════╝"));
    }

    #[test]
    fn the_end_screen_shows_the_message_and_the_mines() {
        let board = Board::with_mines(1, 2, [(0, 0)]).unwrap();
        let mut out = Vec::new();
        render(&mut out, &board, Some(LOSER_TEXT), true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(LOSER_TEXT));
        assert!(text.contains("║¤ ▒║"));
    }
}
