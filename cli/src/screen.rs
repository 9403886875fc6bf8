use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use demine_core::{Board, Coord};

use crate::game::{GameOutcome, render_line, verdict};

const GRID_OFFSET_X: u16 = 2;
const GRID_OFFSET_Y: u16 = 2;

/// Raw-mode alternate-screen session, restored on drop so the terminal
/// comes back even on early returns.
struct Screen {
    out: Stdout,
}

impl Screen {
    fn enter() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self { out })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Runs the full-screen loop: left click uncovers, or marks while mark mode
/// is on, `m` toggles mark mode, `q` or ctrl-c quits.
pub fn run(board: &mut Board) -> anyhow::Result<GameOutcome> {
    let mut screen = Screen::enter()?;
    let mut mark_mode = false;

    loop {
        draw(&mut screen.out, board, mark_mode, false)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(GameOutcome::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(GameOutcome::Quit);
                }
                KeyCode::Char('m') => mark_mode = !mark_mode,
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let Some(coords) = cell_under(board, mouse.column, mouse.row) else {
                    continue;
                };

                if mark_mode {
                    board.toggle_mark(coords)?;
                } else {
                    let outcome = board.reveal(coords)?;
                    if outcome.is_game_over() {
                        let (result, msg) = verdict(outcome);
                        return end_screen(&mut screen.out, board, mark_mode, msg, result);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Shows the final board with the mines uncovered plus the end message, then
/// waits for a key press.
fn end_screen(
    out: &mut Stdout,
    board: &Board,
    mark_mode: bool,
    msg: &str,
    outcome: GameOutcome,
) -> anyhow::Result<GameOutcome> {
    draw(out, board, mark_mode, true)?;

    let (width, height) = terminal::size()?;
    let x = (width / 2).saturating_sub(msg.len() as u16 / 2);
    let y = (height / 2).saturating_sub(2);
    queue!(
        out,
        MoveTo(x, y),
        SetAttribute(Attribute::Reverse),
        Print(msg),
        SetAttribute(Attribute::Reset)
    )?;
    out.flush()?;

    wait_for_key()?;
    Ok(outcome)
}

fn wait_for_key() -> anyhow::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn draw(out: &mut Stdout, board: &Board, mark_mode: bool, show_mines: bool) -> anyhow::Result<()> {
    let (width, height) = terminal::size()?;

    queue!(out, Clear(ClearType::All))?;
    for y in 0..board.num_rows() {
        let line = render_line(board.row(y)?, show_mines);
        queue!(
            out,
            MoveTo(GRID_OFFSET_X, GRID_OFFSET_Y.saturating_add(y)),
            Print(line)
        )?;
    }

    let mut statusbar = format!(
        " demine | (q)uit | toggle (m)ark mode | Remaining [{}/{}]",
        board.mines_remaining(),
        board.num_mines()
    );
    if mark_mode {
        statusbar.push_str(" | [MARKING]");
    }
    statusbar.truncate(usize::from(width));

    let padding = " ".repeat(usize::from(width).saturating_sub(statusbar.len()));
    queue!(
        out,
        MoveTo(0, height.saturating_sub(1)),
        SetAttribute(Attribute::Reverse),
        Print(statusbar),
        Print(padding),
        SetAttribute(Attribute::Reset)
    )?;
    out.flush()?;
    Ok(())
}

/// The cell under a terminal position. Glyphs sit two columns apart, so
/// clicks on the spacer columns miss.
fn cell_under(board: &Board, column: u16, row: u16) -> Option<Coord> {
    let x = column.checked_sub(GRID_OFFSET_X)?;
    let y = row.checked_sub(GRID_OFFSET_Y)?;
    if x % 2 != 0 {
        return None;
    }

    let coords = (x / 2, y);
    (coords.0 < board.num_cols() && coords.1 < board.num_rows()).then_some(coords)
}
