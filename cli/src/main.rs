use anyhow::Context;
use clap::{Parser, ValueEnum};
use demine_core::Board;
use rand::SeedableRng;
use rand::rngs::SmallRng;

mod console;
mod game;
mod screen;

/// Minesweeper, console edition.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of rows
    #[arg(short, long, default_value_t = 10)]
    rows: u16,

    /// Number of columns
    #[arg(short, long, default_value_t = 10)]
    cols: u16,

    /// Number of mines
    #[arg(short, long, default_value_t = 10)]
    mines: u32,

    /// Seed for a reproducible mine layout
    #[arg(long)]
    seed: Option<u64>,

    /// Frontend to play in
    #[arg(long, value_enum, default_value_t = Ui::Prompt)]
    ui: Ui,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Ui {
    /// Line mode, one command per turn
    Prompt,
    /// Full screen with mouse support
    Screen,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut board = match cli.seed {
        Some(seed) => Board::with_rng(
            cli.rows,
            cli.cols,
            cli.mines,
            &mut SmallRng::seed_from_u64(seed),
        ),
        None => Board::new(cli.rows, cli.cols, cli.mines),
    }
    .context("could not set up the board")?;

    let outcome = match cli.ui {
        Ui::Prompt => console::run(&mut board)?,
        Ui::Screen => screen::run(&mut board)?,
    };
    log::debug!("session ended: {outcome:?}");

    Ok(())
}
