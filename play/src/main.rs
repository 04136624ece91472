//! Generate a board, run a scripted list of actions against it, and print the board after each one.
//!
//! ```text
//! play --width 4 --height 3 --seed 7 rotate:1,0 move:east tick regen:9
//! ```

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use lightwire::{Direction, Game, GameBuilder, Location};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Play a scripted game of lightwire")]
struct Cli {
    /// Board width in tiles.
    #[arg(long, default_value_t = 8)]
    width: usize,
    /// Board height in tiles.
    #[arg(long, default_value_t = 8)]
    height: usize,
    /// Seed for generation.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Starting column of the power station.
    #[arg(long, default_value_t = 0)]
    source_col: usize,
    /// Starting row of the power station.
    #[arg(long, default_value_t = 0)]
    source_row: usize,
    /// Actions to apply in order: `rotate:COL,ROW`, `move:DIRECTION`, `tick`, `regen` or `regen:SEED`.
    actions: Vec<Action>,
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Rotate { col: usize, row: usize },
    Move(Direction),
    Tick,
    Regenerate(Option<u64>),
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (verb, arg) = s.split_once(':').map_or((s, None), |(verb, arg)| (verb, Some(arg)));

        Ok(match (verb, arg) {
            ("rotate", Some(arg)) => {
                let (col, row) = arg.split_once(',').ok_or_else(|| anyhow!("expected COL,ROW in `{s}`"))?;
                Action::Rotate {
                    col: col.trim().parse().with_context(|| format!("bad column in `{s}`"))?,
                    row: row.trim().parse().with_context(|| format!("bad row in `{s}`"))?,
                }
            }
            ("move", Some(arg)) => Action::Move(Direction::from_str(arg).with_context(|| format!("bad direction in `{s}`"))?),
            ("tick", None) => Action::Tick,
            ("regen", None) => Action::Regenerate(None),
            ("regen", Some(arg)) => Action::Regenerate(Some(arg.parse().with_context(|| format!("bad seed in `{s}`"))?)),
            _ => bail!("unknown action `{s}`"),
        })
    }
}

fn apply(game: &mut Game, action: Action) -> Result<bool> {
    Ok(match action {
        Action::Rotate { col, row } => game.rotate_cell(col, row),
        Action::Move(direction) => game.move_power_station(direction),
        Action::Tick => {
            game.tick();
            true
        }
        Action::Regenerate(seed) => {
            game.regenerate(seed)?;
            true
        }
    })
}

fn show(game: &Game) {
    let board = game.board();
    for (wires, power) in board.to_string().lines().zip(board.power_map().lines()) {
        println!("{wires}  {power}");
    }
    println!(
        "powered {}/{}  moves {}  elapsed {}{}",
        game.reach().len(),
        board.cell_count(),
        game.moves(),
        game.elapsed(),
        if game.won() { "  won!" } else { "" },
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut game = GameBuilder::with_dims(cli.width, cli.height)
        .seed(cli.seed)
        .power_source(Location(cli.source_col, cli.source_row))
        .build()
        .context("failed to start a game")?;

    show(&game);
    for action in cli.actions {
        let applied = apply(&mut game, action)?;
        info!(?action, applied, "action");
        println!();
        println!("{action:?}{}", if applied { "" } else { " (ignored)" });
        show(&game);
    }

    Ok(())
}
