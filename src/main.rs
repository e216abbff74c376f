use std::process;

use anyhow::Context;
use log::info;

use mahjong_table::core::{GameError, TableConfig};
use mahjong_table::table::{StdConsole, Table};

fn run() -> anyhow::Result<()> {
    let seed: u64 = rand::random();
    info!("starting table with seed {}", seed);

    let mut table = Table::deal(TableConfig::classic(), seed, StdConsole::stdio())
        .context("failed to deal the opening hands")?;
    let result = table.run().context("the game ended without a winner")?;
    info!("{} won with {}", result.winner, result.shape);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    if let Err(err) = run() {
        // End of input is the operator leaving, not a failure.
        if matches!(err.downcast_ref::<GameError>(), Some(GameError::InputClosed)) {
            return;
        }
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
