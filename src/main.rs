//! Gridlock entry point.
//!
//! Builds one shared game, spawns one thread per player, joins both,
//! and reports the final outcome.

#![warn(missing_docs)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use gridlock::cli::{Cli, StrategyKind};
use gridlock::{
    Actor, ConsoleRender, GameState, Player, Render, Sequential, SilentRender, Stochastic,
    Strategy,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let render: Box<dyn Render> = if cli.quiet {
        Box::new(SilentRender)
    } else {
        Box::new(ConsoleRender::new())
    };
    let game = Arc::new(GameState::new(render));
    let pause = Duration::from_millis(cli.pause_ms);

    info!(x = ?cli.x_strategy, o = ?cli.o_strategy, "starting duel");

    let mut handles = Vec::new();
    for (player, kind) in [(Player::X, cli.x_strategy), (Player::O, cli.o_strategy)] {
        let strategy = build_strategy(kind, cli.seed, player);
        let mut actor = Actor::new(Arc::clone(&game), player, strategy, pause);
        let handle = thread::Builder::new()
            .name(format!("player-{player}"))
            .spawn(move || actor.run())
            .with_context(|| format!("failed to spawn thread for player {player}"))?;
        handles.push(handle);
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("actor thread panicked"))?;
    }

    println!("{}", game.outcome());
    Ok(())
}

fn build_strategy(kind: StrategyKind, seed: Option<u64>, player: Player) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Sequential => Box::new(Sequential::new()),
        StrategyKind::Stochastic => match seed {
            // Offset per player so the two streams never coincide.
            Some(seed) => Box::new(Stochastic::seeded(seed.wrapping_add(player as u64))),
            None => Box::new(Stochastic::new()),
        },
    }
}
