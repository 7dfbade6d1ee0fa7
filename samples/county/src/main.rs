//! County browser entry point.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use avlmap::map::AvlTreeMap;
use clap::Parser;
use county::{Console, ConsoleConfig, seed_map};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,county=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ConsoleConfig::parse();
    tracing::info!(data = %config.data.display(), show_steps = config.show_steps, "starting");

    let file = File::open(&config.data)
        .with_context(|| format!("cannot open {}", config.data.display()))?;
    let mut map = AvlTreeMap::new();
    seed_map(BufReader::new(file), &mut map)
        .with_context(|| format!("cannot load {}", config.data.display()))?;
    println!("AVL tree has been created\n");

    let stdin = io::stdin();
    let mut console = Console::new(map, stdin.lock(), io::stdout(), config.show_steps);
    console.run()?;

    tracing::info!("stopped");
    Ok(())
}
