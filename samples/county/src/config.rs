//! Command-line configuration.
//!
//! Every option can also be supplied through an environment variable.

use std::path::PathBuf;

use clap::Parser;

/// Browse county records held in an AVL tree map.
#[derive(Clone, Debug, Parser)]
#[command(name = "county", version, about)]
pub struct ConsoleConfig {
    /// Seed file with one `code,population,"name"` record per line.
    #[arg(long, env = "COUNTY_DATA", default_value = "p4small.txt")]
    pub data: PathBuf,

    /// Print the number of key comparisons made by searches and inserts.
    #[arg(long, env = "COUNTY_SHOW_STEPS")]
    pub show_steps: bool,
}
