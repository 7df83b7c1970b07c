use std::io;

use clap::Parser;
use clap_verbosity_flag::Verbosity;

mod position;
mod render;
mod repl;
mod session;

#[derive(Parser, Debug)]
#[command(name = "sapador", version, about = "Terminal Minesweeper")]
struct Cli {
    /// Base RNG seed; every new game consumes one value from it
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let base_seed = cli.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });
    log::debug!("base seed: {base_seed}");

    let stdin = io::stdin();
    repl::run(stdin.lock(), &mut io::stdout(), base_seed)
}
