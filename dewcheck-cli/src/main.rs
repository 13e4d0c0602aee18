use anyhow::Result;
use clap::Parser;

use dewcheck_cli::cli::{run, Cli};
use dewcheck_cli::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
