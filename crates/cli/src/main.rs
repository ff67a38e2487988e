mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    docflow_observability::init();

    let cli = cli::Cli::parse();
    cli.run(&mut std::io::stdout().lock())
}
