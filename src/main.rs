use anyhow::Result;
use clap::Parser;

use dexidoc::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
