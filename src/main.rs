use anyhow::Result;
use clap::Parser;
use finledger::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
