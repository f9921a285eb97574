//! `meals`: sort a plain-text meal ledger in place.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
