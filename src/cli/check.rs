use meal_ledger::{Config, LedgerFile};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Suppress output
    #[arg(long, short)]
    quiet: bool,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        if !self.is_normalized(config)? {
            std::process::exit(2);
        }
        Ok(())
    }

    /// Reports whether the ledger is already normalized. Never writes.
    fn is_normalized(&self, config: &Config) -> anyhow::Result<bool> {
        let file = LedgerFile::new(config.ledger());
        let normalized = file.normalized(config.options())?;
        let meals = normalized.ledger().len();

        if normalized.is_changed() {
            if !self.quiet {
                println!(
                    "{}",
                    format!("⚠️  {} is not normalized ({meals} meals)", file.path().display())
                        .warning()
                );
            }
            return Ok(false);
        }

        if !self.quiet {
            println!(
                "{}",
                format!("✅ {} is normalized ({meals} meals)", file.path().display()).success()
            );
        }
        Ok(true)
    }
}
