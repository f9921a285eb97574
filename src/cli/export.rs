use meal_ledger::{Config, LedgerFile, storage::export};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Print the JSON on a single line
    #[arg(long)]
    compact: bool,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let file = LedgerFile::new(config.ledger());
        let normalized = file.normalized(config.options())?;

        println!("{}", export::to_json(normalized.ledger(), !self.compact)?);
        Ok(())
    }
}
