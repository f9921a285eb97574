use meal_ledger::{Config, LedgerFile};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, Default, clap::Parser)]
pub struct Command {
    /// Print the normalized ledger instead of rewriting the file
    #[arg(long)]
    dry_run: bool,

    /// Suppress output
    #[arg(long, short)]
    quiet: bool,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let file = LedgerFile::new(config.ledger());
        let normalized = file.normalized(config.options())?;

        if self.dry_run {
            print!("{}", normalized.rendered());
            return Ok(());
        }

        file.write(&normalized)?;

        if !self.quiet {
            println!(
                "{}",
                format!(
                    "✅ Alphabetized {} meals in {}",
                    normalized.ledger().len(),
                    file.path().display()
                )
                .success()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn rewrites_configured_ledger() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("meals.txt");
        fs::write(&path, "Tea\nwater\n2 tea bags\n\nCoffee\n1 cup beans\n").unwrap();
        let mut config = Config::default();
        config.set_ledger(path.clone());

        let command = Command {
            dry_run: false,
            quiet: true,
        };
        command.run(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Coffee\n1 cup beans\n\nTea\n2 tea bags\nwater\n"
        );
    }

    #[test]
    fn dry_run_leaves_file_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("meals.txt");
        let content = "Tea\nwater\n2 tea bags\n";
        fs::write(&path, content).unwrap();
        let mut config = Config::default();
        config.set_ledger(path.clone());

        let command = Command {
            dry_run: true,
            quiet: true,
        };
        command.run(&config).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn missing_ledger_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("meals.txt");
        let mut config = Config::default();
        config.set_ledger(path.clone());

        let error = Command::default().run(&config).unwrap_err();

        assert!(error.to_string().ends_with("meals.txt not found"));
        assert!(!path.exists());
    }
}
