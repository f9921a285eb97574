use std::path::{Path, PathBuf};

mod check;
mod export;
mod sort;
mod terminal;

use clap::ArgAction;
use meal_ledger::{Config, NameKey, ParseMode};
use tracing::{debug, instrument};

/// The configuration file picked up from the working directory when
/// `--config` isn't given.
const DEFAULT_CONFIG: &str = "meals.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The ledger file to normalize [default: meals.txt]
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Path to a TOML configuration file [default: meals.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// How meals are recognised: 'blocks' (split on blank lines) or 'lines'
    /// (titles start with a symbol)
    #[arg(long, global = true)]
    mode: Option<ParseMode>,

    /// How quantified ingredients are sorted: 'pattern' or 'first-word'
    #[arg(long, global = true)]
    name_key: Option<NameKey>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(mut self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .take()
            .unwrap_or_else(|| Command::Sort(sort::Command::default()))
            .run(&self)
    }

    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
    }

    /// Loads the configuration and applies command-line overrides.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config_path();
        let mut config = if self.config.is_some() || path.exists() {
            debug!(path = %path.display(), "loading configuration");
            Config::load(&path).map_err(anyhow::Error::msg)?
        } else {
            Config::default()
        };

        if let Some(file) = &self.file {
            config.set_ledger(file.clone());
        }
        if let Some(mode) = self.mode {
            config.set_mode(mode);
        }
        if let Some(name_key) = self.name_key {
            config.set_name_key(name_key);
        }

        Ok(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Sort meals and ingredients and rewrite the ledger (default)
    Sort(sort::Command),

    /// Check whether the ledger is already normalized
    ///
    /// Exits with code 2 if normalizing would change the file.
    Check(check::Command),

    /// Print the normalized ledger as JSON
    Export(export::Command),

    /// Write a default configuration file
    Init(Init),
}

impl Command {
    fn run(self, cli: &Cli) -> anyhow::Result<()> {
        match self {
            Self::Sort(command) => command.run(&cli.load_config()?)?,
            Self::Check(command) => command.run(&cli.load_config()?)?,
            Self::Export(command) => command.run(&cli.load_config()?)?,
            Self::Init(command) => command.run(&cli.config_path())?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    fn run(self, path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Configuration already exists (found {})",
                path.display()
            );
        }

        Config::default()
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

        println!("Created {}", path.display());
        Ok(())
    }
}
