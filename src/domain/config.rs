use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{domain::NameKey, pipeline::Options, storage::ParseMode};

/// Configuration for normalizing a meal ledger.
///
/// This struct holds the location of the ledger and the settings that
/// control how it is parsed and sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The path of the ledger file.
    ///
    /// Relative paths are resolved against the working directory.
    ledger: PathBuf,

    /// How the ledger text is split into meals.
    mode: ParseMode,

    /// How quantified ingredients are keyed when sorting.
    name_key: NameKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            mode: ParseMode::default(),
            name_key: NameKey::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the path of the ledger file.
    #[must_use]
    pub fn ledger(&self) -> &Path {
        &self.ledger
    }

    /// Returns the parse mode.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Returns the name key used for quantified ingredients.
    #[must_use]
    pub const fn name_key(&self) -> NameKey {
        self.name_key
    }

    /// Returns the pipeline options described by this configuration.
    #[must_use]
    pub const fn options(&self) -> Options {
        Options {
            mode: self.mode,
            name_key: self.name_key,
        }
    }

    /// Sets the path of the ledger file.
    pub fn set_ledger(&mut self, path: PathBuf) {
        self.ledger = path;
    }

    /// Sets the parse mode.
    pub const fn set_mode(&mut self, mode: ParseMode) {
        self.mode = mode;
    }

    /// Sets the name key used for quantified ingredients.
    pub const fn set_name_key(&mut self, name_key: NameKey) {
        self.name_key = name_key;
    }
}

fn default_ledger() -> PathBuf {
    PathBuf::from("meals.txt")
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_ledger")]
        ledger: PathBuf,

        #[serde(default)]
        mode: ParseMode,

        /// How quantified ingredients are keyed when sorting.
        ///
        /// Either `pattern` (strip a leading amount and compare the rest) or
        /// `first-word` (drop the first word and compare case-insensitively).
        #[serde(default)]
        name_key: NameKey,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                ledger,
                mode,
                name_key,
            } => Self {
                ledger,
                mode,
                name_key,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            ledger: config.ledger,
            mode: config.mode,
            name_key: config.name_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nledger = \"recipes/meals.txt\"\nmode = \"lines\"\nname_key = \"first-word\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.ledger(), Path::new("recipes/meals.txt"));
        assert_eq!(config.mode(), ParseMode::Lines);
        assert_eq!(config.name_key(), NameKey::FirstWord);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmode = \"paragraphs\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("meals.toml");

        let mut config = Config::default();
        config.set_mode(ParseMode::Lines);
        config.set_name_key(NameKey::FirstWord);
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn defaults_match_original_behaviour() {
        let config = Config::default();
        assert_eq!(config.ledger(), Path::new("meals.txt"));
        assert_eq!(config.options(), Options::default());
    }
}
