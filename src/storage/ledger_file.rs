//! A meal ledger stored in a single text file
//!
//! The whole file is read into memory, normalized, and written back over the
//! same path. Nothing is written unless the file could be read and contains
//! at least one meal.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    domain::Ledger,
    pipeline::{self, Options},
    storage::ParseMode,
};

/// A ledger file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerFile {
    path: PathBuf,
}

/// A normalized ledger, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    ledger: Ledger,
    rendered: String,
    changed: bool,
}

impl Normalized {
    /// The sorted ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The normalized file content.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Returns `true` if the normalized content differs from the file.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        self.changed
    }
}

impl LedgerFile {
    /// Creates a handle for the ledger at `path`. The file is not touched.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the ledger file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole ledger file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file doesn't exist or can't be
    /// read as UTF-8 text.
    pub fn read(&self) -> Result<String, Error> {
        fs::read_to_string(&self.path).map_err(|source| Error::FileNotFound {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads and parses the ledger, without sorting it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file can't be read, or
    /// [`Error::EmptyLedger`] if it contains no meals.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self, mode: ParseMode) -> Result<Ledger, Error> {
        let content = self.read()?;
        let ledger = mode.parse(&content);
        if ledger.is_empty() {
            return Err(Error::EmptyLedger {
                path: self.path.clone(),
            });
        }
        debug!(meals = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Reads the ledger and computes its normalized form, without writing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file can't be read, or
    /// [`Error::EmptyLedger`] if it contains no meals.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn normalized(&self, options: Options) -> Result<Normalized, Error> {
        let content = self.read()?;
        let ledger = pipeline::normalize(&content, options);
        if ledger.is_empty() {
            return Err(Error::EmptyLedger {
                path: self.path.clone(),
            });
        }

        let rendered = ledger.to_string();
        let changed = rendered != content;
        debug!(meals = ledger.len(), changed, "normalized ledger");

        Ok(Normalized {
            ledger,
            rendered,
            changed,
        })
    }

    /// Overwrites the ledger file with normalized content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file can't be written.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn write(&self, normalized: &Normalized) -> Result<(), Error> {
        fs::write(&self.path, normalized.rendered()).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Normalizes the ledger file in place.
    ///
    /// On error the file is left untouched, and no file is created if none
    /// existed.
    ///
    /// # Errors
    ///
    /// See [`LedgerFile::normalized`] and [`LedgerFile::write`].
    pub fn normalize(&self, options: Options) -> Result<Normalized, Error> {
        let normalized = self.normalized(options)?;
        self.write(&normalized)?;
        info!(
            meals = normalized.ledger().len(),
            path = %self.path.display(),
            "rewrote ledger"
        );
        Ok(normalized)
    }
}

/// Errors that can occur when normalizing a ledger file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ledger file doesn't exist or couldn't be read.
    #[error("{} not found", .path.display())]
    FileNotFound {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The ledger file contained no meals.
    #[error("No meals found in {} or file is empty", .path.display())]
    EmptyLedger {
        /// The path that was read.
        path: PathBuf,
    },

    /// The normalized ledger couldn't be written.
    #[error("Failed to write {}", .path.display())]
    Write {
        /// The path that was written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
