//! The in-memory normalization pipeline: parse, then sort.

use crate::{
    domain::{Ledger, NameKey},
    storage::ParseMode,
};

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// How the text is split into meals.
    pub mode: ParseMode,
    /// How quantified ingredients are keyed when sorting.
    pub name_key: NameKey,
}

/// Parses ledger text and sorts the resulting meals and ingredients.
///
/// Rendering the returned ledger (with [`ToString`]) produces the normalized
/// text.
#[must_use]
pub fn normalize(content: &str, options: Options) -> Ledger {
    let mut ledger = options.mode.parse(content);
    ledger.sort(options.name_key);
    ledger
}
