//! Plain-text Meal Ledger Normalization
//!
//! A ledger is a text file of meals: a title line followed by ingredient
//! lines, with meals separated by blank lines. Normalizing a ledger sorts the
//! meals by title and each meal's ingredients into quantified then
//! unquantified groups.

pub mod domain;
pub use domain::{Config, Ingredient, Ledger, Meal, NameKey};

pub mod pipeline;
pub use pipeline::{Options, normalize};

/// Reading, writing and exporting ledger files.
pub mod storage;
pub use storage::{LedgerFile, ParseMode};
