//! Domain models for meal ledgers.
//!
//! This module contains the core domain types: meals, the ledger that holds
//! them, the heuristics used to classify and order ingredient lines, and
//! configuration.

/// Ingredient classification and sort keys.
pub mod ingredient;
pub use ingredient::{Ingredient, NameKey, is_quantified};

mod meal;
pub use meal::{InvalidMeal, Meal};

mod ledger;
pub use ledger::Ledger;

mod config;
pub use config::Config;
