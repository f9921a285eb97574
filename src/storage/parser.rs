//! Parsing ledger text into meals
//!
//! Two strategies are supported, selected with [`ParseMode`]:
//!
//! 1. **Blocks** (default): the text is split on blank lines (`"\n\n"`); the
//!    first line of each block is the title and the rest are ingredients.
//!
//! 2. **Lines**: a line-by-line state machine where a title is recognised by
//!    its first character (see [`is_title_line`]) rather than by position.
//!
//! They agree on ledgers whose titles start with a symbol and whose meals are
//! separated by single blank lines. Elsewhere they differ:
//! - a title starting with a letter or digit is only a title in block mode
//! - whitespace-only lines separate meals in line mode but not block mode
//! - consecutive meals without a blank line between them are only split in
//!   line mode
//!
//! Both drop meals that end up with no ingredients.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{Ledger, Meal};

/// The strategy used to split ledger text into meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Split on blank lines; the first line of each block is the title.
    #[default]
    Blocks,

    /// Read line by line, recognising titles with [`is_title_line`].
    Lines,
}

impl ParseMode {
    /// Parses ledger text into a [`Ledger`], preserving the order of meals
    /// and ingredients.
    #[must_use]
    pub fn parse(self, content: &str) -> Ledger {
        match self {
            Self::Blocks => parse_blocks(content),
            Self::Lines => parse_lines(content),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocks => f.write_str("blocks"),
            Self::Lines => f.write_str("lines"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = UnknownParseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blocks" => Ok(Self::Blocks),
            "lines" => Ok(Self::Lines),
            _ => Err(UnknownParseMode(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised [`ParseMode`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown parse mode '{0}': expected 'blocks' or 'lines'")]
pub struct UnknownParseMode(String);

/// Returns `true` if a (trimmed, non-blank) line is a meal title in
/// [`ParseMode::Lines`].
///
/// A line is a title iff its first character is neither an ASCII digit nor
/// an ASCII letter, e.g. `"# Apple Pie"` or `"- Apple Pie"`.
///
/// Known limitation: an ingredient starting with punctuation or a non-ASCII
/// character (`"(optional) nuts"`, `"½ cup milk"`) is taken as a title. This
/// includes non-ASCII digits: `"٣ eggs"` is a title here, even though a
/// Unicode-aware digit check would read it as an ingredient.
#[must_use]
pub fn is_title_line(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| !c.is_ascii_digit() && !c.is_ascii_alphabetic())
}

/// A meal that is still collecting ingredient lines.
struct Pending<'a> {
    title: &'a str,
    ingredients: Vec<String>,
}

impl<'a> Pending<'a> {
    const fn new(title: &'a str) -> Self {
        Self {
            title,
            ingredients: Vec::new(),
        }
    }
}

fn push_meal(meals: &mut Vec<Meal>, title: &str, ingredients: Vec<String>) {
    match Meal::new(title, ingredients) {
        Ok(meal) => meals.push(meal),
        Err(e) => debug!("dropping meal: {e}"),
    }
}

/// Parses ledger text with the line-by-line state machine.
#[must_use]
pub fn parse_lines(content: &str) -> Ledger {
    let mut meals = Vec::new();
    let mut current: Option<Pending<'_>> = None;

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            // a blank line before any ingredients doesn't end the meal
            if let Some(pending) = current.take_if(|p| !p.ingredients.is_empty()) {
                push_meal(&mut meals, pending.title, pending.ingredients);
            }
            continue;
        }

        if is_title_line(line) {
            if let Some(pending) = current.replace(Pending::new(line)) {
                push_meal(&mut meals, pending.title, pending.ingredients);
            }
        } else if let Some(pending) = current.as_mut() {
            pending.ingredients.push(line.to_string());
        } else {
            trace!(line, "discarding ingredient before first title");
        }
    }

    if let Some(pending) = current {
        push_meal(&mut meals, pending.title, pending.ingredients);
    }

    Ledger::new(meals)
}

/// Parses ledger text by splitting it into blank-line separated blocks.
#[must_use]
pub fn parse_blocks(content: &str) -> Ledger {
    let content = content.replace("\r\n", "\n");
    let mut meals = Vec::new();

    for block in content.split("\n\n") {
        let mut lines = block.trim().lines().map(str::trim);
        let Some(title) = lines.next().filter(|title| !title.is_empty()) else {
            continue;
        };
        let ingredients = lines
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        push_meal(&mut meals, title, ingredients);
    }

    Ledger::new(meals)
}
