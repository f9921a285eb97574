use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An optional leading amount (`2`, `1/2`, `2 - 3`, `1/2-1`) followed by
/// whitespace and a free-text name.
static QUANTITY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:/\d+)?(?:\s*-\s*\d+)?)\s+(.+)$").expect("this must never fail")
});

/// Returns `true` if the ingredient line starts with a quantity.
///
/// This is a prefix check only: the line is quantified iff its first
/// non-whitespace character is an ASCII digit. Nothing else about the line is
/// validated.
#[must_use]
pub fn is_quantified(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// An ingredient line split into its quantity and name.
///
/// This is computed on demand from the raw line and never written back; the
/// ledger only ever stores the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ingredient<'a> {
    quantity: Option<&'a str>,
    name: &'a str,
}

impl<'a> Ingredient<'a> {
    /// Splits a raw ingredient line.
    ///
    /// If the line does not start with a recognisable quantity, the whole
    /// (trimmed) line is the name.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        QUANTITY_PREFIX.captures(line).map_or(
            Self {
                quantity: None,
                name: line,
            },
            |captures| {
                // both groups are mandatory in the pattern
                let quantity = captures.get(1).map(|m| m.as_str());
                let name = captures.get(2).map_or(line, |m| m.as_str());
                Self { quantity, name }
            },
        )
    }

    /// The leading amount, if any (e.g. `"1/2"` or `"2 - 3"`).
    #[must_use]
    pub const fn quantity(&self) -> Option<&'a str> {
        self.quantity
    }

    /// The ingredient name, with any quantity removed.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// How quantified ingredients are keyed when sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameKey {
    /// Strip a quantity matching `<amount>[/<amount>][ - <amount>] ` and
    /// compare the remainder verbatim.
    ///
    /// Lines without a recognisable quantity compare by their lowercased
    /// text.
    #[default]
    Pattern,

    /// Drop everything up to the first run of whitespace and compare the
    /// remainder, lowercased.
    FirstWord,
}

impl NameKey {
    /// Computes the sort key for a quantified ingredient line.
    #[must_use]
    pub fn key(self, line: &str) -> String {
        match self {
            Self::Pattern => {
                let ingredient = Ingredient::parse(line);
                if ingredient.quantity().is_some() {
                    ingredient.name().to_string()
                } else {
                    line.to_lowercase()
                }
            }
            Self::FirstWord => line
                .split_once(char::is_whitespace)
                .map(|(_, rest)| rest.trim_start())
                .filter(|rest| !rest.is_empty())
                .unwrap_or(line)
                .to_lowercase(),
        }
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => f.write_str("pattern"),
            Self::FirstWord => f.write_str("first-word"),
        }
    }
}

impl FromStr for NameKey {
    type Err = UnknownNameKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "first-word" => Ok(Self::FirstWord),
            _ => Err(UnknownNameKey(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised [`NameKey`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown name key '{0}': expected 'pattern' or 'first-word'")]
pub struct UnknownNameKey(String);
