use std::fmt;

use crate::domain::{Meal, NameKey};

/// The complete, ordered collection of meals read from one ledger file.
///
/// The [`Display`](fmt::Display) implementation renders the ledger back into
/// the plain-text format: each meal's title followed by its ingredients, with
/// exactly one blank line between meals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    meals: Vec<Meal>,
}

impl Ledger {
    /// Creates a ledger from meals, keeping their order.
    #[must_use]
    pub const fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// The meals, in their current order.
    #[must_use]
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// The number of meals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Returns `true` if the ledger has no meals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Sorts meals by case-insensitive title, and each meal's ingredients
    /// (see [`Meal::sort_ingredients`]).
    ///
    /// Meals with equal titles keep their relative order.
    pub fn sort(&mut self, key: NameKey) {
        self.meals.sort_by_cached_key(|meal| meal.title().to_lowercase());
        for meal in &mut self.meals {
            meal.sort_ingredients(key);
        }
    }
}

impl FromIterator<Meal> for Ledger {
    fn from_iter<T: IntoIterator<Item = Meal>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Meal;
    type IntoIter = std::slice::Iter<'a, Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, meal) in self.meals.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{meal}")?;
        }
        Ok(())
    }
}
