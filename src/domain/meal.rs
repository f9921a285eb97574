use std::fmt;

use non_empty_string::NonEmptyString;

use crate::domain::ingredient::{NameKey, is_quantified};

/// A titled list of ingredient lines.
///
/// A meal always has a non-empty title and at least one ingredient. Blocks
/// in a ledger that don't satisfy this are dropped when the ledger is
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    title: NonEmptyString,
    ingredients: Vec<String>,
}

impl Meal {
    /// Creates a new meal.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or there are no ingredients.
    pub fn new(title: impl Into<String>, ingredients: Vec<String>) -> Result<Self, InvalidMeal> {
        let title = NonEmptyString::new(title.into()).map_err(|_| InvalidMeal::EmptyTitle)?;
        if ingredients.is_empty() {
            return Err(InvalidMeal::NoIngredients(title.to_string()));
        }
        Ok(Self { title, ingredients })
    }

    /// The meal's title line.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The raw ingredient lines, in their current order.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Reorders the ingredients: quantified lines first, sorted by `key`,
    /// then unquantified lines sorted case-insensitively.
    ///
    /// Both sorts are stable.
    pub fn sort_ingredients(&mut self, key: NameKey) {
        let (mut quantified, mut unquantified): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.ingredients)
                .into_iter()
                .partition(|line| is_quantified(line));

        quantified.sort_by_cached_key(|line| key.key(line));
        unquantified.sort_by_cached_key(|line| line.to_lowercase());

        quantified.append(&mut unquantified);
        self.ingredients = quantified;
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for ingredient in &self.ingredients {
            writeln!(f, "{ingredient}")?;
        }
        Ok(())
    }
}

/// Reasons a block of lines can't form a [`Meal`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidMeal {
    /// The title line was empty.
    #[error("meal title must not be empty")]
    EmptyTitle,

    /// The title was not followed by any ingredient lines.
    #[error("meal '{0}' has no ingredients")]
    NoIngredients(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(title: &str, ingredients: &[&str]) -> Meal {
        Meal::new(
            title,
            ingredients.iter().map(ToString::to_string).collect(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_meal_without_ingredients() {
        let error = Meal::new("Toast", Vec::new()).unwrap_err();
        assert_eq!(error, InvalidMeal::NoIngredients("Toast".to_string()));
    }

    #[test]
    fn rejects_empty_title() {
        let error = Meal::new("", vec!["bread".to_string()]).unwrap_err();
        assert_eq!(error, InvalidMeal::EmptyTitle);
    }

    #[test]
    fn quantified_ingredients_come_first() {
        let mut meal = meal("Apple Pie", &["sugar", "3 apples", "butter", "1/2 cup flour"]);
        meal.sort_ingredients(NameKey::Pattern);

        assert_eq!(
            meal.ingredients(),
            ["3 apples", "1/2 cup flour", "butter", "sugar"]
        );
    }

    #[test]
    fn unquantified_sort_ignores_case() {
        let mut meal = meal("Salad", &["Lettuce", "basil", "Tomato", "avocado"]);
        meal.sort_ingredients(NameKey::Pattern);

        assert_eq!(meal.ingredients(), ["avocado", "basil", "Lettuce", "Tomato"]);
    }

    #[test]
    fn pattern_key_compares_names_verbatim() {
        // names keep their case under the pattern key, so uppercase sorts first
        let mut meal = meal("Stew", &["2 carrots", "1 Onion", "3 beef cubes"]);
        meal.sort_ingredients(NameKey::Pattern);

        assert_eq!(meal.ingredients(), ["1 Onion", "3 beef cubes", "2 carrots"]);
    }

    #[test]
    fn first_word_key_ignores_case() {
        let mut meal = meal("Stew", &["2 carrots", "1 Onion", "3 beef cubes"]);
        meal.sort_ingredients(NameKey::FirstWord);

        assert_eq!(meal.ingredients(), ["3 beef cubes", "2 carrots", "1 Onion"]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let mut meal = meal("Eggs", &["2 eggs", "Salt", "1 eggs", "salt"]);
        meal.sort_ingredients(NameKey::Pattern);

        assert_eq!(meal.ingredients(), ["2 eggs", "1 eggs", "Salt", "salt"]);
    }

    #[test]
    fn displays_title_then_ingredients() {
        let meal = meal("Toast", &["1 slice bread", "butter"]);
        assert_eq!(meal.to_string(), "Toast\n1 slice bread\nbutter\n");
    }
}
