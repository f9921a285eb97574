//! JSON export of a ledger, with each ingredient split into quantity and
//! name.
//!
//! Titles and names are exported verbatim; they are not lowercased. Only
//! what the ledger text records is exported, so there is no
//! `hasVeggieSide` flag.

use serde::Serialize;

use crate::domain::{Ingredient, Ledger, Meal};

#[derive(Debug, Serialize)]
struct MealRecord<'a> {
    title: &'a str,
    ingredients: Vec<Ingredient<'a>>,
}

impl<'a> From<&'a Meal> for MealRecord<'a> {
    fn from(meal: &'a Meal) -> Self {
        Self {
            title: meal.title(),
            ingredients: meal
                .ingredients()
                .iter()
                .map(|line| Ingredient::parse(line))
                .collect(),
        }
    }
}

/// Serializes a ledger as a JSON array of meals.
///
/// Each meal is an object with a `title` and a list of `ingredients`, each
/// of which has a `quantity` (a string, or `null`) and a `name`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(ledger: &Ledger, pretty: bool) -> serde_json::Result<String> {
    let records: Vec<MealRecord> = ledger.meals().iter().map(MealRecord::from).collect();
    if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quantities_from_names() {
        let ledger = Ledger::new(vec![
            Meal::new(
                "Apple Pie",
                vec!["1/2 cup flour".to_string(), "sugar".to_string()],
            )
            .unwrap(),
        ]);

        let json = to_json(&ledger, false).unwrap();

        assert_eq!(
            json,
            r#"[{"title":"Apple Pie","ingredients":[{"quantity":"1/2","name":"cup flour"},{"quantity":null,"name":"sugar"}]}]"#
        );
    }

    #[test]
    fn empty_ledger_is_empty_array() {
        assert_eq!(to_json(&Ledger::default(), true).unwrap(), "[]");
    }
}
