//! Rank recipes by how much of their ingredient list is in stock.
//!
//! This is a presence check only: an ingredient counts when some matching
//! item has a quantity above zero, however little. [`check_availability`]
//! is the quantity-aware counterpart.
//!
//! [`check_availability`]: crate::availability::check_availability

use serde::Serialize;

use crate::decimal::one_decimal;
use crate::matching::MatchStrategy;
use crate::model::{InventoryItem, Recipe, RecipeSnapshot};

/// Suggestions returned after ranking.
pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub recipe: RecipeSnapshot,
    #[serde(serialize_with = "one_decimal")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "100.0"))]
    pub match_percentage: f64,
    pub available_ingredients: usize,
    pub total_ingredients: usize,
    pub can_make: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    /// Recipes with at least one ingredient present, before truncation.
    pub total_suggestions: usize,
    /// Recipes with every ingredient present, before truncation.
    pub perfect_matches: usize,
    pub suggestions: Vec<Suggestion>,
}

fn is_present<S: MatchStrategy + ?Sized>(text: &str, items: &[InventoryItem], strategy: &S) -> bool {
    items
        .iter()
        .any(|item| item.quantity() > 0.0 && strategy.matches(text, item.ingredient_name()))
}

/// Score every recipe, drop those with nothing in stock, sort by match
/// percentage (descending, ties keep recipe order) and keep the top
/// [`MAX_SUGGESTIONS`].
pub fn suggest_recipes<'a, S, I>(recipes: I, items: &[InventoryItem], strategy: &S) -> SuggestionReport
where
    S: MatchStrategy + ?Sized,
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut suggestions: Vec<Suggestion> = recipes
        .into_iter()
        .filter_map(|recipe| {
            let total = recipe.ingredients().len();
            if total == 0 {
                return None;
            }
            let present = recipe
                .ingredients()
                .iter()
                .filter(|line| is_present(&line.display(), items, strategy))
                .count();
            if present == 0 {
                return None;
            }
            Some(Suggestion {
                recipe: recipe.snapshot(),
                match_percentage: present as f64 / total as f64 * 100.0,
                available_ingredients: present,
                total_ingredients: total,
                can_make: present == total,
            })
        })
        .collect();

    // `sort_by` is stable, so equal percentages keep recipe order.
    suggestions.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));

    let total_suggestions = suggestions.len();
    let perfect_matches = suggestions.iter().filter(|s| s.can_make).count();
    suggestions.truncate(MAX_SUGGESTIONS);

    SuggestionReport {
        total_suggestions,
        perfect_matches,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SubstringMatch;
    use crate::model::{InventoryInput, RecipeInput};

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(&RecipeInput {
            title: Some(title.into()),
            chef: Some("Test Chef".into()),
            ingredients: Some(ingredients.iter().copied().collect()),
            instructions: Some(["Cook"].into_iter().collect()),
            meal_type: Some("Dinner".into()),
            cuisine_type: Some("Other".into()),
            prep_time: Some(10.0.into()),
            difficulty: Some("Easy".into()),
            servings: Some(2.0.into()),
            ..Default::default()
        })
        .unwrap()
    }

    fn item(name: &str, quantity: f64) -> InventoryItem {
        InventoryItem::new(&InventoryInput {
            ingredient_name: Some(name.into()),
            quantity: Some(quantity.into()),
            unit: Some("kg".into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_presence_ignores_quantity_sufficiency() {
        // 0.1 kg of spaghetti is far short of 400, yet it counts as present.
        let recipes = vec![recipe("Pasta", &["400g spaghetti", "Salt"])];
        let items = vec![item("spaghetti", 0.1), item("salt", 1.0)];
        let report = suggest_recipes(&recipes, &items, &SubstringMatch);
        assert_eq!(report.perfect_matches, 1);
        assert!(report.suggestions[0].can_make);
    }

    #[test]
    fn test_zero_quantity_not_present() {
        let recipes = vec![recipe("Pasta", &["400g spaghetti", "Salt"])];
        let items = vec![item("spaghetti", 0.0), item("salt", 1.0)];
        let report = suggest_recipes(&recipes, &items, &SubstringMatch);
        assert_eq!(report.suggestions[0].available_ingredients, 1);
        assert_eq!(report.suggestions[0].match_percentage, 50.0);
    }

    #[test]
    fn test_sorted_with_stable_ties() {
        let recipes = vec![
            recipe("Half A", &["salt", "sugar"]),
            recipe("Full", &["salt"]),
            recipe("Half B", &["salt", "flour"]),
            recipe("None", &["saffron"]),
        ];
        let items = vec![item("salt", 1.0)];
        let report = suggest_recipes(&recipes, &items, &SubstringMatch);
        let titles: Vec<&str> = report
            .suggestions
            .iter()
            .map(|s| s.recipe.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Full", "Half A", "Half B"]);
        assert_eq!(report.total_suggestions, 3);
    }

    #[test]
    fn test_truncates_to_ten() {
        let recipes: Vec<Recipe> = (0..12).map(|i| recipe(&format!("Salty {i}"), &["salt"])).collect();
        let items = vec![item("salt", 1.0)];
        let report = suggest_recipes(&recipes, &items, &SubstringMatch);
        assert_eq!(report.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(report.total_suggestions, 12);
        assert_eq!(report.perfect_matches, 12);
    }

    #[test]
    fn test_percentage_serialized_with_one_decimal() {
        let recipes = vec![recipe("Thirds", &["salt", "sugar", "flour"])];
        let items = vec![item("salt", 1.0)];
        let json = serde_json::to_value(suggest_recipes(&recipes, &items, &SubstringMatch)).unwrap();
        assert_eq!(json["suggestions"][0]["matchPercentage"], "33.3");
        assert_eq!(json["suggestions"][0]["canMake"], false);
    }
}
