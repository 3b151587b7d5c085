//! Can a recipe be made from current stock?

use serde::Serialize;

use crate::matching::{classify, find_match_index, Availability, MatchStrategy};
use crate::model::{InventoryItem, Recipe};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailableIngredient {
    pub ingredient: String,
    pub in_stock: bool,
    pub available: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PartialIngredient {
    pub ingredient: String,
    pub required: f64,
    pub available: f64,
    pub unit: String,
    pub shortage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub recipe_id: String,
    pub recipe_name: String,
    /// True only when nothing is partial or missing.
    pub can_make: bool,
    pub available: Vec<AvailableIngredient>,
    pub partial: Vec<PartialIngredient>,
    pub missing: Vec<String>,
}

/// Classify every ingredient of `recipe` against `items`.
///
/// Quantities are compared unit-blind: "400g spaghetti" needs 400 of
/// whatever unit the matching item is stocked in. Lines that match the same
/// item draw on a running tally, so a later line only sees what earlier
/// available lines left behind.
pub fn check_availability<S: MatchStrategy + ?Sized>(
    recipe: &Recipe,
    items: &[InventoryItem],
    strategy: &S,
) -> AvailabilityReport {
    let mut available = Vec::new();
    let mut partial = Vec::new();
    let mut missing = Vec::new();
    let mut taken = vec![0.0; items.len()];

    for line in recipe.ingredients() {
        let ingredient = line.display();
        let required = line.required_quantity().unwrap_or(1.0);
        let Some(idx) = find_match_index(strategy, line, items) else {
            missing.push(ingredient);
            continue;
        };
        let item = &items[idx];
        let left = item.quantity() - taken[idx];
        let unit = item.unit().to_string();
        match classify(Some(left), required) {
            Availability::Available => {
                taken[idx] += required;
                available.push(AvailableIngredient {
                    ingredient,
                    in_stock: true,
                    available: left,
                    unit,
                });
            }
            Availability::Partial => partial.push(PartialIngredient {
                ingredient,
                required,
                available: left,
                unit,
                shortage: required - left,
            }),
            Availability::Missing => missing.push(ingredient),
        }
    }

    AvailabilityReport {
        recipe_id: recipe.recipe_id().to_string(),
        recipe_name: recipe.title().to_string(),
        can_make: partial.is_empty() && missing.is_empty(),
        available,
        partial,
        missing,
    }
}
