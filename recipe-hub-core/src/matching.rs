//! Ingredient-to-inventory matching.
//!
//! A recipe line matches an inventory item when the lowercased line text
//! contains the lowercased inventory name. The direction matters:
//! "400g spaghetti" matches an item named "Spaghetti", but an item named
//! "Spaghetti Pasta" does not match it. Containment is not token-aware, so
//! "eggplant" also matches an item named "egg".
//!
//! Only the first matching inventory item is used, in inventory order.

use serde::Serialize;

use crate::ingredient_parser::IngredientLine;
use crate::model::InventoryItem;

/// Decides whether an ingredient line refers to an inventory item.
pub trait MatchStrategy {
    fn matches(&self, ingredient: &str, inventory_name: &str) -> bool;
}

/// Case-insensitive "ingredient text contains inventory name".
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatch;

impl MatchStrategy for SubstringMatch {
    fn matches(&self, ingredient: &str, inventory_name: &str) -> bool {
        ingredient
            .to_lowercase()
            .contains(&inventory_name.to_lowercase())
    }
}

/// Stock classification of one ingredient line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Partial,
    Missing,
}

/// `avail >= req` is available, `0 < avail < req` is partial, anything else
/// (including no match) is missing.
pub fn classify(available: Option<f64>, required: f64) -> Availability {
    match available {
        Some(avail) if avail >= required => Availability::Available,
        Some(avail) if avail > 0.0 => Availability::Partial,
        _ => Availability::Missing,
    }
}

/// Index of the first inventory item matching `line`.
pub fn find_match_index<S: MatchStrategy + ?Sized>(
    strategy: &S,
    line: &IngredientLine,
    items: &[InventoryItem],
) -> Option<usize> {
    let text = line.display();
    items
        .iter()
        .position(|item| strategy.matches(&text, item.ingredient_name()))
}

pub fn find_match<'a, S: MatchStrategy + ?Sized>(
    strategy: &S,
    line: &IngredientLine,
    items: &'a [InventoryItem],
) -> Option<&'a InventoryItem> {
    find_match_index(strategy, line, items).map(|i| &items[i])
}
