//! Shopping list: what has to be bought before cooking a set of recipes.

use serde::Serialize;

use crate::categorizer::categorize;
use crate::error::ValidationError;
use crate::matching::{find_match, MatchStrategy};
use crate::model::{InventoryItem, Recipe};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ShoppingEntry {
    /// Ingredient display text, e.g. "400g spaghetti".
    pub ingredient: String,
    pub category: String,
    /// Title of each recipe that needs it, once per occurrence.
    pub needed_for: Vec<String>,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub item_count: usize,
    #[serde(rename = "shoppingList")]
    pub entries: Vec<ShoppingEntry>,
    pub unknown_recipe_ids: Vec<String>,
}

/// Collect every ingredient of the requested recipes that has no matching
/// item, or whose matching item is at exactly zero.
///
/// Recipes are visited in `recipe_ids` order and entries keep first-seen
/// order. Unknown ids are reported, not treated as errors.
pub fn shopping_list<S: MatchStrategy + ?Sized>(
    recipe_ids: &[String],
    recipes: &[Recipe],
    items: &[InventoryItem],
    strategy: &S,
) -> Result<ShoppingList, ValidationError> {
    if recipe_ids.is_empty() {
        return Err(ValidationError::single(
            "recipeIds",
            "Please provide recipe IDs",
        ));
    }

    let mut entries: Vec<ShoppingEntry> = Vec::new();
    let mut unknown_recipe_ids = Vec::new();

    for id in recipe_ids {
        let Some(recipe) = recipes.iter().find(|r| r.recipe_id() == id) else {
            unknown_recipe_ids.push(id.clone());
            continue;
        };
        for line in recipe.ingredients() {
            let in_stock = find_match(strategy, line, items).is_some_and(|item| item.quantity() != 0.0);
            if in_stock {
                continue;
            }
            let text = line.display();
            match entries.iter_mut().find(|e| e.ingredient == text) {
                Some(entry) => entry.needed_for.push(recipe.title().to_string()),
                None => entries.push(ShoppingEntry {
                    category: categorize(&text).to_string(),
                    ingredient: text,
                    needed_for: vec![recipe.title().to_string()],
                    estimated_cost: 0.0,
                }),
            }
        }
    }

    Ok(ShoppingList {
        item_count: entries.len(),
        entries,
        unknown_recipe_ids,
    })
}
