//! Cooking a recipe: deduct the scaled ingredient quantities from stock.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::matching::{find_match_index, MatchStrategy};
use crate::model::{InventoryItem, Recipe};

pub const LOW_STOCK_WARNING: &str = "Low stock after usage";
const PREPARED: &str = "Recipe prepared successfully";
const INSUFFICIENT: &str = "Some ingredients had insufficient stock";

/// How shortages affect the lines that do have enough stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PreparationMode {
    /// Deduct every line that can be satisfied, skip the rest.
    #[default]
    BestEffort,
    /// Deduct nothing unless every matched line can be satisfied.
    AllOrNothing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UsedIngredient {
    pub name: String,
    pub quantity_used: f64,
    pub unit: String,
    pub remaining_stock: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InsufficientStock {
    pub name: String,
    pub required: f64,
    pub available: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    /// Recipe title.
    pub recipe: String,
    pub servings_prepared: f64,
    pub ingredients_used: Vec<UsedIngredient>,
    pub insufficient_stock: Vec<InsufficientStock>,
    /// Display text of lines no inventory item matched.
    pub unmatched: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PreparationReport {
    pub success: bool,
    /// False only when all-or-nothing mode left stock untouched.
    pub committed: bool,
    pub message: String,
    pub usage_report: UsageReport,
}

struct Line {
    index: usize,
    required: f64,
}

/// Deduct `recipe` scaled to `target_servings` from `items`.
///
/// Each ingredient needs `required_quantity * scale`, or `scale` when the
/// line carries no number. Unmatched lines are listed but never make the
/// preparation fail. Quantities never go below zero.
pub fn prepare<S: MatchStrategy + ?Sized>(
    recipe: &Recipe,
    target_servings: f64,
    items: &mut [InventoryItem],
    strategy: &S,
    mode: PreparationMode,
) -> Result<PreparationReport, ValidationError> {
    if !target_servings.is_finite() || target_servings <= 0.0 {
        return Err(ValidationError::single(
            "servings",
            "servings must be a positive number",
        ));
    }
    let scale = target_servings / recipe.servings();

    let mut lines = Vec::new();
    let mut unmatched = Vec::new();
    for ingredient in recipe.ingredients() {
        match find_match_index(strategy, ingredient, items) {
            Some(index) => lines.push(Line {
                index,
                required: ingredient.required_quantity().map_or(scale, |q| q * scale),
            }),
            None => unmatched.push(ingredient.display()),
        }
    }

    let (used, insufficient, committed) = match mode {
        PreparationMode::BestEffort => {
            let (used, insufficient) = deduct_each(&lines, items);
            (used, insufficient, true)
        }
        PreparationMode::AllOrNothing => deduct_all(&lines, items),
    };

    for short in &insufficient {
        tracing::debug!(
            recipe_id = %recipe.recipe_id(),
            item = %short.name,
            required = short.required,
            available = short.available,
            "Insufficient stock"
        );
    }

    let success = insufficient.is_empty();
    tracing::info!(
        recipe_id = %recipe.recipe_id(),
        servings = target_servings,
        used = used.len(),
        insufficient = insufficient.len(),
        unmatched = unmatched.len(),
        committed,
        ?mode,
        "Recipe prepared"
    );

    Ok(PreparationReport {
        success,
        committed,
        message: if success { PREPARED } else { INSUFFICIENT }.to_string(),
        usage_report: UsageReport {
            recipe: recipe.title().to_string(),
            servings_prepared: target_servings,
            ingredients_used: used,
            insufficient_stock: insufficient,
            unmatched,
        },
    })
}

fn used_line(item: &InventoryItem, quantity_used: f64, remaining: f64) -> UsedIngredient {
    UsedIngredient {
        name: item.ingredient_name().to_string(),
        quantity_used,
        unit: item.unit().to_string(),
        remaining_stock: remaining,
        warning: (remaining <= item.min_stock()).then(|| LOW_STOCK_WARNING.to_string()),
    }
}

fn short_line(item: &InventoryItem, required: f64, available: f64) -> InsufficientStock {
    InsufficientStock {
        name: item.ingredient_name().to_string(),
        required,
        available,
    }
}

fn deduct_each(lines: &[Line], items: &mut [InventoryItem]) -> (Vec<UsedIngredient>, Vec<InsufficientStock>) {
    let mut used = Vec::new();
    let mut insufficient = Vec::new();
    for line in lines {
        let item = &mut items[line.index];
        let deducted = item.try_deduct(line.required);
        let remaining = item.quantity();
        if deducted {
            used.push(used_line(item, line.required, remaining));
        } else {
            insufficient.push(short_line(item, line.required, remaining));
        }
    }
    (used, insufficient)
}

/// Plan every line against a running tally, then commit only if nothing
/// came up short.
fn deduct_all(
    lines: &[Line],
    items: &mut [InventoryItem],
) -> (Vec<UsedIngredient>, Vec<InsufficientStock>, bool) {
    let mut taken = vec![0.0_f64; items.len()];
    let mut used = Vec::new();
    let mut insufficient = Vec::new();
    for line in lines {
        let item = &items[line.index];
        let available = item.quantity() - taken[line.index];
        if available >= line.required {
            taken[line.index] += line.required;
            used.push(used_line(item, line.required, available - line.required));
        } else {
            insufficient.push(short_line(item, line.required, available));
        }
    }

    if !insufficient.is_empty() {
        return (used, insufficient, false);
    }
    for (item, amount) in items.iter_mut().zip(&taken) {
        if *amount > 0.0 && !item.try_deduct(*amount) {
            // The plan was computed from these quantities under the same borrow.
            tracing::error!(item = %item.inventory_id(), amount, "Planned deduction refused");
        }
    }
    (used, insufficient, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SubstringMatch;
    use crate::model::{InventoryInput, RecipeInput};

    fn recipe(ingredients: &[&str], servings: f64) -> Recipe {
        Recipe::new(&RecipeInput {
            title: Some("Test Dish".into()),
            chef: Some("Test Chef".into()),
            ingredients: Some(ingredients.iter().copied().collect()),
            instructions: Some(["Cook"].into_iter().collect()),
            meal_type: Some("Dinner".into()),
            cuisine_type: Some("Other".into()),
            prep_time: Some(10.0.into()),
            difficulty: Some("Easy".into()),
            servings: Some(servings.into()),
            ..Default::default()
        })
        .unwrap()
    }

    fn item(name: &str, quantity: f64, min_stock: f64) -> InventoryItem {
        InventoryItem::new(&InventoryInput {
            ingredient_name: Some(name.into()),
            quantity: Some(quantity.into()),
            unit: Some("pieces".into()),
            min_stock: Some(min_stock.into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_scaled_deduction_with_low_stock_warning() {
        let r = recipe(&["4 eggs", "Salt"], 4.0);
        let mut items = vec![item("eggs", 6.0, 2.0), item("salt", 10.0, 1.0)];
        let report = prepare(&r, 2.0, &mut items, &SubstringMatch, PreparationMode::BestEffort).unwrap();

        assert!(report.success);
        assert_eq!(report.message, "Recipe prepared successfully");
        assert_eq!(items[0].quantity(), 4.0);
        // No number on the line: the scale factor itself is used.
        assert_eq!(items[1].quantity(), 9.5);
        assert_eq!(report.usage_report.ingredients_used[0].warning, None);

        let report = prepare(&r, 4.0, &mut items, &SubstringMatch, PreparationMode::BestEffort).unwrap();
        assert_eq!(items[0].quantity(), 0.0);
        assert_eq!(
            report.usage_report.ingredients_used[0].warning.as_deref(),
            Some(LOW_STOCK_WARNING)
        );
    }

    #[test]
    fn test_best_effort_commits_satisfiable_lines() {
        let r = recipe(&["4 eggs", "2 apples"], 1.0);
        let mut items = vec![item("eggs", 10.0, 0.0), item("apples", 1.0, 0.0)];
        let report = prepare(&r, 1.0, &mut items, &SubstringMatch, PreparationMode::BestEffort).unwrap();

        assert!(!report.success);
        assert!(report.committed);
        assert_eq!(report.message, "Some ingredients had insufficient stock");
        assert_eq!(items[0].quantity(), 6.0);
        assert_eq!(items[1].quantity(), 1.0);
        assert_eq!(
            report.usage_report.insufficient_stock,
            vec![InsufficientStock {
                name: "apples".to_string(),
                required: 2.0,
                available: 1.0,
            }]
        );
    }

    #[test]
    fn test_all_or_nothing_leaves_stock_untouched() {
        let r = recipe(&["4 eggs", "2 apples"], 1.0);
        let mut items = vec![item("eggs", 10.0, 0.0), item("apples", 1.0, 0.0)];
        let report = prepare(&r, 1.0, &mut items, &SubstringMatch, PreparationMode::AllOrNothing).unwrap();

        assert!(!report.success);
        assert!(!report.committed);
        assert_eq!(items[0].quantity(), 10.0);
        assert_eq!(items[1].quantity(), 1.0);
    }

    #[test]
    fn test_all_or_nothing_tallies_repeated_matches() {
        // Both lines match the same "egg" item: 3 + 3 exceeds the 5 in stock.
        let r = recipe(&["3 eggs", "3 egg yolks"], 1.0);
        let mut items = vec![item("egg", 5.0, 0.0)];
        let report = prepare(&r, 1.0, &mut items, &SubstringMatch, PreparationMode::AllOrNothing).unwrap();
        assert!(!report.committed);
        assert_eq!(report.usage_report.insufficient_stock[0].available, 2.0);
        assert_eq!(items[0].quantity(), 5.0);

        let r = recipe(&["2 eggs", "3 egg yolks"], 1.0);
        let report = prepare(&r, 1.0, &mut items, &SubstringMatch, PreparationMode::AllOrNothing).unwrap();
        assert!(report.success && report.committed);
        assert_eq!(items[0].quantity(), 0.0);
        assert_eq!(report.usage_report.ingredients_used[1].remaining_stock, 0.0);
    }

    #[test]
    fn test_unmatched_lines_do_not_fail() {
        let r = recipe(&["4 eggs", "Truffle"], 1.0);
        let mut items = vec![item("eggs", 10.0, 0.0)];
        let report = prepare(&r, 1.0, &mut items, &SubstringMatch, PreparationMode::BestEffort).unwrap();
        assert!(report.success);
        assert_eq!(report.usage_report.unmatched, vec!["Truffle"]);
    }

    #[test]
    fn test_rejects_non_positive_servings() {
        let r = recipe(&["4 eggs"], 1.0);
        let mut items = vec![item("eggs", 10.0, 0.0)];
        for servings in [0.0, -2.0, f64::NAN] {
            let err = prepare(&r, servings, &mut items, &SubstringMatch, PreparationMode::BestEffort).unwrap_err();
            assert!(err.names_field("servings"));
        }
        assert_eq!(items[0].quantity(), 10.0);
    }

    #[test]
    fn test_report_json_shape() {
        let r = recipe(&["4 eggs"], 1.0);
        let mut items = vec![item("eggs", 10.0, 0.0)];
        let report = prepare(&r, 1.0, &mut items, &SubstringMatch, PreparationMode::BestEffort).unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["usageReport"]["recipe"], "Test Dish");
        assert_eq!(json["usageReport"]["ingredientsUsed"][0]["quantityUsed"], 4.0);
        assert!(json["usageReport"]["ingredientsUsed"][0].get("warning").is_none());
    }
}
