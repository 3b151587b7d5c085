//! Scale a recipe to a different number of servings without storing it.

use serde::Serialize;

use crate::error::ValidationError;
use crate::ingredient_parser::{parse_line, scale_numbers};
use crate::model::{Recipe, RecipeSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScaledRecipe {
    pub original: RecipeSnapshot,
    pub scaled: RecipeSnapshot,
}

/// Rewrite every number in the ingredient lines by `new_servings / servings`.
///
/// Prep time grows 10% when scaling up and shrinks 10% otherwise, rounded up
/// to whole minutes.
pub fn scale_recipe(recipe: &Recipe, new_servings: f64) -> Result<ScaledRecipe, ValidationError> {
    if !new_servings.is_finite() || new_servings < 1.0 {
        return Err(ValidationError::single("newServings", "Invalid serving size"));
    }
    let factor = new_servings / recipe.servings();
    let time_factor = if factor > 1.0 { 1.1 } else { 0.9 };

    let original = recipe.snapshot();
    let scaled = RecipeSnapshot {
        ingredients: original
            .ingredients
            .iter()
            .map(|line| parse_line(&scale_numbers(&line.display(), factor)))
            .collect(),
        servings: new_servings,
        prep_time: (original.prep_time * time_factor).ceil(),
        ..original.clone()
    };
    Ok(ScaledRecipe { original, scaled })
}
