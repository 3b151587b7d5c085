use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{non_negative, positive, today, Checker};
use crate::error::ValidationError;
use crate::ingredient_parser::{normalize, IngredientLine};
use crate::input::{IngredientList, Loose, StepList};

/// Recipe payload as submitted. Every field is optional so the same shape
/// serves creation and partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    /// Honored by [`Recipe::new`]; repositories assign their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    pub title: Option<Loose>,
    pub chef: Option<Loose>,
    pub ingredients: Option<IngredientList>,
    pub instructions: Option<StepList>,
    pub meal_type: Option<Loose>,
    #[serde(alias = "cuisine")]
    pub cuisine_type: Option<Loose>,
    pub prep_time: Option<Loose>,
    pub difficulty: Option<Loose>,
    pub servings: Option<Loose>,
    pub created_date: Option<Loose>,
}

/// Plain copy of a recipe. Changing it never touches the stored entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeSnapshot {
    pub recipe_id: String,
    pub title: String,
    pub chef: String,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: Vec<String>,
    pub meal_type: String,
    pub cuisine_type: String,
    pub prep_time: f64,
    pub difficulty: String,
    pub servings: f64,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    recipe_id: String,
    title: String,
    chef: String,
    ingredients: Vec<IngredientLine>,
    instructions: Vec<String>,
    meal_type: String,
    cuisine_type: String,
    prep_time: f64,
    difficulty: String,
    servings: f64,
    created_date: NaiveDate,
}

/// Normalized values of the fields that were supplied.
#[derive(Default)]
struct RecipePatch {
    title: Option<String>,
    chef: Option<String>,
    ingredients: Option<Vec<IngredientLine>>,
    instructions: Option<Vec<String>>,
    meal_type: Option<String>,
    cuisine_type: Option<String>,
    prep_time: Option<f64>,
    difficulty: Option<String>,
    servings: Option<f64>,
    created_date: Option<NaiveDate>,
}

impl RecipePatch {
    fn check(input: &RecipeInput, partial: bool) -> Result<Self, ValidationError> {
        let mut c = Checker::new(partial);
        let patch = RecipePatch {
            title: c.non_empty_text("title", &input.title),
            chef: c.non_empty_text("chef", &input.chef),
            ingredients: check_ingredients(&mut c, &input.ingredients),
            instructions: check_instructions(&mut c, &input.instructions),
            meal_type: c.non_empty_text("mealType", &input.meal_type),
            cuisine_type: c.non_empty_text("cuisineType", &input.cuisine_type),
            prep_time: c.number(
                "prepTime",
                &input.prep_time,
                true,
                non_negative,
                "prepTime must be a non-negative number",
            ),
            difficulty: c.non_empty_text("difficulty", &input.difficulty),
            servings: c.number(
                "servings",
                &input.servings,
                true,
                positive,
                "servings must be a positive number",
            ),
            created_date: c.iso_date("createdDate", &input.created_date),
        };
        c.finish().map(|_| patch)
    }
}

fn check_ingredients(c: &mut Checker, list: &Option<IngredientList>) -> Option<Vec<IngredientLine>> {
    let list = c.present("ingredients", list)?;
    let lines: Vec<IngredientLine> = list.to_inputs().iter().map(normalize).collect();
    if lines.is_empty() {
        c.fail("ingredients", "ingredients must contain at least one entry");
        return None;
    }
    let mut valid = true;
    for (i, line) in lines.iter().enumerate() {
        if line.item.is_empty() {
            c.fail("ingredients", format!("ingredients[{i}].item must be non-empty"));
            valid = false;
        }
    }
    valid.then_some(lines)
}

fn check_instructions(c: &mut Checker, list: &Option<StepList>) -> Option<Vec<String>> {
    let list = c.present("instructions", list)?;
    let steps = list.to_steps();
    if steps.is_empty() {
        c.fail("instructions", "instructions must contain at least one step");
        return None;
    }
    let mut out = Vec::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        match step.as_non_empty_str() {
            Some(s) => out.push(s.to_string()),
            None => c.fail(
                "instructions",
                format!("instructions[{i}] must be a non-empty string"),
            ),
        }
    }
    (out.len() == steps.len()).then_some(out)
}

impl Recipe {
    /// Validate a full payload. The id comes from `input.recipe_id`, or
    /// `R-00001` when absent.
    pub fn new(input: &RecipeInput) -> Result<Self, ValidationError> {
        let id = input
            .recipe_id
            .clone()
            .unwrap_or_else(|| "R-00001".to_string());
        Self::with_id(id, input)
    }

    pub(crate) fn with_id(recipe_id: String, input: &RecipeInput) -> Result<Self, ValidationError> {
        let patch = RecipePatch::check(input, false)?;
        // Full validation guarantees every required field is present.
        match patch {
            RecipePatch {
                title: Some(title),
                chef: Some(chef),
                ingredients: Some(ingredients),
                instructions: Some(instructions),
                meal_type: Some(meal_type),
                cuisine_type: Some(cuisine_type),
                prep_time: Some(prep_time),
                difficulty: Some(difficulty),
                servings: Some(servings),
                created_date,
            } => Ok(Recipe {
                recipe_id,
                title,
                chef,
                ingredients,
                instructions,
                meal_type,
                cuisine_type,
                prep_time,
                difficulty,
                servings,
                created_date: created_date.unwrap_or_else(today),
            }),
            _ => Err(ValidationError::single("recipe", "Recipe payload is incomplete")),
        }
    }

    /// Apply the supplied fields. Nothing changes if any of them is invalid.
    pub fn update(&mut self, patch: &RecipeInput) -> Result<(), ValidationError> {
        let p = RecipePatch::check(patch, true)?;
        if let Some(v) = p.title {
            self.title = v;
        }
        if let Some(v) = p.chef {
            self.chef = v;
        }
        if let Some(v) = p.ingredients {
            self.ingredients = v;
        }
        if let Some(v) = p.instructions {
            self.instructions = v;
        }
        if let Some(v) = p.meal_type {
            self.meal_type = v;
        }
        if let Some(v) = p.cuisine_type {
            self.cuisine_type = v;
        }
        if let Some(v) = p.prep_time {
            self.prep_time = v;
        }
        if let Some(v) = p.difficulty {
            self.difficulty = v;
        }
        if let Some(v) = p.servings {
            self.servings = v;
        }
        if let Some(v) = p.created_date {
            self.created_date = v;
        }
        Ok(())
    }

    /// Case-insensitive substring search over title, chef, meal type, cuisine
    /// and ingredient names. An empty query matches everything.
    pub fn matches_query(&self, q: &str) -> bool {
        let needle = q.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let names = self
            .ingredients
            .iter()
            .map(|l| l.item.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let haystack = [
            self.title.as_str(),
            self.chef.as_str(),
            self.meal_type.as_str(),
            self.cuisine_type.as_str(),
            names.as_str(),
        ]
        .join(" ")
        .to_lowercase();
        haystack.contains(&needle)
    }

    pub fn snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot {
            recipe_id: self.recipe_id.clone(),
            title: self.title.clone(),
            chef: self.chef.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            meal_type: self.meal_type.clone(),
            cuisine_type: self.cuisine_type.clone(),
            prep_time: self.prep_time,
            difficulty: self.difficulty.clone(),
            servings: self.servings,
            created_date: self.created_date,
        }
    }

    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chef(&self) -> &str {
        &self.chef
    }

    pub fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    pub fn cuisine_type(&self) -> &str {
        &self.cuisine_type
    }

    pub fn prep_time(&self) -> f64 {
        self.prep_time
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn servings(&self) -> f64 {
        self.servings
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }
}
