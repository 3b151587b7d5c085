//! Request checks that run before a payload reaches the core constructors.
//!
//! The core only insists on well-formed values. These rules add the
//! enumerations and ranges the web forms offer. On creation every field is
//! checked; on update only the fields that were sent.

use recipe_hub_core::{InventoryInput, Loose, RecipeInput, ValidationError};

pub const MEAL_TYPES: &[&str] = &["Breakfast", "Lunch", "Dinner", "Dessert", "Snack", "Appetizer"];

pub const CUISINE_TYPES: &[&str] = &[
    "Italian",
    "American",
    "Mexican",
    "Asian",
    "Mediterranean",
    "Indian",
    "French",
    "Other",
];

pub const DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];

struct Rules {
    partial: bool,
    errors: ValidationError,
}

impl Rules {
    fn new(partial: bool) -> Self {
        Self {
            partial,
            errors: ValidationError::new(),
        }
    }

    /// Runs `check` on the value when it is present, and reports a missing
    /// value as a failure on creation.
    fn field<T>(&mut self, field: &str, value: Option<&T>, message: String, check: impl FnOnce(&T) -> bool) {
        let ok = match value {
            Some(value) => check(value),
            None => self.partial,
        };
        if !ok {
            self.errors.push(field, message);
        }
    }

    fn min_length(&mut self, field: &str, value: &Option<Loose>, min: usize, message: &str) {
        self.field(field, value.as_ref(), message.to_string(), |v| {
            v.as_trimmed_str().is_some_and(|s| s.chars().count() >= min)
        });
    }

    fn one_of(&mut self, field: &str, value: &Option<Loose>, label: &str, allowed: &[&str]) {
        let message = format!("{label} must be one of: {}", allowed.join(", "));
        self.field(field, value.as_ref(), message, |v| {
            v.as_trimmed_str().is_some_and(|s| allowed.contains(&s))
        });
    }

    fn whole_number_in(&mut self, field: &str, value: &Option<Loose>, min: f64, max: f64, message: &str) {
        self.field(field, value.as_ref(), message.to_string(), |v| {
            v.as_number()
                .is_some_and(|n| n.fract() == 0.0 && (min..=max).contains(&n))
        });
    }

    fn non_negative(&mut self, field: &str, value: &Option<Loose>, message: &str) {
        self.field(field, value.as_ref(), message.to_string(), |v| {
            v.as_number().is_some_and(|n| n >= 0.0)
        });
    }

    fn required(&mut self, field: &str, value: &Option<Loose>, message: &str) {
        self.field(field, value.as_ref(), message.to_string(), |v| {
            v.as_non_empty_str().is_some()
        });
    }

    fn finish(self) -> Result<(), ValidationError> {
        self.errors.into_result()
    }
}

pub fn validate_recipe(input: &RecipeInput, partial: bool) -> Result<(), ValidationError> {
    let mut rules = Rules::new(partial);

    rules.min_length("title", &input.title, 3, "Recipe title must be at least 3 characters long");
    rules.min_length("chef", &input.chef, 3, "Chef name must be at least 3 characters long");
    rules.one_of("mealType", &input.meal_type, "Meal type", MEAL_TYPES);
    rules.one_of("cuisineType", &input.cuisine_type, "Cuisine type", CUISINE_TYPES);
    rules.whole_number_in(
        "prepTime",
        &input.prep_time,
        1.0,
        1440.0,
        "Prep time must be between 1 and 1440 minutes",
    );
    rules.whole_number_in(
        "servings",
        &input.servings,
        1.0,
        100.0,
        "Servings must be between 1 and 100",
    );
    rules.one_of("difficulty", &input.difficulty, "Difficulty", DIFFICULTIES);
    rules.field(
        "ingredients",
        input.ingredients.as_ref(),
        "At least one ingredient is required".to_string(),
        |list| !list.to_inputs().is_empty(),
    );
    rules.field(
        "instructions",
        input.instructions.as_ref(),
        "At least one instruction step is required".to_string(),
        |list| !list.to_steps().is_empty(),
    );

    rules.finish()
}

pub fn validate_inventory(input: &InventoryInput, partial: bool) -> Result<(), ValidationError> {
    let mut rules = Rules::new(partial);

    rules.min_length(
        "ingredientName",
        &input.ingredient_name,
        2,
        "Ingredient name must be at least 2 characters long",
    );
    rules.required("category", &input.category, "Category is required");
    rules.required("location", &input.location, "Location is required");
    rules.non_negative("quantity", &input.quantity, "Quantity must be a positive number");
    rules.required("unit", &input.unit, "Unit is required");
    rules.non_negative("cost", &input.cost, "Cost must be a positive number");

    let purchase = input.purchase_date.as_ref().and_then(Loose::as_iso_date);
    let expiry = input.expiry_date.as_ref().and_then(Loose::as_iso_date);
    if let (Some(purchase), Some(expiry)) = (purchase, expiry) {
        if expiry < purchase {
            rules
                .errors
                .push("expiryDate", "Expiry date cannot be before purchase date");
        }
    }

    rules.finish()
}
