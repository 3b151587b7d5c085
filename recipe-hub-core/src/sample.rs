//! Demo recipes and pantry used to seed a fresh store.

use chrono::{Days, NaiveDate};

use crate::import::DataFile;
use crate::input::Loose;
use crate::model::{InventoryInput, RecipeInput};

#[allow(clippy::too_many_arguments)]
fn recipe(
    title: &str,
    ingredients: &[&str],
    instructions: &[&str],
    meal: &str,
    cuisine: &str,
    prep_time: f64,
    difficulty: &str,
    servings: f64,
) -> RecipeInput {
    RecipeInput {
        title: Some(title.into()),
        chef: Some("Khush".into()),
        ingredients: Some(ingredients.iter().copied().collect()),
        instructions: Some(instructions.iter().copied().collect()),
        meal_type: Some(meal.into()),
        cuisine_type: Some(cuisine.into()),
        prep_time: Some(prep_time.into()),
        difficulty: Some(difficulty.into()),
        servings: Some(servings.into()),
        created_date: Some("2025-09-05".into()),
        ..Default::default()
    }
}

struct Stock<'a> {
    name: &'a str,
    category: &'a str,
    location: &'a str,
    quantity: f64,
    unit: &'a str,
    min: f64,
    max: f64,
    cost: f64,
    supplier: &'a str,
    shelf_life_days: u64,
    notes: &'a str,
}

fn date(day: NaiveDate) -> Option<Loose> {
    Some(day.to_string().into())
}

fn stock(s: Stock<'_>, today: NaiveDate) -> InventoryInput {
    InventoryInput {
        ingredient_name: Some(s.name.into()),
        category: Some(s.category.into()),
        location: Some(s.location.into()),
        quantity: Some(s.quantity.into()),
        unit: Some(s.unit.into()),
        min_stock: Some(s.min.into()),
        max_stock: Some(s.max.into()),
        cost: Some(s.cost.into()),
        supplier: Some(s.supplier.into()),
        notes: Some(s.notes.into()),
        purchase_date: date(today),
        expiry_date: date(today + Days::new(s.shelf_life_days)),
        created_date: date(today),
        ..Default::default()
    }
}

/// Two recipes and a seven-item pantry. Expiry dates are relative to
/// `today`, so alerts look the same whenever the store is seeded.
pub fn sample_data(today: NaiveDate) -> DataFile {
    let recipes = vec![
        recipe(
            "Classic Spaghetti Carbonara",
            &["400g spaghetti", "200g pancetta", "4 eggs", "100g Pecorino", "Pepper"],
            &["Boil pasta", "Crisp pancetta", "Whisk eggs + cheese", "Combine off heat"],
            "Dinner",
            "Italian",
            25.0,
            "Medium",
            4.0,
        ),
        recipe(
            "Avocado Toast Supreme",
            &["Bread", "Avocado", "Eggs", "Cherry tomatoes", "Feta cheese"],
            &["Toast bread", "Mash avocado", "Poach eggs", "Assemble ingredients"],
            "Breakfast",
            "American",
            10.0,
            "Easy",
            2.0,
        ),
    ];

    let inventory = [
        Stock {
            name: "All-Purpose Flour",
            category: "Baking",
            location: "Pantry",
            quantity: 5.0,
            unit: "kg",
            min: 2.0,
            max: 10.0,
            cost: 12.99,
            supplier: "Local Grocery Store",
            shelf_life_days: 180,
            notes: "Organic, unbleached",
        },
        Stock {
            name: "Extra Virgin Olive Oil",
            category: "Pantry",
            location: "Cabinet",
            quantity: 2.0,
            unit: "L",
            min: 1.0,
            max: 5.0,
            cost: 24.99,
            supplier: "Specialty Foods Market",
            shelf_life_days: 365,
            notes: "Cold-pressed, Italian import",
        },
        Stock {
            name: "Fresh Milk",
            category: "Dairy",
            location: "Refrigerator",
            quantity: 1.0,
            unit: "L",
            min: 2.0,
            max: 4.0,
            cost: 3.99,
            supplier: "Local Dairy Farm",
            shelf_life_days: 5,
            notes: "Organic, full cream",
        },
        Stock {
            name: "Roma Tomatoes",
            category: "Produce",
            location: "Refrigerator",
            quantity: 0.5,
            unit: "kg",
            min: 1.0,
            max: 3.0,
            cost: 4.50,
            supplier: "Farmer's Market",
            shelf_life_days: 10,
            notes: "Fresh, locally grown",
        },
        Stock {
            name: "Ground Coffee",
            category: "Beverages",
            location: "Pantry",
            quantity: 0.25,
            unit: "kg",
            min: 0.5,
            max: 2.0,
            cost: 18.99,
            supplier: "Coffee Roasters Co.",
            shelf_life_days: 90,
            notes: "Medium roast, arabica beans",
        },
        Stock {
            name: "Spaghetti",
            category: "Pasta",
            location: "Pantry",
            quantity: 2.0,
            unit: "kg",
            min: 1.0,
            max: 5.0,
            cost: 3.49,
            supplier: "Local Grocery Store",
            shelf_life_days: 365,
            notes: "Bronze-cut durum wheat",
        },
        Stock {
            name: "Eggs",
            category: "Dairy",
            location: "Refrigerator",
            quantity: 12.0,
            unit: "pieces",
            min: 6.0,
            max: 24.0,
            cost: 0.35,
            supplier: "Local Dairy Farm",
            shelf_life_days: 21,
            notes: "Free range",
        },
    ]
    .into_iter()
    .map(|s| stock(s, today))
    .collect();

    DataFile { recipes, inventory }
}
