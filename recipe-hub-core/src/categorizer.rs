//! Grocery aisle categories for shopping list entries.
//!
//! Keywords come from `data/ingredients.json`, embedded at compile time.
//! The longest keyword contained in the ingredient text wins, so
//! "cream cheese" lands in Cheese rather than Dairy & Eggs.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const OTHER: &str = "Other";

/// Every category a keyword may map to, in aisle order.
pub const CATEGORIES: &[&str] = &[
    "Produce",
    "Meat & Seafood",
    "Dairy & Eggs",
    "Cheese",
    "Bakery & Bread",
    "Frozen",
    "Pasta & Rice",
    "Canned Goods",
    "Baking",
    "Spices & Seasonings",
    "Condiments & Sauces",
    "Oils & Vinegars",
    "Nuts & Dried Fruit",
    "Beverages",
    "Snacks",
    OTHER,
];

#[derive(Deserialize)]
struct KeywordTable {
    categories: HashMap<String, String>,
}

/// (keyword, category) pairs, longest keyword first, ties alphabetical.
static KEYWORDS: LazyLock<Vec<(String, &'static str)>> = LazyLock::new(|| {
    let table: KeywordTable = serde_json::from_str(include_str!("../data/ingredients.json"))
        .expect("embedded ingredients.json is valid");

    let mut keywords: Vec<(String, &'static str)> = table
        .categories
        .into_iter()
        .map(|(keyword, category)| (keyword.to_lowercase(), known_category(&category)))
        .collect();
    keywords.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    keywords
});

fn known_category(name: &str) -> &'static str {
    CATEGORIES
        .iter()
        .copied()
        .find(|c| *c == name)
        .unwrap_or(OTHER)
}

/// Aisle category for an ingredient, or [`OTHER`].
pub fn categorize(ingredient: &str) -> &'static str {
    let lower = ingredient.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword.as_str()))
        .map_or(OTHER, |(_, category)| *category)
}
