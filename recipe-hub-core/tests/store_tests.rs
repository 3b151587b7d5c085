//! End-to-end tests through `Store`.
//!
//! Preparation cases are JSON files in `fixtures/preparation/`, each holding
//! a data file to import, the preparation request, and the expected stock
//! afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use glob::glob;
use recipe_hub_core::preparation::InsufficientStock;
use recipe_hub_core::{
    DataFile, HubError, InventoryInput, PreparationMode, RecipeInput, Store,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreparationCase {
    description: String,
    data: DataFile,
    recipe_id: String,
    servings: f64,
    mode: PreparationMode,
    expected: ExpectedPreparation,
}

#[derive(Debug, Deserialize)]
struct ExpectedPreparation {
    success: bool,
    committed: bool,
    insufficient: Vec<ExpectedShortage>,
    remaining: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ExpectedShortage {
    name: String,
    required: f64,
    available: f64,
}

impl PartialEq<InsufficientStock> for ExpectedShortage {
    fn eq(&self, other: &InsufficientStock) -> bool {
        self.name == other.name && self.required == other.required && self.available == other.available
    }
}

fn load_preparation_cases() -> Vec<(String, PreparationCase)> {
    let pattern = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/preparation/*.json");
    let pattern_str = pattern.to_string_lossy();

    let mut cases = Vec::new();
    for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: PreparationCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    assert!(!cases.is_empty(), "No test fixtures found for {}", pattern_str);
    cases
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
}

fn recipe_input(title: &str, ingredients: &[&str], servings: f64) -> RecipeInput {
    RecipeInput {
        title: Some(title.into()),
        chef: Some("Test Chef".into()),
        ingredients: Some(ingredients.iter().copied().collect()),
        instructions: Some(["Cook"].into_iter().collect()),
        meal_type: Some("Dinner".into()),
        cuisine_type: Some("Other".into()),
        prep_time: Some(15.0.into()),
        difficulty: Some("Easy".into()),
        servings: Some(servings.into()),
        ..Default::default()
    }
}

fn inventory_input(name: &str, quantity: f64) -> InventoryInput {
    InventoryInput {
        ingredient_name: Some(name.into()),
        quantity: Some(quantity.into()),
        unit: Some("pieces".into()),
        ..Default::default()
    }
}

#[test]
fn test_preparation_golden_files() {
    for (name, case) in load_preparation_cases() {
        println!("Testing: {} ({})", name, case.description);

        let mut store = Store::new();
        let import = store.import(&case.data);
        assert!(import.is_clean(), "Fixture {} did not import: {:?}", name, import.failures);

        let report = store
            .prepare(&case.recipe_id, case.servings, case.mode)
            .unwrap_or_else(|e| panic!("Preparation failed for {}: {}", name, e));

        assert_eq!(report.success, case.expected.success, "success mismatch for {}", name);
        assert_eq!(report.committed, case.expected.committed, "committed mismatch for {}", name);
        assert_eq!(
            case.expected.insufficient, report.usage_report.insufficient_stock,
            "insufficient stock mismatch for {}",
            name
        );

        for item in store.inventory().items() {
            if let Some(expected) = case.expected.remaining.get(item.ingredient_name()) {
                assert_eq!(
                    item.quantity(),
                    *expected,
                    "{} remaining mismatch for {}",
                    item.ingredient_name(),
                    name
                );
            }
        }
    }
}

#[test]
fn test_consecutive_adds_get_sequential_ids() {
    let mut store = Store::with_sample_data(today());
    let a = store.recipes_mut().add(&recipe_input("Soup", &["1 leek"], 2.0)).unwrap();
    let b = store.recipes_mut().add(&recipe_input("Stew", &["1 leek"], 2.0)).unwrap();
    assert_eq!(a.recipe_id, "R-00003");
    assert_eq!(b.recipe_id, "R-00004");

    let i = store.inventory_mut().add(&inventory_input("Leek", 3.0)).unwrap();
    assert_eq!(i.inventory_id, "I-00008");
}

#[test]
fn test_can_make_implies_no_shortage_at_recipe_servings() {
    let mut store = Store::new();
    store.recipes_mut().add(&recipe_input("Omelette", &["3 eggs", "Chives", "10g butter"], 2.0)).unwrap();
    store.inventory_mut().add(&inventory_input("eggs", 3.0)).unwrap();
    store.inventory_mut().add(&inventory_input("chives", 1.0)).unwrap();
    store.inventory_mut().add(&inventory_input("butter", 10.0)).unwrap();

    let availability = store.check_availability("R-00001").unwrap();
    assert!(availability.can_make);

    let report = store.prepare("R-00001", 2.0, PreparationMode::BestEffort).unwrap();
    assert!(report.usage_report.insufficient_stock.is_empty());
    assert!(report.success);

    let availability = store.check_availability("R-00001").unwrap();
    assert!(!availability.can_make);
}

#[test]
fn test_lines_sharing_an_item_agree_with_preparation() {
    let mut store = Store::new();
    store.recipes_mut().add(&recipe_input("Custard", &["3 eggs", "3 egg yolks"], 1.0)).unwrap();
    store.inventory_mut().add(&inventory_input("egg", 5.0)).unwrap();

    let availability = store.check_availability("R-00001").unwrap();
    assert!(!availability.can_make);
    assert_eq!(availability.partial[0].available, 2.0);

    let restock = InventoryInput {
        quantity: Some(6.0.into()),
        ..Default::default()
    };
    store.inventory_mut().update("I-00001", &restock).unwrap();
    let availability = store.check_availability("R-00001").unwrap();
    assert!(availability.can_make);

    let report = store.prepare("R-00001", 1.0, PreparationMode::BestEffort).unwrap();
    assert!(report.usage_report.insufficient_stock.is_empty());
    assert_eq!(store.inventory().items()[0].quantity(), 0.0);
}

#[test]
fn test_repeated_preparation_never_drives_stock_negative() {
    let mut store = Store::with_sample_data(today());
    for servings in [1.0, 4.0, 8.0, 2.5, 16.0, 0.5] {
        for id in ["R-00001", "R-00002"] {
            for mode in [PreparationMode::BestEffort, PreparationMode::AllOrNothing] {
                store.prepare(id, servings, mode).unwrap();
                assert!(store.inventory().items().iter().all(|i| i.quantity() >= 0.0));
            }
        }
    }
}

#[test]
fn test_fully_stocked_suggestion() {
    let mut store = Store::new();
    store.recipes_mut().add(&recipe_input("Toast", &["2 slices bread", "Butter"], 1.0)).unwrap();
    store.recipes_mut().add(&recipe_input("Salad", &["Lettuce", "Butter"], 1.0)).unwrap();
    store.inventory_mut().add(&inventory_input("bread", 1.0)).unwrap();
    store.inventory_mut().add(&inventory_input("butter", 1.0)).unwrap();

    let report = store.suggest();
    assert_eq!(report.perfect_matches, 1);
    assert_eq!(report.total_suggestions, 2);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["suggestions"][0]["recipe"]["title"], "Toast");
    assert_eq!(json["suggestions"][0]["matchPercentage"], "100.0");
    assert_eq!(json["suggestions"][0]["canMake"], true);
    assert_eq!(json["suggestions"][1]["matchPercentage"], "50.0");
}

#[test]
fn test_eleven_soft_deletes_keep_the_last_ten() {
    let mut store = Store::new();
    for n in 0..11 {
        store.inventory_mut().add(&inventory_input(&format!("Item {n}"), 1.0)).unwrap();
    }
    for n in 1..=11 {
        store.inventory_mut().soft_delete(&format!("I-{n:05}")).unwrap();
    }

    let deleted = store.inventory().recently_deleted();
    assert_eq!(deleted.len(), 10);
    assert_eq!(deleted[0].item.inventory_id, "I-00002");
    assert_eq!(deleted[9].item.inventory_id, "I-00011");

    assert!(store.inventory_mut().restore("I-00001").is_none());
    assert!(store.inventory_mut().restore("I-00011").is_some());
    assert_eq!(store.inventory().len(), 1);
}

#[test]
fn test_negative_quantity_rejected() {
    let mut store = Store::new();
    let err = store.inventory_mut().add(&inventory_input("Rice", -1.0)).unwrap_err();
    assert!(err.names_field("quantity"));
    assert!(store.inventory().is_empty());
}

#[test]
fn test_shopping_list_for_sample_recipes() {
    let store = Store::with_sample_data(today());
    let list = store
        .shopping_list(&["R-00001".to_string(), "R-00002".to_string()])
        .unwrap();

    let names: Vec<&str> = list.entries.iter().map(|e| e.ingredient.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "200g pancetta",
            "100g Pecorino",
            "Pepper",
            "Bread",
            "Avocado",
            "Cherry tomatoes",
            "Feta cheese",
        ]
    );
    assert!(list.unknown_recipe_ids.is_empty());
    assert!(matches!(store.shopping_list(&[]), Err(HubError::Validation(_))));
}

#[test]
fn test_sample_alerts() {
    let store = Store::with_sample_data(today());
    let report = store.alerts(today());
    let items: Vec<&str> = report.alerts.iter().map(|a| a.item.as_str()).collect();
    // Milk, tomatoes and coffee run low; milk also expires in five days.
    assert_eq!(items, vec!["Fresh Milk", "Roma Tomatoes", "Ground Coffee", "Fresh Milk"]);
    assert_eq!(report.critical, 0);
    assert_eq!(report.warnings, 3);
}
