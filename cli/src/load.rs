use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use recipe_hub_core::{DataFile, Store};

/// Build the in-memory store for one invocation.
///
/// Sample data goes in first when requested, or when there is no data file
/// to read, so a bare `recipe-hub recipes` still has something to show.
pub fn load_store(data: Option<&Path>, sample: bool, today: NaiveDate) -> Result<Store> {
    let mut store = if sample || data.is_none() {
        Store::with_sample_data(today)
    } else {
        Store::new()
    };

    if let Some(path) = data {
        let file = DataFile::from_path(path)
            .with_context(|| format!("Failed to load data file {}", path.display()))?;
        let report = store.import(&file);
        for failure in &report.failures {
            tracing::warn!(
                section = ?failure.section,
                index = failure.index,
                error = %failure.error,
                "Skipped invalid entry"
            );
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
    }

    fn data_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_data_file_uses_sample() {
        let store = load_store(None, false, today()).unwrap();
        assert_eq!(store.recipes().len(), 2);
        assert_eq!(store.inventory().len(), 7);
    }

    #[test]
    fn test_data_file_alone() {
        let file = data_file(
            r#"{
                "inventory": [
                    {"ingredientName": "Rice", "quantity": 2, "unit": "kg"},
                    {"ingredientName": "Oil", "quantity": -1, "unit": "L"}
                ]
            }"#,
        );
        let store = load_store(Some(file.path()), false, today()).unwrap();
        assert!(store.recipes().is_empty());
        assert_eq!(store.inventory().len(), 1);
        assert_eq!(store.inventory().items()[0].ingredient_name(), "Rice");
    }

    #[test]
    fn test_data_file_on_top_of_sample() {
        let file = data_file(
            r#"{"recipes": [{
                "title": "Rice Bowl",
                "chef": "Khush",
                "ingredients": "200g rice, 1 egg",
                "instructions": "Cook rice. Fry egg.",
                "mealType": "Lunch",
                "cuisineType": "Asian",
                "prepTime": "20",
                "difficulty": "Easy",
                "servings": 1
            }]}"#,
        );
        let store = load_store(Some(file.path()), true, today()).unwrap();
        assert_eq!(store.recipes().len(), 3);
        assert_eq!(store.recipes().all()[2].recipe_id(), "R-00003");
    }

    #[test]
    fn test_unreadable_data_file() {
        let err = load_store(Some(Path::new("/nonexistent/pantry.json")), false, today()).unwrap_err();
        assert!(err.to_string().contains("Failed to load data file"));

        let file = data_file("not json");
        assert!(load_store(Some(file.path()), false, today()).is_err());
    }
}
