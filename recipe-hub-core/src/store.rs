//! The single owner of all recipe, inventory and rating state.
//!
//! A `Store` is an explicit value handed to whoever needs it. The server
//! wraps one in a mutex; the CLI owns one outright.

use chrono::NaiveDate;

use crate::alerts::{self, AlertReport, Analytics};
use crate::availability::{self, AvailabilityReport};
use crate::error::{HubError, Result};
use crate::import::{DataFile, ImportFailure, ImportReport, Section};
use crate::matching::{MatchStrategy, SubstringMatch};
use crate::model::RecipeSnapshot;
use crate::preparation::{self, PreparationMode, PreparationReport};
use crate::ratings::{RatingBook, RatingOutcome, RatingSummary};
use crate::repository::{InventoryRepo, RecipeRepo};
use crate::sample::sample_data;
use crate::scaling::{self, ScaledRecipe};
use crate::shopping::{self, ShoppingList};
use crate::suggestion::{self, SuggestionReport};

#[derive(Debug, Default)]
pub struct Store<S = SubstringMatch> {
    recipes: RecipeRepo,
    inventory: InventoryRepo,
    ratings: RatingBook,
    strategy: S,
}

impl Store {
    /// An empty store using substring matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the demo recipes and pantry.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        let mut store = Self::new();
        let report = store.import(&sample_data(today));
        for failure in &report.failures {
            tracing::warn!(
                section = ?failure.section,
                index = failure.index,
                error = %failure.error,
                "Skipped invalid sample entry"
            );
        }
        store
    }
}

impl<S: MatchStrategy> Store<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Store {
            recipes: RecipeRepo::new(),
            inventory: InventoryRepo::new(),
            ratings: RatingBook::new(),
            strategy,
        }
    }

    pub fn recipes(&self) -> &RecipeRepo {
        &self.recipes
    }

    pub fn recipes_mut(&mut self) -> &mut RecipeRepo {
        &mut self.recipes
    }

    pub fn inventory(&self) -> &InventoryRepo {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryRepo {
        &mut self.inventory
    }

    /// Hard-delete a recipe along with its ratings.
    pub fn delete_recipe(&mut self, id: &str) -> Result<RecipeSnapshot> {
        let removed = self
            .recipes
            .delete(id)
            .ok_or_else(|| HubError::recipe_not_found(id))?;
        self.ratings.forget(id);
        Ok(removed)
    }

    pub fn check_availability(&self, recipe_id: &str) -> Result<AvailabilityReport> {
        let recipe = self
            .recipes
            .get(recipe_id)
            .ok_or_else(|| HubError::recipe_not_found(recipe_id))?;
        Ok(availability::check_availability(
            recipe,
            self.inventory.items(),
            &self.strategy,
        ))
    }

    pub fn suggest(&self) -> SuggestionReport {
        suggestion::suggest_recipes(self.recipes.all(), self.inventory.items(), &self.strategy)
    }

    /// Deduct a recipe's ingredients. Shortages are reported in the result,
    /// not as errors.
    pub fn prepare(
        &mut self,
        recipe_id: &str,
        servings: f64,
        mode: PreparationMode,
    ) -> Result<PreparationReport> {
        let recipe = self
            .recipes
            .get(recipe_id)
            .ok_or_else(|| HubError::recipe_not_found(recipe_id))?;
        Ok(preparation::prepare(
            recipe,
            servings,
            self.inventory.items_mut(),
            &self.strategy,
            mode,
        )?)
    }

    pub fn shopping_list(&self, recipe_ids: &[String]) -> Result<ShoppingList> {
        Ok(shopping::shopping_list(
            recipe_ids,
            self.recipes.all(),
            self.inventory.items(),
            &self.strategy,
        )?)
    }

    pub fn scale(&self, recipe_id: &str, new_servings: f64) -> Result<ScaledRecipe> {
        let recipe = self
            .recipes
            .get(recipe_id)
            .ok_or_else(|| HubError::recipe_not_found(recipe_id))?;
        Ok(scaling::scale_recipe(recipe, new_servings)?)
    }

    /// Ratings are only accepted for recipes that exist.
    pub fn rate(&mut self, recipe_id: &str, rating: f64, review: Option<&str>) -> Result<RatingOutcome> {
        if self.recipes.get(recipe_id).is_none() {
            return Err(HubError::recipe_not_found(recipe_id));
        }
        Ok(self.ratings.rate(recipe_id, rating, review)?)
    }

    pub fn rating_summary(&self, recipe_id: &str) -> Result<RatingSummary> {
        if self.recipes.get(recipe_id).is_none() {
            return Err(HubError::recipe_not_found(recipe_id));
        }
        Ok(self.ratings.summary(recipe_id))
    }

    pub fn alerts(&self, today: NaiveDate) -> AlertReport {
        alerts::alerts(self.inventory.items(), today)
    }

    pub fn analytics(&self, today: NaiveDate) -> Analytics {
        alerts::analytics(self.inventory.items(), today)
    }

    /// Add every entry of `data` through the validated `add` path. Invalid
    /// entries are skipped and listed in the report.
    pub fn import(&mut self, data: &DataFile) -> ImportReport {
        let mut report = ImportReport::default();
        for (index, input) in data.recipes.iter().enumerate() {
            match self.recipes.add(input) {
                Ok(_) => report.recipes_imported += 1,
                Err(error) => report.failures.push(ImportFailure {
                    section: Section::Recipes,
                    index,
                    error,
                }),
            }
        }
        for (index, input) in data.inventory.iter().enumerate() {
            match self.inventory.add(input) {
                Ok(_) => report.inventory_imported += 1,
                Err(error) => report.failures.push(ImportFailure {
                    section: Section::Inventory,
                    index,
                    error,
                }),
            }
        }
        tracing::info!(
            recipes = report.recipes_imported,
            inventory = report.inventory_imported,
            failures = report.failures.len(),
            "Import finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryInput, RecipeInput};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
    }

    #[test]
    fn test_sample_store() {
        let store = Store::with_sample_data(today());
        assert_eq!(store.recipes().len(), 2);
        assert_eq!(store.inventory().len(), 7);
        assert_eq!(store.recipes().all()[0].recipe_id(), "R-00001");
        assert_eq!(store.inventory().items()[6].inventory_id(), "I-00007");
    }

    #[test]
    fn test_sample_data_imports_cleanly() {
        let mut store = Store::new();
        let report = store.import(&sample_data(today()));
        assert!(report.is_clean(), "{:?}", report.failures);
    }

    #[test]
    fn test_unknown_recipe_is_not_found() {
        let mut store = Store::new();
        assert!(matches!(store.check_availability("R-00404"), Err(HubError::NotFound { .. })));
        assert!(matches!(
            store.prepare("R-00404", 1.0, PreparationMode::BestEffort),
            Err(HubError::NotFound { .. })
        ));
        assert!(matches!(store.rate("R-00404", 5.0, None), Err(HubError::NotFound { .. })));
        assert!(matches!(store.delete_recipe("R-00404"), Err(HubError::NotFound { .. })));
    }

    #[test]
    fn test_prepare_deducts_from_store_inventory() {
        let mut store = Store::with_sample_data(today());
        let report = store.prepare("R-00001", 4.0, PreparationMode::BestEffort).unwrap();
        // 400 of "spaghetti" against 2 kg in stock: unit-blind, so short.
        assert!(!report.success);
        let eggs = store
            .inventory()
            .items()
            .iter()
            .find(|i| i.ingredient_name() == "Eggs")
            .unwrap();
        assert_eq!(eggs.quantity(), 8.0);
    }

    #[test]
    fn test_invalid_servings_is_validation_error() {
        let mut store = Store::with_sample_data(today());
        assert!(matches!(
            store.prepare("R-00001", 0.0, PreparationMode::BestEffort),
            Err(HubError::Validation(_))
        ));
    }

    #[test]
    fn test_import_reports_failures_by_index() {
        let mut store = Store::new();
        let data = DataFile {
            recipes: vec![RecipeInput::default()],
            inventory: vec![
                InventoryInput {
                    ingredient_name: Some("Rice".into()),
                    quantity: Some(1.0.into()),
                    unit: Some("kg".into()),
                    ..Default::default()
                },
                InventoryInput {
                    ingredient_name: Some("Oil".into()),
                    quantity: Some((-1.0).into()),
                    unit: Some("L".into()),
                    ..Default::default()
                },
            ],
        };
        let report = store.import(&data);
        assert_eq!(report.recipes_imported, 0);
        assert_eq!(report.inventory_imported, 1);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[1].section, Section::Inventory);
        assert_eq!(report.failures[1].index, 1);
        assert!(report.failures[1].error.names_field("quantity"));
    }

    #[test]
    fn test_deleting_recipe_drops_ratings() {
        let mut store = Store::with_sample_data(today());
        store.rate("R-00002", 5.0, Some("Great")).unwrap();
        store.delete_recipe("R-00002").unwrap();
        assert!(store.rating_summary("R-00002").is_err());
    }
}
