//! In-memory recipe and inventory collections.
//!
//! Repositories own their entities and only hand out snapshots, so callers
//! cannot mutate stored state except through `add`, `update` and the delete
//! family.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{InventoryInput, InventoryItem, InventorySnapshot, Recipe, RecipeInput, RecipeSnapshot};

pub const RECIPE_ID_PREFIX: &str = "R-";
pub const INVENTORY_ID_PREFIX: &str = "I-";
/// Soft-deleted items kept for restore; the oldest is evicted first.
pub const RECENTLY_DELETED_CAPACITY: usize = 10;

/// `prefix` followed by one more than the largest numeric suffix among
/// `existing`, zero-padded to five digits. Ids without the prefix or with a
/// non-numeric suffix are ignored.
pub fn next_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:05}", max + 1)
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Recipe list filters. Absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilter {
    /// Free-text search over title, chef, meal type, cuisine and ingredients.
    pub q: Option<String>,
    pub meal_type: Option<String>,
    pub cuisine_type: Option<String>,
    pub difficulty: Option<String>,
    pub max_prep_time: Option<f64>,
    pub min_servings: Option<f64>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.q.as_deref().is_none_or(|q| recipe.matches_query(q))
            && self
                .meal_type
                .as_deref()
                .is_none_or(|m| same_text(m, recipe.meal_type()))
            && self
                .cuisine_type
                .as_deref()
                .is_none_or(|c| same_text(c, recipe.cuisine_type()))
            && self
                .difficulty
                .as_deref()
                .is_none_or(|d| same_text(d, recipe.difficulty()))
            && self.max_prep_time.is_none_or(|max| recipe.prep_time() <= max)
            && self.min_servings.is_none_or(|min| recipe.servings() >= min)
    }
}

#[derive(Debug, Default)]
pub struct RecipeRepo {
    recipes: Vec<Recipe>,
}

impl RecipeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, filter: &RecipeFilter) -> Vec<RecipeSnapshot> {
        self.recipes
            .iter()
            .filter(|r| filter.matches(r))
            .map(Recipe::snapshot)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<RecipeSnapshot> {
        self.get(id).map(Recipe::snapshot)
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.recipe_id() == id)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Validate and append with the next free id. Any id in `input` is ignored.
    pub fn add(&mut self, input: &RecipeInput) -> Result<RecipeSnapshot, ValidationError> {
        let id = next_id(RECIPE_ID_PREFIX, self.recipes.iter().map(Recipe::recipe_id));
        let recipe = Recipe::with_id(id, input)?;
        tracing::info!(recipe_id = %recipe.recipe_id(), title = %recipe.title(), "Recipe added");
        let snapshot = recipe.snapshot();
        self.recipes.push(recipe);
        Ok(snapshot)
    }

    /// `Ok(None)` when no recipe has `id`.
    pub fn update(&mut self, id: &str, patch: &RecipeInput) -> Result<Option<RecipeSnapshot>, ValidationError> {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.recipe_id() == id) else {
            return Ok(None);
        };
        recipe.update(patch)?;
        tracing::debug!(recipe_id = id, "Recipe updated");
        Ok(Some(recipe.snapshot()))
    }

    pub fn delete(&mut self, id: &str) -> Option<RecipeSnapshot> {
        let index = self.recipes.iter().position(|r| r.recipe_id() == id)?;
        let removed = self.recipes.remove(index);
        tracing::info!(recipe_id = id, "Recipe deleted");
        Some(removed.snapshot())
    }
}

/// Inventory list filters. Absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    /// Exact owner id.
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.user_id
            .as_deref()
            .is_none_or(|u| item.user_id() == Some(u))
            && self
                .category
                .as_deref()
                .is_none_or(|c| same_text(c, item.category()))
            && self
                .location
                .as_deref()
                .is_none_or(|l| same_text(l, item.location()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteReport {
    pub deleted: Vec<String>,
    pub not_found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeletedItem {
    #[serde(flatten)]
    pub item: InventorySnapshot,
    pub deleted_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Tombstone {
    item: InventoryItem,
    deleted_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct InventoryRepo {
    items: Vec<InventoryItem>,
    recently_deleted: VecDeque<Tombstone>,
}

impl InventoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, filter: &InventoryFilter) -> Vec<InventorySnapshot> {
        self.items
            .iter()
            .filter(|i| filter.matches(i))
            .map(InventoryItem::snapshot)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<InventorySnapshot> {
        self.items
            .iter()
            .find(|i| i.inventory_id() == id)
            .map(InventoryItem::snapshot)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Mutable access for the preparation engine, in list order.
    pub fn items_mut(&mut self) -> &mut [InventoryItem] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and append with the next free id. Ids held by soft-deleted
    /// items stay reserved so a restore never collides.
    pub fn add(&mut self, input: &InventoryInput) -> Result<InventorySnapshot, ValidationError> {
        let id = next_id(
            INVENTORY_ID_PREFIX,
            self.items
                .iter()
                .chain(self.recently_deleted.iter().map(|t| &t.item))
                .map(InventoryItem::inventory_id),
        );
        let item = InventoryItem::with_id(id, input)?;
        tracing::info!(
            inventory_id = %item.inventory_id(),
            ingredient = %item.ingredient_name(),
            "Inventory item added"
        );
        let snapshot = item.snapshot();
        self.items.push(item);
        Ok(snapshot)
    }

    /// `Ok(None)` when no item has `id`.
    pub fn update(
        &mut self,
        id: &str,
        patch: &InventoryInput,
    ) -> Result<Option<InventorySnapshot>, ValidationError> {
        let Some(item) = self.items.iter_mut().find(|i| i.inventory_id() == id) else {
            return Ok(None);
        };
        item.update(patch)?;
        tracing::debug!(inventory_id = id, "Inventory item updated");
        Ok(Some(item.snapshot()))
    }

    fn take(&mut self, id: &str) -> Option<InventoryItem> {
        let index = self.items.iter().position(|i| i.inventory_id() == id)?;
        Some(self.items.remove(index))
    }

    /// Remove permanently.
    pub fn delete(&mut self, id: &str) -> Option<InventorySnapshot> {
        let removed = self.take(id)?;
        tracing::info!(inventory_id = id, "Inventory item deleted");
        Some(removed.snapshot())
    }

    pub fn bulk_delete(&mut self, ids: &[String]) -> BulkDeleteReport {
        let mut deleted = Vec::new();
        let mut not_found = Vec::new();
        for id in ids {
            match self.take(id) {
                Some(_) => deleted.push(id.clone()),
                None => not_found.push(id.clone()),
            }
        }
        tracing::info!(deleted = deleted.len(), not_found = not_found.len(), "Bulk delete");
        BulkDeleteReport { deleted, not_found }
    }

    /// Move into the recently-deleted buffer, evicting the oldest entry when
    /// it is full.
    pub fn soft_delete(&mut self, id: &str) -> Option<InventorySnapshot> {
        let item = self.take(id)?;
        let snapshot = item.snapshot();
        if self.recently_deleted.len() == RECENTLY_DELETED_CAPACITY {
            if let Some(evicted) = self.recently_deleted.pop_front() {
                tracing::info!(
                    inventory_id = %evicted.item.inventory_id(),
                    "Evicted from recently deleted"
                );
            }
        }
        self.recently_deleted.push_back(Tombstone {
            item,
            deleted_at: Utc::now(),
        });
        tracing::info!(inventory_id = id, "Inventory item soft-deleted");
        Some(snapshot)
    }

    /// Bring a soft-deleted item back to the end of the list. `None` once it
    /// has been evicted or was never soft-deleted.
    pub fn restore(&mut self, id: &str) -> Option<InventorySnapshot> {
        let index = self
            .recently_deleted
            .iter()
            .position(|t| t.item.inventory_id() == id)?;
        let tombstone = self.recently_deleted.remove(index)?;
        let snapshot = tombstone.item.snapshot();
        self.items.push(tombstone.item);
        tracing::info!(inventory_id = id, "Inventory item restored");
        Some(snapshot)
    }

    /// Oldest first.
    pub fn recently_deleted(&self) -> Vec<DeletedItem> {
        self.recently_deleted
            .iter()
            .map(|t| DeletedItem {
                item: t.item.snapshot(),
                deleted_at: t.deleted_at,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_input(title: &str, meal: &str, prep: f64, servings: f64) -> RecipeInput {
        RecipeInput {
            title: Some(title.into()),
            chef: Some("Test Chef".into()),
            ingredients: Some(["1 thing"].into_iter().collect()),
            instructions: Some(["Cook"].into_iter().collect()),
            meal_type: Some(meal.into()),
            cuisine_type: Some("Other".into()),
            prep_time: Some(prep.into()),
            difficulty: Some("Easy".into()),
            servings: Some(servings.into()),
            ..Default::default()
        }
    }

    fn inventory_input(name: &str) -> InventoryInput {
        InventoryInput {
            ingredient_name: Some(name.into()),
            quantity: Some(1.0.into()),
            unit: Some("kg".into()),
            category: Some("Pantry".into()),
            location: Some("Shelf".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id("R-", []), "R-00001");
        assert_eq!(next_id("R-", ["R-00001", "R-00007", "R-00003"]), "R-00008");
        assert_eq!(next_id("I-", ["R-00009", "I-abc", "I-00002"]), "I-00003");
    }

    #[test]
    fn test_sequential_ids_and_reuse_of_max() {
        let mut repo = RecipeRepo::new();
        let a = repo.add(&recipe_input("Toast", "Breakfast", 5.0, 1.0)).unwrap();
        let b = repo.add(&recipe_input("Soup", "Lunch", 30.0, 4.0)).unwrap();
        assert_eq!(a.recipe_id, "R-00001");
        assert_eq!(b.recipe_id, "R-00002");

        repo.delete("R-00002").unwrap();
        let c = repo.add(&recipe_input("Stew", "Dinner", 90.0, 6.0)).unwrap();
        assert_eq!(c.recipe_id, "R-00002");
    }

    #[test]
    fn test_add_ignores_supplied_id() {
        let mut repo = RecipeRepo::new();
        let input = RecipeInput {
            recipe_id: Some("R-99999".to_string()),
            ..recipe_input("Toast", "Breakfast", 5.0, 1.0)
        };
        assert_eq!(repo.add(&input).unwrap().recipe_id, "R-00001");
    }

    #[test]
    fn test_invalid_add_leaves_repo_unchanged() {
        let mut repo = RecipeRepo::new();
        assert!(repo.add(&RecipeInput::default()).is_err());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_recipe_filters() {
        let mut repo = RecipeRepo::new();
        repo.add(&recipe_input("Toast", "Breakfast", 5.0, 1.0)).unwrap();
        repo.add(&recipe_input("Soup", "Lunch", 30.0, 4.0)).unwrap();
        repo.add(&recipe_input("Stew", "Dinner", 90.0, 6.0)).unwrap();

        let titles = |f: RecipeFilter| -> Vec<String> { repo.list(&f).into_iter().map(|r| r.title).collect() };
        assert_eq!(titles(RecipeFilter::default()).len(), 3);
        assert_eq!(
            titles(RecipeFilter {
                meal_type: Some("lunch".to_string()),
                ..Default::default()
            }),
            vec!["Soup"]
        );
        assert_eq!(
            titles(RecipeFilter {
                max_prep_time: Some(30.0),
                min_servings: Some(2.0),
                ..Default::default()
            }),
            vec!["Soup"]
        );
        assert_eq!(
            titles(RecipeFilter {
                q: Some("ste".to_string()),
                ..Default::default()
            }),
            vec!["Stew"]
        );
    }

    #[test]
    fn test_update_unknown_id() {
        let mut repo = RecipeRepo::new();
        assert_eq!(repo.update("R-00001", &RecipeInput::default()).unwrap(), None);
    }

    #[test]
    fn test_inventory_filters() {
        let mut repo = InventoryRepo::new();
        repo.add(&InventoryInput {
            user_id: Some("u1".into()),
            ..inventory_input("Rice")
        })
        .unwrap();
        repo.add(&InventoryInput {
            location: Some("Fridge".into()),
            ..inventory_input("Milk")
        })
        .unwrap();

        let by_user = repo.list(&InventoryFilter {
            user_id: Some("u1".to_string()),
            ..Default::default()
        });
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user[0].ingredient_name, "Rice");

        let by_location = repo.list(&InventoryFilter {
            location: Some("fridge".to_string()),
            ..Default::default()
        });
        assert_eq!(by_location[0].ingredient_name, "Milk");
    }

    #[test]
    fn test_bulk_delete() {
        let mut repo = InventoryRepo::new();
        repo.add(&inventory_input("Rice")).unwrap();
        repo.add(&inventory_input("Milk")).unwrap();
        let report = repo.bulk_delete(&["I-00002".to_string(), "I-00042".to_string()]);
        assert_eq!(report.deleted, vec!["I-00002"]);
        assert_eq!(report.not_found, vec!["I-00042"]);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_soft_delete_and_restore() {
        let mut repo = InventoryRepo::new();
        repo.add(&inventory_input("Rice")).unwrap();
        repo.add(&inventory_input("Milk")).unwrap();

        repo.soft_delete("I-00001").unwrap();
        assert!(repo.get_by_id("I-00001").is_none());
        assert_eq!(repo.recently_deleted()[0].item.ingredient_name, "Rice");

        // The soft-deleted id stays reserved.
        assert_eq!(repo.add(&inventory_input("Oats")).unwrap().inventory_id, "I-00003");

        let restored = repo.restore("I-00001").unwrap();
        assert_eq!(restored.ingredient_name, "Rice");
        let order: Vec<&str> = repo.items().iter().map(InventoryItem::inventory_id).collect();
        assert_eq!(order, vec!["I-00002", "I-00003", "I-00001"]);
        assert!(repo.recently_deleted().is_empty());
        assert!(repo.restore("I-00001").is_none());
    }

    #[test]
    fn test_deleted_item_json_is_flat() {
        let mut repo = InventoryRepo::new();
        repo.add(&inventory_input("Rice")).unwrap();
        repo.soft_delete("I-00001").unwrap();
        let json = serde_json::to_value(repo.recently_deleted()).unwrap();
        assert_eq!(json[0]["inventoryId"], "I-00001");
        assert!(json[0]["deletedAt"].is_string());
    }
}
