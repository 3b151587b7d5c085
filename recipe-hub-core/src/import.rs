//! Bulk loading of recipes and inventory from a JSON data file.
//!
//! The file is only ever read. Each entry goes through the same validated
//! `add` path as an API create, so invalid entries are skipped and reported
//! without blocking the valid ones.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::model::{InventoryInput, RecipeInput};

/// `{"recipes": [...], "inventory": [...]}`. Either list may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DataFile {
    #[serde(default)]
    pub recipes: Vec<RecipeInput>,
    #[serde(default)]
    pub inventory: Vec<InventoryInput>,
}

impl DataFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Which section of the data file an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Recipes,
    Inventory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImportFailure {
    pub section: Section,
    /// Position of the entry within its section.
    pub index: usize,
    pub error: ValidationError,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub recipes_imported: usize,
    pub inventory_imported: usize,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
