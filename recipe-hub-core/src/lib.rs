pub mod alerts;
pub mod availability;
pub mod categorizer;
mod decimal;
pub mod error;
pub mod import;
pub mod ingredient_parser;
pub mod input;
pub mod matching;
pub mod model;
pub mod preparation;
pub mod ratings;
pub mod repository;
pub mod sample;
pub mod scaling;
pub mod shopping;
pub mod store;
pub mod suggestion;

pub use availability::{check_availability, AvailabilityReport};
pub use error::{FieldError, HubError, Result, ValidationError};
pub use import::{DataFile, ImportReport};
pub use ingredient_parser::{parse_line, IngredientInput, IngredientLine};
pub use input::Loose;
pub use matching::{Availability, MatchStrategy, SubstringMatch};
pub use model::{
    InventoryInput, InventoryItem, InventorySnapshot, Recipe, RecipeInput, RecipeSnapshot,
};
pub use preparation::{prepare, PreparationMode, PreparationReport};
pub use repository::{InventoryFilter, InventoryRepo, RecipeFilter, RecipeRepo};
pub use shopping::{shopping_list, ShoppingList};
pub use store::Store;
pub use suggestion::{suggest_recipes, SuggestionReport};
