use serde::Serialize;
use thiserror::Error;

/// One violated field and a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation, not just the first.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[error("Validation failed: {}", self.messages().join("; "))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a single-field failure.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> std::result::Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Whether any recorded error is about `field`.
    pub fn names_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl HubError {
    pub fn recipe_not_found(id: &str) -> Self {
        HubError::NotFound {
            kind: "Recipe",
            id: id.to_string(),
        }
    }

    pub fn inventory_not_found(id: &str) -> Self {
        HubError::NotFound {
            kind: "Inventory item",
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
