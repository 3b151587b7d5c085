//! Validated entities.
//!
//! Both entities are built from a loosely-typed input. Full construction
//! requires every mandatory field; `update` validates only the fields that
//! are present. Either way every violation is reported at once and nothing is
//! stored or mutated unless the whole payload is valid.
//!
//! Only non-emptiness is enforced for `mealType`, `cuisineType` and
//! `difficulty`. Enumerated values are an HTTP-boundary concern.

mod inventory;
mod recipe;

pub use inventory::{InventoryInput, InventoryItem, InventorySnapshot};
pub use recipe::{Recipe, RecipeInput, RecipeSnapshot};

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::input::Loose;

/// Accumulates field errors while normalizing a payload.
pub(crate) struct Checker {
    partial: bool,
    errors: ValidationError,
}

impl Checker {
    pub(crate) fn new(partial: bool) -> Self {
        Self {
            partial,
            errors: ValidationError::new(),
        }
    }

    pub(crate) fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(field, message);
    }

    /// The supplied value, recording "Missing field" on full construction.
    pub(crate) fn present<'v, T>(&mut self, field: &str, value: &'v Option<T>) -> Option<&'v T> {
        if value.is_none() && !self.partial {
            self.fail(field, format!("Missing field: {field}"));
        }
        value.as_ref()
    }

    pub(crate) fn non_empty_text(&mut self, field: &str, value: &Option<Loose>) -> Option<String> {
        let value = self.present(field, value)?;
        match value.as_non_empty_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.fail(field, format!("{field} must be a non-empty string"));
                None
            }
        }
    }

    /// Optional free-form string; empty is allowed.
    pub(crate) fn optional_text(&mut self, field: &str, value: &Option<Loose>) -> Option<String> {
        let value = value.as_ref()?;
        match value.as_trimmed_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.fail(field, format!("{field} must be a string"));
                None
            }
        }
    }

    /// Optional string that must not be blank when supplied.
    pub(crate) fn optional_non_empty_text(
        &mut self,
        field: &str,
        value: &Option<Loose>,
    ) -> Option<String> {
        let value = value.as_ref()?;
        match value.as_non_empty_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.fail(field, format!("{field} must be a non-empty string"));
                None
            }
        }
    }

    pub(crate) fn number(
        &mut self,
        field: &str,
        value: &Option<Loose>,
        required: bool,
        accept: fn(f64) -> bool,
        message: &str,
    ) -> Option<f64> {
        let value = if required {
            self.present(field, value)?
        } else {
            value.as_ref()?
        };
        match value.as_number().filter(|n| accept(*n)) {
            Some(n) => Some(n),
            None => {
                self.fail(field, message);
                None
            }
        }
    }

    pub(crate) fn iso_date(&mut self, field: &str, value: &Option<Loose>) -> Option<NaiveDate> {
        let value = value.as_ref()?;
        match value.as_iso_date() {
            Some(d) => Some(d),
            None => {
                self.fail(field, format!("{field} must be ISO yyyy-mm-dd"));
                None
            }
        }
    }

    /// Date that may be cleared with an empty string: `Some(None)` means clear.
    pub(crate) fn clearable_date(
        &mut self,
        field: &str,
        value: &Option<Loose>,
    ) -> Option<Option<NaiveDate>> {
        let value = value.as_ref()?;
        if value.as_trimmed_str() == Some("") {
            return Some(None);
        }
        match value.as_iso_date() {
            Some(d) => Some(Some(d)),
            None => {
                self.fail(field, format!("{field} must be ISO yyyy-mm-dd or empty"));
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        self.errors.into_result()
    }
}

pub(crate) fn non_negative(n: f64) -> bool {
    n >= 0.0
}

pub(crate) fn positive(n: f64) -> bool {
    n > 0.0
}

pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
