//! Loosely-typed payload values.
//!
//! Payloads arrive from JSON bodies and HTML form posts, so a number may show
//! up as `25` or `"25"`. Values are kept as received and interpreted during
//! validation, where a wrong shape becomes a field error rather than a
//! deserialization failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ingredient_parser::{split_blob, IngredientInput};

/// A scalar as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum Loose {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Loose {
    /// Numbers as-is, numeric-looking strings parsed. Non-finite values are rejected.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Loose::Number(n) => *n,
            Loose::Text(s) => s.trim().parse::<f64>().ok()?,
            Loose::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Trimmed text, only when the value was submitted as a string.
    pub fn as_trimmed_str(&self) -> Option<&str> {
        match self {
            Loose::Text(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// Trimmed, non-empty text.
    pub fn as_non_empty_str(&self) -> Option<&str> {
        self.as_trimmed_str().filter(|s| !s.is_empty())
    }

    /// `yyyy-mm-dd` only.
    pub fn as_iso_date(&self) -> Option<NaiveDate> {
        let s = self.as_trimmed_str()?;
        if s.len() != 10 {
            return None;
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    /// Best-effort text rendering, used for free-form quantity tokens.
    pub fn to_text(&self) -> String {
        match self {
            Loose::Number(n) => n.to_string(),
            Loose::Text(s) => s.trim().to_string(),
            Loose::Other(v) => v.to_string(),
        }
    }
}

impl From<&str> for Loose {
    fn from(s: &str) -> Self {
        Loose::Text(s.to_string())
    }
}

impl From<String> for Loose {
    fn from(s: String) -> Self {
        Loose::Text(s)
    }
}

impl From<f64> for Loose {
    fn from(n: f64) -> Self {
        Loose::Number(n)
    }
}

/// Ingredients as a JSON array or a pasted blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum IngredientList {
    Items(Vec<IngredientInput>),
    Blob(String),
}

impl IngredientList {
    pub fn to_inputs(&self) -> Vec<IngredientInput> {
        match self {
            IngredientList::Items(items) => items.clone(),
            IngredientList::Blob(blob) => split_blob(blob, &['\n', ','])
                .into_iter()
                .map(IngredientInput::Text)
                .collect(),
        }
    }
}

impl<T: Into<IngredientInput>> FromIterator<T> for IngredientList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IngredientList::Items(iter.into_iter().map(Into::into).collect())
    }
}

/// Instruction steps as a JSON array or a pasted blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum StepList {
    Items(Vec<Loose>),
    Blob(String),
}

impl StepList {
    pub fn to_steps(&self) -> Vec<Loose> {
        match self {
            StepList::Items(items) => items.clone(),
            StepList::Blob(blob) => split_blob(blob, &['\n', '.'])
                .into_iter()
                .map(Loose::Text)
                .collect(),
        }
    }
}

impl<T: Into<Loose>> FromIterator<T> for StepList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        StepList::Items(iter.into_iter().map(Into::into).collect())
    }
}
