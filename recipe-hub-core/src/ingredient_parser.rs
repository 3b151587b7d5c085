//! Ingredient parsing module.
//!
//! Splits free-text ingredient lines (e.g., "400g spaghetti") into a quantity
//! token and an item name.
//!
//! Grammar for a text line, after trimming:
//!
//! ```text
//! line := qty WS+ item | item
//! qty  := DIGITS ("." DIGITS)? WS* LETTERS*
//! ```
//!
//! This is best-effort and unit-blind: "400g" and "2 kg" are both just numbers
//! to the rest of the crate. A leading word after the number is swallowed into
//! the quantity ("4 large eggs" -> qty "4 large", item "eggs").

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::Loose;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?\s*[a-zA-Z]*)\s+(.+)$").expect("ingredient line pattern")
});

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number pattern"));

/// Normalized ingredient: an item name plus a (possibly empty) quantity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IngredientLine {
    pub item: String,
    #[serde(default)]
    pub qty: String,
}

impl IngredientLine {
    pub fn new(item: impl Into<String>, qty: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            qty: qty.into(),
        }
    }

    /// The line as a person would write it: "400g spaghetti", or just the
    /// item when there is no quantity.
    pub fn display(&self) -> String {
        if self.qty.is_empty() {
            self.item.clone()
        } else {
            format!("{} {}", self.qty, self.item)
        }
    }

    /// First number in the quantity token, falling back to the first number
    /// in the item text. `None` when neither has one; callers treat that as 1.
    pub fn required_quantity(&self) -> Option<f64> {
        leading_number(&self.qty).or_else(|| leading_number(&self.item))
    }
}

/// An ingredient as submitted: free text or an `{item, qty}` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum IngredientInput {
    Text(String),
    Structured {
        item: String,
        #[serde(default)]
        qty: Option<Loose>,
    },
}

impl From<&str> for IngredientInput {
    fn from(text: &str) -> Self {
        IngredientInput::Text(text.to_string())
    }
}

/// Parse a single free-text ingredient line.
///
/// If no leading quantity is found the whole text becomes the item and the
/// quantity is empty.
pub fn parse_line(raw: &str) -> IngredientLine {
    let raw = raw.trim();
    match LINE_PATTERN.captures(raw) {
        Some(caps) => IngredientLine {
            item: caps[2].trim().to_string(),
            qty: caps[1].trim().to_string(),
        },
        None => IngredientLine {
            item: raw.to_string(),
            qty: String::new(),
        },
    }
}

/// Bring either input shape to the structured form.
pub fn normalize(input: &IngredientInput) -> IngredientLine {
    match input {
        IngredientInput::Text(text) => parse_line(text),
        IngredientInput::Structured { item, qty } => IngredientLine {
            item: item.trim().to_string(),
            qty: qty.as_ref().map(Loose::to_text).unwrap_or_default(),
        },
    }
}

/// First decimal number anywhere in `text`.
pub fn leading_number(text: &str) -> Option<f64> {
    NUMBER_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Multiply every number in `text` by `factor`. Whole results print bare
/// ("800"), others with two decimals ("0.50").
pub fn scale_numbers(text: &str, factor: f64) -> String {
    NUMBER_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let scaled = caps[0].parse::<f64>().unwrap_or(0.0) * factor;
            if scaled.fract() == 0.0 {
                format!("{scaled}")
            } else {
                format!("{scaled:.2}")
            }
        })
        .into_owned()
}

/// Split a pasted blob into trimmed, non-empty entries.
///
/// Form posts send ingredients separated by newlines or commas, and
/// instructions separated by newlines or full stops.
pub fn split_blob(blob: &str, separators: &[char]) -> Vec<String> {
    blob.split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
