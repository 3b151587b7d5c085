//! Star ratings and written reviews, kept per recipe id.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::decimal::one_decimal;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Review {
    pub rating: u8,
    pub review: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RatingSummary {
    pub ratings: Vec<u8>,
    pub reviews: Vec<Review>,
    #[serde(serialize_with = "one_decimal")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "4.5"))]
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RatingOutcome {
    pub success: bool,
    pub recipe_id: String,
    #[serde(serialize_with = "one_decimal")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "4.5"))]
    pub average_rating: f64,
    pub total_ratings: usize,
}

#[derive(Debug, Default)]
pub struct RatingBook {
    by_recipe: HashMap<String, RatingSummary>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a 1-5 star rating. A blank review is not stored.
    pub fn rate(
        &mut self,
        recipe_id: &str,
        rating: f64,
        review: Option<&str>,
    ) -> Result<RatingOutcome, ValidationError> {
        if !(1.0..=5.0).contains(&rating) || rating.fract() != 0.0 {
            return Err(ValidationError::single(
                "rating",
                "Rating must be between 1 and 5",
            ));
        }
        let stars = rating as u8;

        let summary = self.by_recipe.entry(recipe_id.to_string()).or_default();
        summary.ratings.push(stars);
        if let Some(text) = review.map(str::trim).filter(|t| !t.is_empty()) {
            summary.reviews.push(Review {
                rating: stars,
                review: text.to_string(),
                date: Utc::now(),
            });
        }
        let total: u32 = summary.ratings.iter().map(|&r| u32::from(r)).sum();
        summary.average = f64::from(total) / summary.ratings.len() as f64;

        tracing::debug!(recipe_id, rating = stars, average = summary.average, "Recipe rated");
        Ok(RatingOutcome {
            success: true,
            recipe_id: recipe_id.to_string(),
            average_rating: summary.average,
            total_ratings: summary.ratings.len(),
        })
    }

    /// Ratings for `recipe_id`, or an empty summary when it has none.
    pub fn summary(&self, recipe_id: &str) -> RatingSummary {
        self.by_recipe.get(recipe_id).cloned().unwrap_or_default()
    }

    /// Drop everything recorded for a deleted recipe.
    pub fn forget(&mut self, recipe_id: &str) {
        self.by_recipe.remove(recipe_id);
    }
}
