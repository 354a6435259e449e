// Movie Catalog - Movie Record
//
// One film's metadata plus its accumulated rating history. Ratings are
// append-only and validated on entry, so every stored rating is in [1, 5].

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, MAX_RATING, MIN_RATING};

/// A single movie and its ratings.
///
/// Serializes with camelCase field names (`releaseYear`) so the JSON shape
/// matches the API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier, supplied by the caller (never generated).
    pub id: String,

    pub title: String,
    pub director: String,
    pub release_year: i32,
    pub genre: String,

    /// Ratings in submission order, each in [1, 5].
    pub ratings: Vec<i32>,
}

impl Movie {
    /// Create a movie with an empty rating history.
    pub fn new(
        id: String,
        title: String,
        director: String,
        release_year: i32,
        genre: String,
    ) -> Self {
        Movie {
            id,
            title,
            director,
            release_year,
            genre,
            ratings: Vec::new(),
        }
    }

    /// Append a rating.
    ///
    /// Fails with `InvalidRating` (leaving the history untouched) when the
    /// rating falls outside [1, 5].
    pub fn add_rating(&mut self, rating: i32) -> Result<(), CatalogError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CatalogError::InvalidRating { rating });
        }
        self.ratings.push(rating);
        Ok(())
    }

    /// Arithmetic mean of all ratings, or `None` when unrated.
    ///
    /// `None` is distinguishable from a real average: ratings are bounded
    /// below by 1, so a mean of 0.0 cannot occur.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: i32 = self.ratings.iter().sum();
        Some(f64::from(sum) / self.ratings.len() as f64)
    }
}

// ============================================================================
// TESTS
// ============================================================================
