// Movie Catalog - Error Kinds
//
// Typed failures for catalog operations. The HTTP server maps these onto
// status codes (404 for NotFound, 400 for the validation failures), so the
// Display strings double as response bodies.

use thiserror::Error;

/// Lowest rating a movie can receive.
pub const MIN_RATING: i32 = 1;

/// Highest rating a movie can receive.
pub const MAX_RATING: i32 = 5;

/// Failure kinds raised by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Rating outside the inclusive [1, 5] range.
    #[error("Rating must be between 1 and 5.")]
    InvalidRating { rating: i32 },

    /// Attempt to add a movie under an id that is already taken.
    #[error("Movie with this ID already exists.")]
    DuplicateId { id: String },

    /// Operation on an id with no catalog entry.
    #[error("Movie not found.")]
    NotFound { id: String },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::InvalidRating { rating: 9 }.to_string(),
            "Rating must be between 1 and 5."
        );
        assert_eq!(
            CatalogError::DuplicateId { id: "1".to_string() }.to_string(),
            "Movie with this ID already exists."
        );
        assert_eq!(
            CatalogError::NotFound { id: "1".to_string() }.to_string(),
            "Movie not found."
        );
    }
}
