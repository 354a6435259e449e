// Movie Catalog - Catalog Collection
//
// In-memory collection of Movie records, unique by id. Backed by a Vec so
// iteration order is insertion order; every lookup is a linear scan, which is
// the intended scale for this catalog.

use crate::error::CatalogError;
use crate::movie::Movie;

/// The in-memory movie catalog.
///
/// Process-scoped: starts empty, nothing is persisted. Not safe for
/// uncoordinated concurrent mutation; a host embedding this in a server must
/// serialize mutating calls (the bundled server wraps it in an `RwLock`).
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Catalog { movies: Vec::new() }
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Add a movie with an empty rating history.
    ///
    /// Fails with `DuplicateId` when the id is already taken; the existing
    /// entry is never overwritten.
    pub fn add_movie(
        &mut self,
        id: String,
        title: String,
        director: String,
        release_year: i32,
        genre: String,
    ) -> Result<(), CatalogError> {
        if self.movies.iter().any(|m| m.id == id) {
            return Err(CatalogError::DuplicateId { id });
        }
        self.movies
            .push(Movie::new(id, title, director, release_year, genre));
        Ok(())
    }

    /// Append a rating to the movie with the given id.
    ///
    /// Fails with `NotFound` for an unknown id; rating validation is
    /// delegated to `Movie::add_rating` and `InvalidRating` propagates
    /// unchanged.
    pub fn rate_movie(&mut self, id: &str, rating: i32) -> Result<(), CatalogError> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;
        movie.add_rating(rating)
    }

    /// Mean rating for the movie with the given id.
    ///
    /// Returns `None` both when the id is unknown and when the movie exists
    /// but has no ratings yet; callers that need to tell the two apart should
    /// use `get_movie` first.
    pub fn average_rating(&self, id: &str) -> Option<f64> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .and_then(|m| m.average_rating())
    }

    /// Movies with at least one rating, sorted descending by mean rating.
    ///
    /// The sort is stable, so movies with equal means keep their catalog
    /// insertion order.
    pub fn top_rated_movies(&self) -> Vec<Movie> {
        let mut rated: Vec<Movie> = self
            .movies
            .iter()
            .filter(|m| !m.ratings.is_empty())
            .cloned()
            .collect();

        rated.sort_by(|a, b| {
            let avg_a = a.average_rating().unwrap_or(0.0);
            let avg_b = b.average_rating().unwrap_or(0.0);
            avg_b.total_cmp(&avg_a)
        });

        rated
    }

    /// Movies whose genre matches exactly, ignoring case. Insertion order.
    pub fn movies_by_genre(&self, genre: &str) -> Vec<Movie> {
        let genre = genre.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.genre.to_lowercase() == genre)
            .cloned()
            .collect()
    }

    /// Movies whose director matches exactly, ignoring case. Insertion order.
    pub fn movies_by_director(&self, director: &str) -> Vec<Movie> {
        let director = director.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.director.to_lowercase() == director)
            .cloned()
            .collect()
    }

    /// Movies whose title contains the keyword, ignoring case.
    ///
    /// Matches against the title only, never director or genre.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<Movie> {
        let keyword = keyword.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&keyword))
            .cloned()
            .collect()
    }

    /// Look up a movie by id. A miss is not an error.
    pub fn get_movie(&self, id: &str) -> Option<Movie> {
        self.movies.iter().find(|m| m.id == id).cloned()
    }

    /// Remove a movie by id (hard delete).
    ///
    /// Returns `true` when an entry existed and was removed, `false`
    /// otherwise; neither case is an error.
    pub fn remove_movie(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        self.movies.len() < before
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Catalog with the three movies from the reference scenario.
    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_movie(
                "1".to_string(),
                "Inception".to_string(),
                "Christopher Nolan".to_string(),
                2010,
                "Sci-Fi".to_string(),
            )
            .unwrap();
        catalog
            .add_movie(
                "2".to_string(),
                "Interstellar".to_string(),
                "Christopher Nolan".to_string(),
                2014,
                "Sci-Fi".to_string(),
            )
            .unwrap();
        catalog
            .add_movie(
                "3".to_string(),
                "The Dark Knight".to_string(),
                "Christopher Nolan".to_string(),
                2008,
                "Action".to_string(),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_movie() {
        let catalog = seeded_catalog();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());

        let movie = catalog.get_movie("1").unwrap();
        assert_eq!(movie.title, "Inception");
        assert!(movie.ratings.is_empty());
    }

    #[test]
    fn test_add_movie_rejects_duplicate_id() {
        let mut catalog = seeded_catalog();

        let result = catalog.add_movie(
            "1".to_string(),
            "Tenet".to_string(),
            "Christopher Nolan".to_string(),
            2020,
            "Sci-Fi".to_string(),
        );

        assert_eq!(
            result,
            Err(CatalogError::DuplicateId { id: "1".to_string() })
        );

        // Size unchanged, original entry intact
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_movie("1").unwrap().title, "Inception");
    }

    #[test]
    fn test_rate_movie() {
        let mut catalog = seeded_catalog();

        catalog.rate_movie("1", 5).unwrap();
        catalog.rate_movie("1", 4).unwrap();

        assert_eq!(catalog.get_movie("1").unwrap().ratings, vec![5, 4]);
    }

    #[test]
    fn test_rate_movie_unknown_id() {
        let mut catalog = seeded_catalog();

        let result = catalog.rate_movie("99", 5);
        assert_eq!(
            result,
            Err(CatalogError::NotFound { id: "99".to_string() })
        );
    }

    #[test]
    fn test_rate_movie_propagates_invalid_rating() {
        let mut catalog = seeded_catalog();

        let result = catalog.rate_movie("1", 6);
        assert_eq!(result, Err(CatalogError::InvalidRating { rating: 6 }));
        assert!(catalog.get_movie("1").unwrap().ratings.is_empty());
    }

    #[test]
    fn test_average_rating() {
        let mut catalog = seeded_catalog();
        catalog.rate_movie("1", 5).unwrap();
        catalog.rate_movie("1", 4).unwrap();

        assert_eq!(catalog.average_rating("1"), Some(4.5));

        // Unrated movie and unknown id both report None
        assert_eq!(catalog.average_rating("2"), None);
        assert_eq!(catalog.average_rating("99"), None);
    }

    #[test]
    fn test_top_rated_movies_excludes_unrated_and_sorts_desc() {
        let mut catalog = seeded_catalog();
        catalog.rate_movie("1", 5).unwrap();
        catalog.rate_movie("1", 4).unwrap(); // mean 4.5
        catalog.rate_movie("2", 5).unwrap(); // mean 5.0

        // Movie 3 is unrated and must not appear
        let top = catalog.top_rated_movies();
        let ids: Vec<&str> = top.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_top_rated_movies_ties_keep_insertion_order() {
        let mut catalog = seeded_catalog();
        catalog.rate_movie("1", 4).unwrap();
        catalog.rate_movie("2", 4).unwrap();
        catalog.rate_movie("3", 5).unwrap();

        let top = catalog.top_rated_movies();
        let ids: Vec<&str> = top.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_movies_by_genre_is_case_insensitive() {
        let catalog = seeded_catalog();

        let sci_fi = catalog.movies_by_genre("sci-fi");
        assert_eq!(sci_fi.len(), 2);
        assert_eq!(sci_fi[0].title, "Inception");
        assert_eq!(sci_fi[1].title, "Interstellar");

        let action = catalog.movies_by_genre("ACTION");
        assert_eq!(action.len(), 1);
        assert_eq!(action[0].title, "The Dark Knight");

        assert!(catalog.movies_by_genre("Horror").is_empty());
    }

    #[test]
    fn test_movies_by_director_is_case_insensitive() {
        let catalog = seeded_catalog();

        let nolan = catalog.movies_by_director("christopher nolan");
        assert_eq!(nolan.len(), 3);

        assert!(catalog.movies_by_director("Denis Villeneuve").is_empty());
    }

    #[test]
    fn test_search_by_keyword_matches_title_substring() {
        let catalog = seeded_catalog();

        let results = catalog.search_by_keyword("inter");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Interstellar");

        // Matches title only, never director
        assert!(catalog.search_by_keyword("nolan").is_empty());

        // Empty keyword matches everything
        assert_eq!(catalog.search_by_keyword("").len(), 3);
    }

    #[test]
    fn test_get_movie_miss_is_not_an_error() {
        let catalog = seeded_catalog();
        assert!(catalog.get_movie("99").is_none());
    }

    #[test]
    fn test_remove_movie() {
        let mut catalog = seeded_catalog();

        assert!(catalog.remove_movie("3"));
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get_movie("3").is_none());

        // Removing again is a no-op, not an error
        assert!(!catalog.remove_movie("3"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_reference_scenario_end_to_end() {
        let mut catalog = seeded_catalog();

        catalog.rate_movie("1", 5).unwrap();
        catalog.rate_movie("1", 4).unwrap();
        catalog.rate_movie("2", 5).unwrap();
        catalog.rate_movie("3", 4).unwrap();

        let top = catalog.top_rated_movies();
        let ranking: Vec<(&str, Option<f64>)> = top
            .iter()
            .map(|m| (m.id.as_str(), m.average_rating()))
            .collect();
        assert_eq!(
            ranking,
            vec![("2", Some(5.0)), ("1", Some(4.5)), ("3", Some(4.0))]
        );

        assert!(catalog.remove_movie("3"));

        let top = catalog.top_rated_movies();
        let ids: Vec<&str> = top.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
