// Movie Catalog - HTTP Facade
//
// Thin axum layer mapping each route directly onto a catalog operation.
// Validation is re-derived inline (presence checks, range checks) and the
// core's error kinds are translated to status codes: NotFound -> 404,
// validation failures -> 400.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Shared application state.
///
/// The catalog itself defines no concurrency contract, so all access goes
/// through this lock: reads shared, mutations exclusive.
#[derive(Clone, Default)]
pub struct AppState {
    catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// State holding an empty catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::new())
    }

    /// State holding a caller-built catalog (useful for tests and demos).
    pub fn with_catalog(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }
}

// ============================================================================
// Request / Response Shapes
// ============================================================================

/// Body of POST /addMovie. Fields are optional so presence can be checked
/// explicitly and reported as 400 rather than a generic rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMovieRequest {
    id: Option<String>,
    title: Option<String>,
    director: Option<String>,
    release_year: Option<i32>,
    genre: Option<String>,
}

/// Body of POST /rateMovie/:id.
#[derive(Deserialize)]
struct RateMovieRequest {
    rating: Option<i32>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AverageRatingResponse {
    /// `null` both for an unknown id and for a movie with no ratings.
    average_rating: Option<f64>,
}

fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

fn error_body(status: StatusCode, text: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error: text })).into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    message("OK")
}

/// POST /addMovie - Add a movie to the catalog
async fn add_movie(
    State(state): State<AppState>,
    request: Result<Json<AddMovieRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(body) => body,
        Err(rejection) => {
            return error_body(
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {}", rejection.body_text()),
            );
        }
    };

    let (id, title, director, release_year, genre) = match (
        request.id,
        request.title,
        request.director,
        request.release_year,
        request.genre,
    ) {
        (Some(id), Some(title), Some(director), Some(year), Some(genre)) => {
            (id, title, director, year, genre)
        }
        _ => {
            return error_body(
                StatusCode::BAD_REQUEST,
                "All fields (id, title, director, releaseYear, genre) are required.".to_string(),
            );
        }
    };

    let mut catalog = state.catalog.write().unwrap();
    match catalog.add_movie(id, title, director, release_year, genre) {
        Ok(()) => (StatusCode::OK, message("Movie added successfully.")).into_response(),
        Err(e) => error_body(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// POST /rateMovie/:id - Rate a movie
async fn rate_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<RateMovieRequest>, JsonRejection>,
) -> impl IntoResponse {
    let rating = match request {
        Ok(Json(RateMovieRequest { rating: Some(r) })) => r,
        Ok(Json(RateMovieRequest { rating: None })) => {
            return error_body(StatusCode::BAD_REQUEST, "Rating is required.".to_string());
        }
        Err(rejection) => {
            return error_body(
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {}", rejection.body_text()),
            );
        }
    };

    let mut catalog = state.catalog.write().unwrap();
    match catalog.rate_movie(&id, rating) {
        Ok(()) => (StatusCode::OK, message("Rating added successfully.")).into_response(),
        Err(e @ CatalogError::NotFound { .. }) => {
            error_body(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e) => error_body(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// GET /AverageRating/:id - Mean rating for one movie
async fn average_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().unwrap();
    Json(AverageRatingResponse {
        average_rating: catalog.average_rating(&id),
    })
}

/// GET /TopRatedMovies - Rated movies, descending by mean rating
async fn top_rated_movies(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.read().unwrap();
    Json(catalog.top_rated_movies())
}

/// GET /MoviesByGenre/:genre - Filter by genre (case-insensitive)
async fn movies_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().unwrap();
    Json(catalog.movies_by_genre(&genre))
}

/// GET /MoviesByDirector/:director - Filter by director (case-insensitive)
async fn movies_by_director(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().unwrap();
    Json(catalog.movies_by_director(&director))
}

/// GET /searchMoviesBasedOnKeyword/:keyword - Title substring search
async fn search_movies(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().unwrap();
    Json(catalog.search_by_keyword(&keyword))
}

/// GET /getMovie/:id - Look up one movie
async fn get_movie(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let catalog = state.catalog.read().unwrap();
    match catalog.get_movie(&id) {
        Some(movie) => (StatusCode::OK, Json(movie)).into_response(),
        None => error_body(StatusCode::NOT_FOUND, "Movie not found.".to_string()),
    }
}

/// DELETE /removeMovie/:id - Remove one movie
///
/// Always 200; the body says whether anything was removed.
async fn remove_movie(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let mut catalog = state.catalog.write().unwrap();
    if catalog.remove_movie(&id) {
        message("Movie removed successfully.")
    } else {
        message("Movie not found.")
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the full route table over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/addMovie", post(add_movie))
        .route("/rateMovie/:id", post(rate_movie))
        .route("/AverageRating/:id", get(average_rating))
        .route("/TopRatedMovies", get(top_rated_movies))
        .route("/MoviesByGenre/:genre", get(movies_by_genre))
        .route("/MoviesByDirector/:director", get(movies_by_director))
        .route("/searchMoviesBasedOnKeyword/:keyword", get(search_movies))
        .route("/getMovie/:id", get(get_movie))
        .route("/removeMovie/:id", delete(remove_movie))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
