// Movie Catalog - Core Library
// Exposes the catalog core for use in the CLI demo, API server, and tests

pub mod catalog;
pub mod error;
pub mod movie;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{CatalogError, MAX_RATING, MIN_RATING};
pub use movie::Movie;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
