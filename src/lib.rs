//! Core library surface for the personal library manager: a single-user book
//! catalog kept in memory and mirrored to a JSON file after every change.
//!
//! Whatever front end drives it only needs [`CatalogService`] and the model
//! types; the store is exposed so callers can pick where the file lives.
pub mod catalog;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;

/// The service that owns the live catalog.
pub use catalog::CatalogService;

pub use error::{CatalogError, CatalogResult, StoreError};

/// Domain types that callers pass around and render.
pub use models::{year_in_range, Book, SearchField, Statistics, YEAR_MAX, YEAR_MIN};

/// Persistence entry points.
pub use store::{CatalogStore, FORMAT_VERSION};
