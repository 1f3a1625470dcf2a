//! Persistence module split across logical submodules.

mod catalog_file;
mod paths;

pub use catalog_file::{CatalogStore, FORMAT_VERSION};
pub use paths::{catalog_path_in, default_catalog_path, CATALOG_FILE_NAME, DATA_DIR_NAME};
