use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
pub const DATA_DIR_NAME: &str = ".library-manager";
/// Catalog file name stored inside the application data directory.
pub const CATALOG_FILE_NAME: &str = "library.json";

/// Resolve the absolute path to the catalog file inside the user's home.
pub fn default_catalog_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(catalog_path_in(base_dirs.home_dir()))
}

/// Where the catalog lives for a given home directory.
pub fn catalog_path_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR_NAME).join(CATALOG_FILE_NAME)
}
