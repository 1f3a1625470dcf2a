use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::paths::{default_catalog_path, CATALOG_FILE_NAME};
use crate::error::StoreError;
use crate::models::Book;

/// Format version written into every saved catalog. Unversioned files (a bare
/// JSON array of books) predate it and are upgraded on load.
pub const FORMAT_VERSION: u64 = 1;

#[derive(Serialize)]
struct CatalogDocument<'a> {
    version: u64,
    books: &'a [Book],
}

/// Durable home of the catalog: one JSON file, read fully on `load` and
/// rewritten fully on `save`. No handle is kept open between calls.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Bind to the fixed per-user location under the home directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(default_catalog_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the catalog. A missing file is a first run and yields
    /// an empty catalog.
    pub fn load(&self) -> Result<Vec<Book>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no catalog on disk yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|source| self.decode_error(source))?;
        let books = self.decode(value)?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    fn decode(&self, value: Value) -> Result<Vec<Book>, StoreError> {
        match value {
            Value::Array(_) => {
                debug!(path = %self.path.display(), "upgrading unversioned catalog");
                serde_json::from_value(value).map_err(|source| self.decode_error(source))
            }
            Value::Object(mut fields) => {
                let version = fields
                    .get("version")
                    .and_then(Value::as_u64)
                    .ok_or_else(|| self.decode_error(serde_json::Error::missing_field("version")))?;
                if version == 0 || version > FORMAT_VERSION {
                    return Err(StoreError::UnsupportedVersion {
                        path: self.path.clone(),
                        found: version,
                        supported: FORMAT_VERSION,
                    });
                }
                let books = fields
                    .remove("books")
                    .ok_or_else(|| self.decode_error(serde_json::Error::missing_field("books")))?;
                serde_json::from_value(books).map_err(|source| self.decode_error(source))
            }
            _ => Err(self.decode_error(serde_json::Error::custom(
                "expected a catalog object or a list of books",
            ))),
        }
    }

    /// Encode the whole catalog and replace the file. The document is written
    /// to a sibling temporary file first and renamed into place.
    pub fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        let document = CatalogDocument {
            version: FORMAT_VERSION,
            books,
        };
        let bytes = serde_json::to_vec_pretty(&document).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
            }
        }

        let tmp_path = self.sibling_path(".tmp");
        fs::write(&tmp_path, &bytes).map_err(|source| self.write_error(source))?;
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(source));
        }

        debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }

    /// Move an unreadable catalog file aside so a later `save` cannot
    /// overwrite it. Returns where it went, or `None` if there was no file.
    pub fn quarantine(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let target = self.sibling_path(&format!(".{}.corrupt", Uuid::new_v4().simple()));
        fs::rename(&self.path, &target).map_err(|source| StoreError::Write {
            path: target.clone(),
            source,
        })?;
        warn!(
            from = %self.path.display(),
            to = %target.display(),
            "moved unreadable catalog aside"
        );
        Ok(Some(target))
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(CATALOG_FILE_NAME));
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn decode_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Decode {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
