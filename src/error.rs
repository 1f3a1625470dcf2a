//! Error types for the store and the catalog service. Nothing here is fatal
//! to the process; callers report these and carry on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read catalog at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog at {path} is not valid")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog at {path} uses format version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u64,
        supported: u64,
    },
    #[error("failed to encode catalog for {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write catalog to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// The persisted data exists but cannot be understood.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            StoreError::Decode { .. } | StoreError::UnsupportedVersion { .. }
        )
    }

    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write { .. } | StoreError::Encode { .. })
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no book at position {index} (catalog holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no book with id {0}")]
    NotFound(Uuid),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
