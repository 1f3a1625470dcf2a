//! The catalog service owns the live, in-memory list of books for one session
//! and is the only place where collection rules are applied. Every mutation
//! is followed by a full rewrite through the [`CatalogStore`].

use std::collections::BTreeMap;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::models::{Book, SearchField, Statistics};
use crate::store::CatalogStore;

#[derive(Debug)]
pub struct CatalogService {
    store: CatalogStore,
    books: Vec<Book>,
}

impl CatalogService {
    /// Load the catalog, failing if the persisted data cannot be read.
    pub fn open(store: CatalogStore) -> CatalogResult<Self> {
        let books = store.load()?;
        info!(count = books.len(), path = %store.path().display(), "catalog opened");
        Ok(Self { store, books })
    }

    /// Load the catalog, falling back to an empty one when the persisted data
    /// cannot be read. The unreadable file is moved aside first so the next
    /// save cannot clobber it. The load error is handed back for the caller to
    /// report.
    pub fn open_or_empty(store: CatalogStore) -> (Self, Option<StoreError>) {
        match store.load() {
            Ok(books) => {
                info!(count = books.len(), path = %store.path().display(), "catalog opened");
                (Self { store, books }, None)
            }
            Err(err) => {
                warn!(error = %err, "catalog unreadable, starting with an empty one");
                if let Err(quarantine_err) = store.quarantine() {
                    warn!(error = %quarantine_err, "could not move unreadable catalog aside");
                }
                let service = Self {
                    store,
                    books: Vec::new(),
                };
                (service, Some(err))
            }
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Append a new book and persist. Duplicates are allowed; each copy gets
    /// its own id. The year is not checked here.
    ///
    /// If persisting fails the book stays in memory and the write error is
    /// returned; [`CatalogService::persist`] retries.
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        year: i32,
        genre: &str,
        read: bool,
    ) -> CatalogResult<Book> {
        let book = Book::new(title, author, year, genre, read);
        self.books.push(book.clone());
        info!(id = %book.id, title = %book.title, "book added");
        self.persist()?;
        Ok(book)
    }

    /// Delete the book at `index`, shifting later books down, and persist.
    pub fn remove(&mut self, index: usize) -> CatalogResult<Book> {
        if index >= self.books.len() {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: self.books.len(),
            });
        }
        let book = self.books.remove(index);
        info!(id = %book.id, index, "book removed");
        self.persist()?;
        Ok(book)
    }

    /// Delete the book carrying `id` and persist.
    pub fn remove_by_id(&mut self, id: Uuid) -> CatalogResult<Book> {
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        self.remove(index)
    }

    /// Case-insensitive substring match on one field, in catalog order. An
    /// empty term matches nothing.
    pub fn search(&self, term: &str, field: SearchField) -> Vec<&Book> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(|book| field.value(book).to_lowercase().contains(&needle))
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        let total = self.books.len();
        let read_count = self.books.iter().filter(|book| book.read).count();
        let mut genre_distribution = BTreeMap::new();
        for book in &self.books {
            *genre_distribution.entry(book.genre.clone()).or_insert(0) += 1;
        }
        Statistics {
            total,
            read_count,
            unread_count: total - read_count,
            genre_distribution,
        }
    }

    /// Write the current in-memory catalog. Called after every mutation and
    /// usable directly to retry after a failed write.
    pub fn persist(&self) -> CatalogResult<()> {
        self.store.save(&self.books).map_err(|err| {
            warn!(error = %err, "failed to persist catalog, changes kept in memory");
            CatalogError::from(err)
        })
    }
}
