//! Domain models shared by the persistence layer and the catalog service.
//! They stay plain data holders; the business rules live in `catalog`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Earliest publication year the input forms accept.
pub const YEAR_MIN: i32 = 1800;
/// Latest publication year the input forms accept.
pub const YEAR_MAX: i32 = 2100;

/// Check a publication year against the bounds the presentation layer is
/// expected to enforce before calling `CatalogService::add`.
pub fn year_in_range(year: i32) -> bool {
    (YEAR_MIN..=YEAR_MAX).contains(&year)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One catalog entry.
pub struct Book {
    /// Generated at creation time. Older files carry no id, so one is minted
    /// while decoding them.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    /// `true` once the user finished reading the book.
    pub read: bool,
}

impl Book {
    pub fn new(title: &str, author: &str, year: i32, genre: &str, read: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read,
        }
    }
}

impl fmt::Display for Book {
    /// `Title by Author`, the label shown when picking a book to remove.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    pub(crate) fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

/// Raw counts over the catalog. Percentages are left to whoever renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub read_count: usize,
    pub unread_count: usize,
    /// Genre label (verbatim, case-sensitive) to number of books carrying it.
    pub genre_distribution: BTreeMap<String, usize>,
}

impl Statistics {
    /// Share of books marked read, or `None` for an empty catalog.
    pub fn read_ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.read_count as f64 / self.total as f64)
        }
    }
}
