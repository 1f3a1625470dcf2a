use std::fs;

use library_manager::{Book, CatalogError, CatalogService, CatalogStore, SearchField, Statistics};
use tempfile::TempDir;

fn open(dir: &TempDir) -> CatalogService {
    CatalogService::open(CatalogStore::new(dir.path().join("library.json")))
        .expect("catalog should open")
}

#[test]
fn store_round_trip_keeps_books_in_order() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::new(dir.path().join("library.json"));
    let books = vec![
        Book::new("Dune", "Herbert", 1965, "Sci-Fi", true),
        Book::new("Dune", "Herbert", 1965, "Sci-Fi", false),
        Book::new("", "", 1800, "", false),
        Book::new("Ünïcödé", "Ørwell", 2100, "Sci-Fi", true),
    ];

    store.save(&books).unwrap();
    assert_eq!(store.load().unwrap(), books);
}

#[test]
fn duplicate_adds_then_remove_first() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    catalog.add("Dune", "Herbert", 1965, "Sci-Fi", true).unwrap();
    catalog.add("Dune", "Herbert", 1965, "Sci-Fi", false).unwrap();
    assert_eq!(catalog.len(), 2);

    catalog.remove(0).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(!catalog.books()[0].read);

    let reopened = open(&dir);
    assert_eq!(reopened.books(), catalog.books());
}

#[test]
fn author_search_matches_any_case() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    catalog.add("Dune", "Herbert", 1965, "Sci-Fi", true).unwrap();
    catalog.add("1984", "Orwell", 1949, "Dystopia", false).unwrap();
    catalog.add("Dune Messiah", "HERBERT", 1969, "Sci-Fi", false).unwrap();

    let hits: Vec<&str> = catalog
        .search("her", SearchField::Author)
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(hits, vec!["Dune", "Dune Messiah"]);
}

#[test]
fn every_title_substring_finds_its_book() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    for (title, author) in [("Dune", "Herbert"), ("Solaris", "Lem"), ("Emma", "Austen")] {
        catalog.add(title, author, 1950, "Fiction", false).unwrap();
    }

    for book in catalog.books() {
        let title = book.title.to_uppercase();
        for start in 0..title.len() {
            for end in start + 1..=title.len() {
                let hits = catalog.search(&title[start..end], SearchField::Title);
                assert!(hits.iter().any(|hit| hit.id == book.id));
            }
        }
    }
    assert!(catalog.search("zzz", SearchField::Title).is_empty());
}

#[test]
fn statistics_sums_hold() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    assert_eq!(
        catalog.statistics(),
        Statistics {
            total: 0,
            read_count: 0,
            unread_count: 0,
            genre_distribution: Default::default(),
        }
    );

    for (i, genre) in ["Sci-Fi", "Classic", "Sci-Fi", "Poetry", "Sci-Fi "].iter().enumerate() {
        catalog.add("Book", "Author", 1900 + i as i32, genre, i % 2 == 0).unwrap();
    }

    let stats = catalog.statistics();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.read_count + stats.unread_count, stats.total);
    assert_eq!(stats.genre_distribution.values().sum::<usize>(), stats.total);
    assert_eq!(stats.genre_distribution["Sci-Fi"], 2);
    assert_eq!(stats.genre_distribution["Sci-Fi "], 1);
}

#[test]
fn remove_out_of_range_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut catalog = open(&dir);
    assert!(matches!(
        catalog.remove(0),
        Err(CatalogError::IndexOutOfRange { index: 0, len: 0 })
    ));

    catalog.add("Dune", "Herbert", 1965, "Sci-Fi", true).unwrap();
    assert!(catalog.remove(usize::MAX).is_err());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn legacy_file_is_upgraded_on_next_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    fs::write(
        &path,
        r#"[{"title":"Dune","author":"Herbert","year":1965,"genre":"Sci-Fi","read":true},
            {"title":"1984","author":"Orwell","year":1949,"genre":"Dystopia","read":false}]"#,
    )
    .unwrap();

    let mut catalog = CatalogService::open(CatalogStore::new(&path)).unwrap();
    assert_eq!(catalog.len(), 2);
    catalog.add("Emma", "Austen", 1815, "Classic", true).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], library_manager::FORMAT_VERSION);
    assert_eq!(raw["books"].as_array().map(Vec::len), Some(3));
}
