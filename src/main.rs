//! Binary entry point: resolve the catalog file, load it (falling back to an
//! empty catalog if it is unreadable) and log a summary. Front ends embed the
//! library and drive `CatalogService` directly.
use library_manager::logging::init_logging;
use library_manager::{CatalogService, CatalogStore};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_logging();

    let store = CatalogStore::open_default()?;
    let (catalog, load_error) = CatalogService::open_or_empty(store);
    if let Some(err) = load_error {
        warn!(error = %err, "your library could not be loaded; starting empty");
    }

    let stats = catalog.statistics();
    info!(
        total = stats.total,
        read = stats.read_count,
        unread = stats.unread_count,
        "library summary"
    );
    for (genre, count) in &stats.genre_distribution {
        info!(genre = %genre, count, "genre");
    }
    for (index, book) in catalog.books().iter().enumerate() {
        info!(index, year = book.year, read = book.read, "{book}");
    }

    Ok(())
}
