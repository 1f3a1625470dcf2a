use tracing::Level;
use tracing_subscriber::fmt;

/// Install a compact stdout subscriber at `INFO`. Safe to call more than once;
/// later calls are ignored.
pub fn init_logging() {
    let _ = fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .try_init();
}
