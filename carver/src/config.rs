use tracing_subscriber::{EnvFilter, fmt};

// ============================================================================
// Logging
// ============================================================================

const DEFAULT_FILTER: &str = "info";
const VERBOSE_FILTER: &str = "debug";

// RUST_LOG wins over the built-in filters.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
