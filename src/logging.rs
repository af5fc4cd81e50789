use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is a no-op.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Resolve the effective level: `-v` raises anything quieter to debug.
pub fn effective_level(configured: &str, verbose: bool) -> &str {
    if verbose { "debug" } else { configured }
}
