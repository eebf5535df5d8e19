use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the printed report on stdout stays clean.
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!(
        threads = polars_core::POOL.current_num_threads(),
        "polars thread pool ready"
    );
}
