/// Initializes the tracing/logging infrastructure for the application.
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - lifecycle events and successful mutations
/// - `RUST_LOG=debug` - request payloads, evictions, activity entries
/// - `RUST_LOG=catalog_service=debug` - debug only for this crate
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
