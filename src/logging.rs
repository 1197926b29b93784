use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Debug builds log at `debug` (every stroke,
/// color and size change), release builds at `info`. The level is fixed;
/// no environment variable is consulted.
pub fn init() {
    let level = if cfg!(debug_assertions) { "debug" } else { "info" };

    // try_init: a second call (tests, embedding) is silently ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .try_init();
}
