//! Logging init: stderr only. stdout is the data channel and must stay clean.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Verbose runs raise the crate level to `debug` so per-line parse failures
/// become visible; otherwise only warnings and errors get through.
/// `RUST_LOG` overrides either default.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "info,urlsift_core=debug,urlsift_cli=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
