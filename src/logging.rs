//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing compact lines to stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate with `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,trans_cli=debug" } else { "warn" }
}
