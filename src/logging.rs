use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// RUST_LOG overrides this.
const DEFAULT_DIRECTIVES: &str = "info,villagestay=debug";

pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // Human-readable on a terminal, JSON lines for log shippers.
    if std::io::stdout().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_ansi(false)
            .init();
    }

    tracing::info!(default = DEFAULT_DIRECTIVES, "logging initialized");
}
