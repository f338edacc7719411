use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Fallback filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive: `--verbose` forces debug, otherwise the
/// configured level, otherwise the default.
pub fn log_filter(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.unwrap_or(DEFAULT_LOG_LEVEL).to_string()
    }
}

/// Install the stderr subscriber. RUST_LOG takes precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level/filter '{}'", level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
