use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Level used when neither `--log-level` nor `RUST_LOG` is set
const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr logger.
///
/// An explicit `log_level` wins; otherwise `RUST_LOG` is honored, falling
/// back to warnings only so the interactive session stays readable.
pub fn init_logger(log_level: Option<&str>, no_color: bool) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))
}
