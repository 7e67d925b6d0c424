use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber used by the copymac binaries.
///
/// Logs go to stderr so stdout stays reserved for progress lines. The level
/// comes from `RUST_LOG` when set, otherwise `debug` in verbose mode and
/// `warn` in normal mode.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    let default_level = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
