//! Logging initialization
//!
//! The receiver logs its resolution pipeline through `tracing`; the host
//! application calls [`init`] once at startup. Verbosity follows `RUST_LOG`
//! when set.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Defaults to `info` globally and `debug` for this crate when `RUST_LOG`
/// is unset. Fails if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,castgate=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
