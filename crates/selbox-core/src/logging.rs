#![forbid(unsafe_code)]

//! Logging glue.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so downstream crates can log through `selbox_core::debug!` and
//! friends without naming `tracing` themselves. With `tracing-json` it also
//! offers a JSON subscriber suitable for production log shipping.
//!
//! Without the feature the module is empty and logging compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, warn};

/// Install a global JSON subscriber filtered by the given environment variable.
///
/// Falls back to `default_directive` when the variable is unset or invalid.
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json(env_var: &str, default_directive: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(env_var)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
