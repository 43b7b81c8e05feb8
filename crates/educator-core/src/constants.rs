//! Package-level constants.

/// Current version of the Educator backend (sourced from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum average required to pass. Inclusive: an average of exactly 11
/// passes.
pub const PASS_THRESHOLD: f64 = 11.0;

/// Sampling temperature used when a chat request omits one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output token cap used when a chat request omits one.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
