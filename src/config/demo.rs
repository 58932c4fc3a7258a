/// Terminal demo configuration.
/// 
/// Intervals are in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Held direction keys are polled at this interval, like the browser build.
pub const KEY_POLL_INTERVAL_MS: u64 = 90;

/// Environment variable holding an optional RNG seed.
pub const SEED_ENV_VAR: &str = "NYANGO_SEED";
