/// Tally system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one day, used for every age computation.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Widened benchmark windows (days), tried in order when the primary
/// window holds too few observations. The last one is final.
pub const WIDENED_BENCHMARK_WINDOWS_DAYS: [f64; 2] = [28.0, 42.0];
