// Single source of truth for all default values.

// --- Benchmark ---
pub const DEFAULT_BENCHMARK_WINDOW_DAYS: f64 = 14.0;
pub const DEFAULT_MIN_OBSERVATIONS: usize = 5;

// --- Decay ---
pub const DEFAULT_DECAY_HALF_LIFE_DAYS: f64 = 30.0;
pub const DEFAULT_DECAY_WINDOW_DAYS: f64 = 21.0;
pub const DEFAULT_DECAY_ENABLED: bool = false;

// --- Aggregation ---
pub const DEFAULT_LOOKBACK_DAYS: f64 = 14.0;
pub const DEFAULT_AGGREGATION_HALF_LIFE_DAYS: f64 = 7.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
