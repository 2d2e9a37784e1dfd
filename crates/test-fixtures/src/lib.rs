//! Test fixture loader for Tally observation panels, plus small builders
//! for hand-written scenarios.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use tally_core::{Category, Observation};

/// Root directory of the fixture data, inside this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load an observation panel from `data/panels/<name>.json`, validated.
pub fn load_panel(name: &str) -> Vec<Observation> {
    let path = fixtures_root().join("panels").join(format!("{name}.json"));
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read panel {}: {}", path.display(), e));
    Observation::parse_json(&content)
        .unwrap_or_else(|e| panic!("Invalid panel {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// Fixed epoch for hand-built scenarios: 2025-01-01T00:00:00Z.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .expect("2025-01-01T00:00:00Z is a valid instant")
}

/// `epoch() + days`.
pub fn day(days: i64) -> DateTime<Utc> {
    epoch() + Duration::days(days)
}

/// Build an observation `days` after the epoch.
pub fn obs(source: &str, days: i64, values: &[(Category, f64)]) -> Observation {
    Observation::new(source, day(days), values.iter().copied())
}
