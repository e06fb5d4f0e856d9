use std::sync::Arc;

use ember_core::{ManualClock, Tracker, TrackerBuilder};
use jiff::Zoned;
use tempfile::TempDir;

/// Parses a zoned datetime such as `2024-01-01T09:00:00-05:00[-05:00]`.
pub fn at(s: &str) -> Zoned {
    s.parse().expect("valid zoned datetime")
}

/// Helper function to create a test tracker on a manual clock
pub async fn create_test_tracker(start: &str) -> (TempDir, Arc<ManualClock>, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let clock = Arc::new(ManualClock::new(at(start)));
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(clock.clone())
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, clock, tracker)
}
