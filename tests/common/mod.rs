#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use nutrilife::db::Database;
use nutrilife::models::NutritionItem;
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// A fixed day at the given wall-clock time.
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn item(name: &str, calories: f64) -> NutritionItem {
    NutritionItem::new(name, calories, 10.0, 20.0, 5.0)
}
