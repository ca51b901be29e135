mod common;

use nutrilife::core::Confirmation;
use nutrilife::core::food_log::{self, FoodLog, Removal};
use nutrilife::error::NutriError;
use nutrilife::models::MealCategory;

// ── add_entry ────────────────────────────────────────────────────────────────

#[test]
fn test_add_entry_category_by_hour() {
    let mut log = FoodLog::new(Vec::new(), 2200.0);
    let cases = [
        ((7, 0), MealCategory::Breakfast),
        ((12, 0), MealCategory::Lunch),
        ((16, 30), MealCategory::Snack),
        ((20, 0), MealCategory::Dinner),
        ((6, 0), MealCategory::Breakfast),
        ((11, 0), MealCategory::Lunch),
        ((15, 0), MealCategory::Snack),
        ((18, 0), MealCategory::Dinner),
        ((5, 59), MealCategory::Dinner),
    ];
    for ((h, m), expected) in cases {
        let e = log.add_entry(&common::item("Toast", 100.0), common::at(h, m));
        assert_eq!(e.category, expected, "hour {:02}:{:02}", h, m);
    }
}

#[test]
fn test_add_entry_appends_without_sorting() {
    let mut log = FoodLog::new(Vec::new(), 2200.0);
    log.add_entry(&common::item("Dinner", 600.0), common::at(20, 0));
    log.add_entry(&common::item("Breakfast", 300.0), common::at(7, 0));

    let names: Vec<&str> = log.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Dinner", "Breakfast"]);
}

#[test]
fn test_add_entry_formats_time() {
    let mut log = FoodLog::new(Vec::new(), 2200.0);
    let e = log.add_entry(&common::item("Soup", 200.0), common::at(13, 5));
    assert_eq!(e.time, "1:05 PM");
}

#[test]
fn test_add_entry_ids_unique_within_same_millisecond() {
    let mut log = FoodLog::new(Vec::new(), 2200.0);
    let ts = common::at(9, 0);
    let a = log.add_entry(&common::item("A", 1.0), ts).id;
    let b = log.add_entry(&common::item("B", 1.0), ts).id;
    let c = log.add_entry(&common::item("C", 1.0), ts).id;
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_add_entry_ids_unique_when_clock_goes_backwards() {
    let mut log = FoodLog::new(Vec::new(), 2200.0);
    let later = log.add_entry(&common::item("A", 1.0), common::at(20, 0)).id;
    let earlier = log.add_entry(&common::item("B", 1.0), common::at(8, 0)).id;
    assert!(earlier > later);
}

// ── compute_stats ────────────────────────────────────────────────────────────

#[test]
fn test_stats_seeded_log() {
    let log = FoodLog::seeded(2200.0);
    let s = log.compute_stats();
    assert_eq!(s.entry_count, 4);
    assert_eq!(s.total_calories, 1070.0);
    assert_eq!(s.remaining, 1130.0);
    assert!((s.percentage - 48.636_363).abs() < 1e-4);
    assert_eq!(s.total_protein, 77.0);
}

#[test]
fn test_stats_total_tracks_every_add() {
    let mut log = FoodLog::new(Vec::new(), 2000.0);
    let mut expected = 0.0;
    for (i, kcal) in [120.0, 450.5, 80.0, 999.0].into_iter().enumerate() {
        log.add_entry(&common::item(&format!("f{}", i), kcal), common::at(10, i as u32));
        expected += kcal;
        assert_eq!(log.compute_stats().total_calories, expected);
    }
}

#[test]
fn test_stats_over_target() {
    let mut log = FoodLog::new(Vec::new(), 1000.0);
    log.add_entry(&common::item("Feast", 1500.0), common::at(19, 0));
    let s = log.compute_stats();
    assert_eq!(s.remaining, 0.0);
    assert_eq!(s.percentage, 150.0);
    assert_eq!(s.progress, 100.0);
}

#[test]
fn test_stats_empty_log() {
    let s = FoodLog::new(Vec::new(), 2200.0).compute_stats();
    assert_eq!(s.total_calories, 0.0);
    assert_eq!(s.remaining, 2200.0);
    assert_eq!(s.percentage, 0.0);
}

#[test]
fn test_stats_zero_target_does_not_divide() {
    let s = FoodLog::seeded(0.0).compute_stats();
    assert_eq!(s.percentage, 0.0);
    assert_eq!(s.remaining, 0.0);
}

// ── remove_entry ─────────────────────────────────────────────────────────────

#[test]
fn test_remove_confirmed_excludes_calories_once() {
    let mut log = FoodLog::seeded(2200.0);
    let before = log.compute_stats().total_calories;

    let removal = log.remove_entry(2, Confirmation::Confirmed);
    match removal {
        Removal::Removed(e) => assert_eq!(e.name, "Greek Yogurt"),
        other => panic!("expected removal, got {:?}", other),
    }
    assert_eq!(log.compute_stats().total_calories, before - 150.0);

    // Second attempt is a miss, totals stay put
    assert_eq!(log.remove_entry(2, Confirmation::Confirmed), Removal::NotFound);
    assert_eq!(log.compute_stats().total_calories, before - 150.0);
}

#[test]
fn test_remove_preserves_order() {
    let mut log = FoodLog::seeded(2200.0);
    log.remove_entry(2, Confirmation::Confirmed);
    let ids: Vec<i64> = log.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, [1, 3, 4]);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut log = FoodLog::seeded(2200.0);
    let before = log.compute_stats();
    assert_eq!(log.remove_entry(999, Confirmation::Confirmed), Removal::NotFound);
    assert_eq!(log.compute_stats(), before);
}

#[test]
fn test_remove_declined_keeps_entry() {
    let mut log = FoodLog::seeded(2200.0);
    assert_eq!(log.remove_entry(1, Confirmation::Declined), Removal::Declined);
    assert_eq!(log.entries().len(), 4);
    assert!(log.find(1).is_some());
}

// ── grouping & catalog ───────────────────────────────────────────────────────

#[test]
fn test_by_category_skips_empty_groups() {
    let log = FoodLog::seeded(2200.0);
    let groups = log.by_category();
    let cats: Vec<MealCategory> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        cats,
        [MealCategory::Breakfast, MealCategory::Lunch, MealCategory::Snack]
    );
    assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn test_find_common_food_by_index_and_name() {
    assert_eq!(food_log::find_common_food("0").unwrap().name, "Banana");
    assert_eq!(food_log::find_common_food("avocado").unwrap().calories, 240.0);
    assert!(food_log::find_common_food("9").is_none());
    assert!(food_log::find_common_food("pizza").is_none());
}

#[test]
fn test_common_food_unknown_is_not_found() {
    assert_eq!(food_log::common_food("banana").unwrap().calories, 105.0);
    let err = food_log::common_food("pizza").unwrap_err();
    assert!(matches!(err, NutriError::UnknownFood(ref k) if k == "pizza"));
    assert_eq!(err.code(), "not_found");
}

#[test]
fn test_search_common_foods() {
    let hits = food_log::search_common_foods("100g");
    let names: Vec<&str> = hits.iter().map(|(_, f)| f.name.as_str()).collect();
    assert_eq!(names, ["Chicken Breast (100g)", "Salmon (100g)"]);
    assert_eq!(hits[0].0, 1);

    assert_eq!(food_log::search_common_foods("").len(), 5);
}

// ── persistence ──────────────────────────────────────────────────────────────

#[test]
fn test_seed_only_when_empty() {
    let (_dir, mut db) = common::setup_db();
    assert!(food_log::seed(&mut db, false).unwrap());
    assert!(!food_log::seed(&mut db, false).unwrap());
    assert_eq!(food_log::load(&db, 2200.0).unwrap().entries().len(), 4);
}

#[test]
fn test_seed_force_replaces_log() {
    let (_dir, mut db) = common::setup_db();
    food_log::seed(&mut db, false).unwrap();
    food_log::log_food(&db, 2200.0, &common::item("Extra", 50.0), common::at(9, 0)).unwrap();
    assert_eq!(food_log::load(&db, 2200.0).unwrap().entries().len(), 5);

    assert!(food_log::seed(&mut db, true).unwrap());
    assert_eq!(food_log::load(&db, 2200.0).unwrap().entries().len(), 4);
}

#[test]
fn test_log_food_persists_in_insertion_order() {
    let (_dir, mut db) = common::setup_db();
    food_log::seed(&mut db, false).unwrap();

    let (entry, stats) =
        food_log::log_food(&db, 2200.0, &common::item("Late snack", 200.0), common::at(22, 15))
            .unwrap();
    assert_eq!(entry.category, MealCategory::Dinner);
    assert_eq!(stats.total_calories, 1270.0);

    let reloaded = food_log::load(&db, 2200.0).unwrap();
    let last = reloaded.entries().last().unwrap();
    assert_eq!(last, &entry);
}

#[test]
fn test_log_food_rejects_negative_nutrients() {
    let (_dir, db) = common::setup_db();
    let bad = nutrilife::models::NutritionItem::new("Bad", 100.0, -2.0, 0.0, 0.0);
    assert!(food_log::log_food(&db, 2200.0, &bad, common::at(9, 0)).is_err());
    assert!(food_log::load(&db, 2200.0).unwrap().entries().is_empty());
}

#[test]
fn test_remove_food_persists() {
    let (_dir, mut db) = common::setup_db();
    food_log::seed(&mut db, false).unwrap();

    let (removal, stats) = food_log::remove_food(&db, 2200.0, 3, Confirmation::Confirmed).unwrap();
    assert!(matches!(removal, Removal::Removed(_)));
    assert_eq!(stats.total_calories, 690.0);
    assert!(food_log::load(&db, 2200.0).unwrap().find(3).is_none());
}

#[test]
fn test_remove_food_declined_does_not_touch_db() {
    let (_dir, mut db) = common::setup_db();
    food_log::seed(&mut db, false).unwrap();

    let (removal, _) = food_log::remove_food(&db, 2200.0, 3, Confirmation::Declined).unwrap();
    assert_eq!(removal, Removal::Declined);
    assert!(food_log::load(&db, 2200.0).unwrap().find(3).is_some());
}
