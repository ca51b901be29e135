use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NutriError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    /// Meal band for an hour of the day. Lower bounds are inclusive.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=10 => Self::Breakfast,
            11..=14 => Self::Lunch,
            15..=17 => Self::Snack,
            _ => Self::Dinner,
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner]
    }
}

impl std::fmt::Display for MealCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl FromStr for MealCategory {
    type Err = NutriError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(NutriError::InvalidInput(format!(
                "invalid meal category: {} (expected breakfast/lunch/dinner/snack)",
                s
            ))),
        }
    }
}

/// A food with its nutrition facts, before it is logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionItem {
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Reject negative or non-finite nutrient values.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.name.trim().is_empty() {
            return Err(NutriError::InvalidInput("food name must not be empty".into()));
        }
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fats", self.fats),
        ];
        for (label, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(NutriError::InvalidInput(format!(
                    "{} must be a non-negative number, got {}",
                    label, v
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    pub id: i64,
    pub name: String,
    pub category: MealCategory,
    pub time: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodEntry {
    /// Build an entry for `item` eaten at `at`. The category and display time
    /// both come from the timestamp.
    pub fn from_item(id: i64, item: &NutritionItem, at: NaiveDateTime) -> Self {
        Self {
            id,
            name: item.name.clone(),
            category: MealCategory::from_hour(at.hour()),
            time: format_clock(at),
            calories: item.calories,
            protein: item.protein,
            carbs: item.carbs,
            fats: item.fats,
        }
    }
}

/// 12-hour clock string such as `8:05 PM`.
pub fn format_clock(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

fn seed(id: i64, name: &str, category: MealCategory, time: &str, n: [f64; 4]) -> FoodEntry {
    FoodEntry {
        id,
        name: name.to_string(),
        category,
        time: time.to_string(),
        calories: n[0],
        protein: n[1],
        carbs: n[2],
        fats: n[3],
    }
}

/// Entries a fresh food log starts with.
pub fn seed_entries() -> Vec<FoodEntry> {
    vec![
        seed(1, "Oatmeal with berries", MealCategory::Breakfast, "08:30 AM", [320.0, 12.0, 58.0, 6.0]),
        seed(2, "Greek Yogurt", MealCategory::Breakfast, "08:45 AM", [150.0, 17.0, 12.0, 4.0]),
        seed(3, "Grilled Chicken Salad", MealCategory::Lunch, "01:15 PM", [380.0, 42.0, 15.0, 18.0]),
        seed(4, "Apple with Almond Butter", MealCategory::Snack, "04:00 PM", [220.0, 6.0, 28.0, 12.0]),
    ]
}

/// Quick-add catalog of common foods.
pub fn common_foods() -> Vec<NutritionItem> {
    vec![
        NutritionItem::new("Banana", 105.0, 1.0, 27.0, 0.0),
        NutritionItem::new("Chicken Breast (100g)", 165.0, 31.0, 0.0, 3.6),
        NutritionItem::new("Brown Rice (1 cup)", 216.0, 5.0, 45.0, 2.0),
        NutritionItem::new("Salmon (100g)", 208.0, 20.0, 0.0, 13.0),
        NutritionItem::new("Avocado", 240.0, 3.0, 13.0, 22.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    // -- MealCategory --------------------------------------------------------

    #[test]
    fn category_bands() {
        assert_eq!(MealCategory::from_hour(7), MealCategory::Breakfast);
        assert_eq!(MealCategory::from_hour(12), MealCategory::Lunch);
        assert_eq!(MealCategory::from_hour(16), MealCategory::Snack);
        assert_eq!(MealCategory::from_hour(20), MealCategory::Dinner);
    }

    #[test]
    fn category_band_edges_are_inclusive_lower() {
        assert_eq!(MealCategory::from_hour(5), MealCategory::Dinner);
        assert_eq!(MealCategory::from_hour(6), MealCategory::Breakfast);
        assert_eq!(MealCategory::from_hour(11), MealCategory::Lunch);
        assert_eq!(MealCategory::from_hour(15), MealCategory::Snack);
        assert_eq!(MealCategory::from_hour(18), MealCategory::Dinner);
        assert_eq!(MealCategory::from_hour(0), MealCategory::Dinner);
    }

    #[test]
    fn category_from_str() {
        assert_eq!("snack".parse::<MealCategory>().unwrap(), MealCategory::Snack);
        assert!("brunch".parse::<MealCategory>().is_err());
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&MealCategory::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");
    }

    // -- clock formatting ----------------------------------------------------

    #[test]
    fn clock_is_twelve_hour() {
        assert_eq!(format_clock(at(8, 5)), "8:05 AM");
        assert_eq!(format_clock(at(0, 30)), "12:30 AM");
        assert_eq!(format_clock(at(12, 0)), "12:00 PM");
        assert_eq!(format_clock(at(16, 30)), "4:30 PM");
    }

    // -- NutritionItem -------------------------------------------------------

    #[test]
    fn validate_rejects_negative_values() {
        let item = NutritionItem::new("Toast", -1.0, 0.0, 0.0, 0.0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let item = NutritionItem::new("  ", 10.0, 0.0, 0.0, 0.0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn entry_from_item_derives_category_and_time() {
        let item = NutritionItem::new("Banana", 105.0, 1.0, 27.0, 0.0);
        let e = FoodEntry::from_item(42, &item, at(16, 30));
        assert_eq!(e.id, 42);
        assert_eq!(e.category, MealCategory::Snack);
        assert_eq!(e.time, "4:30 PM");
        assert_eq!(e.calories, 105.0);
    }

    #[test]
    fn seed_ids_are_unique() {
        let seeds = seed_entries();
        let mut ids: Vec<i64> = seeds.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), seeds.len());
    }
}
