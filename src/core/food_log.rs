use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::Confirmation;
use crate::db::Database;
use crate::error::{NutriError, Result};
use crate::models::food::{self, FoodEntry, MealCategory, NutritionItem};

/// Ordered meals plus the daily calorie target they are measured against.
#[derive(Debug, Clone)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
    target_calories: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(FoodEntry),
    Declined,
    NotFound,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodLogStats {
    pub entry_count: usize,
    pub total_calories: f64,
    pub target_calories: f64,
    pub remaining: f64,
    /// Raw share of the target, may exceed 100.
    pub percentage: f64,
    /// `percentage` clamped to 0..=100 for progress bars.
    pub progress: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

impl FoodLog {
    pub fn new(entries: Vec<FoodEntry>, target_calories: f64) -> Self {
        Self {
            entries,
            target_calories,
        }
    }

    pub fn seeded(target_calories: f64) -> Self {
        Self::new(food::seed_entries(), target_calories)
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn target_calories(&self) -> f64 {
        self.target_calories
    }

    pub fn find(&self, id: i64) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Id for an entry logged at `at`: epoch millis, bumped past the largest
    /// existing id so two adds in the same millisecond never collide.
    fn next_id(&self, at: NaiveDateTime) -> i64 {
        let candidate = at.and_utc().timestamp_millis();
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= candidate => max + 1,
            _ => candidate,
        }
    }

    /// Append `item` as eaten at `at`. Never reorders existing entries.
    pub fn add_entry(&mut self, item: &NutritionItem, at: NaiveDateTime) -> &FoodEntry {
        let id = self.next_id(at);
        let entry = FoodEntry::from_item(id, item, at);
        tracing::debug!(id, name = %entry.name, category = %entry.category, "food entry added");
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn remove_entry(&mut self, id: i64, confirmation: Confirmation) -> Removal {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            tracing::warn!(id, "remove requested for unknown food entry");
            return Removal::NotFound;
        };
        if !confirmation.is_confirmed() {
            return Removal::Declined;
        }
        let removed = self.entries.remove(pos);
        tracing::debug!(id, name = %removed.name, "food entry removed");
        Removal::Removed(removed)
    }

    pub fn compute_stats(&self) -> FoodLogStats {
        let total_calories: f64 = self.entries.iter().map(|e| e.calories).sum();
        let percentage = if self.target_calories > 0.0 {
            total_calories / self.target_calories * 100.0
        } else {
            0.0
        };
        FoodLogStats {
            entry_count: self.entries.len(),
            total_calories,
            target_calories: self.target_calories,
            remaining: (self.target_calories - total_calories).max(0.0),
            percentage,
            progress: percentage.clamp(0.0, 100.0),
            total_protein: self.entries.iter().map(|e| e.protein).sum(),
            total_carbs: self.entries.iter().map(|e| e.carbs).sum(),
            total_fats: self.entries.iter().map(|e| e.fats).sum(),
        }
    }

    /// Entries grouped by meal, in breakfast/lunch/snack/dinner order.
    /// Empty groups are left out.
    pub fn by_category(&self) -> Vec<(MealCategory, Vec<&FoodEntry>)> {
        MealCategory::all()
            .into_iter()
            .map(|c| (c, self.entries.iter().filter(|e| e.category == c).collect::<Vec<_>>()))
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }
}

/// Look up a catalog food by 0-based index or case-insensitive name.
pub fn find_common_food(key: &str) -> Option<NutritionItem> {
    let catalog = food::common_foods();
    if let Ok(idx) = key.parse::<usize>() {
        return catalog.into_iter().nth(idx);
    }
    let needle = key.to_lowercase();
    catalog.into_iter().find(|f| f.name.to_lowercase() == needle)
}

/// Like `find_common_food`, but an unknown key is an error.
pub fn common_food(key: &str) -> Result<NutritionItem> {
    find_common_food(key).ok_or_else(|| NutriError::UnknownFood(key.to_string()))
}

/// Catalog foods whose name contains `term` (case-insensitive). An empty
/// term returns the whole catalog.
pub fn search_common_foods(term: &str) -> Vec<(usize, NutritionItem)> {
    let needle = term.trim().to_lowercase();
    food::common_foods()
        .into_iter()
        .enumerate()
        .filter(|(_, f)| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .collect()
}

// ── persistence ──────────────────────────────────────────────────────────────

/// Load the stored log.
pub fn load(db: &Database, target_calories: f64) -> Result<FoodLog> {
    Ok(FoodLog::new(db.list_food_entries()?, target_calories))
}

/// Seed an empty log (or any log when `force`). Returns whether it wrote.
pub fn seed(db: &mut Database, force: bool) -> Result<bool> {
    if !force && db.count_food_entries()? > 0 {
        return Ok(false);
    }
    db.replace_food_entries(&food::seed_entries())?;
    tracing::info!("food log seeded");
    Ok(true)
}

/// Validate, append and store a new entry.
pub fn log_food(
    db: &Database,
    target_calories: f64,
    item: &NutritionItem,
    at: NaiveDateTime,
) -> Result<(FoodEntry, FoodLogStats)> {
    item.validate()?;
    let mut log = load(db, target_calories)?;
    let entry = log.add_entry(item, at).clone();
    db.insert_food_entry(&entry)?;
    Ok((entry, log.compute_stats()))
}

/// Remove an entry from the stored log once the caller has confirmed.
pub fn remove_food(
    db: &Database,
    target_calories: f64,
    id: i64,
    confirmation: Confirmation,
) -> Result<(Removal, FoodLogStats)> {
    let mut log = load(db, target_calories)?;
    let removal = log.remove_entry(id, confirmation);
    if let Removal::Removed(ref e) = removal {
        db.delete_food_entry(e.id)?;
    }
    Ok((removal, log.compute_stats()))
}
