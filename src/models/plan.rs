use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Macro split in percent of daily calories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub carbs: u8,
    pub protein: u8,
    pub fats: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealCounts {
    pub total: u8,
    pub main: u8,
    pub snacks: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlot {
    pub calories: u32,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub breakfast: MealSlot,
    pub morning_snack: MealSlot,
    pub lunch: MealSlot,
    pub afternoon_snack: MealSlot,
    pub dinner: MealSlot,
}

impl MealPlan {
    /// Slots in the order they are eaten, with display labels.
    pub fn slots(&self) -> [(&'static str, &MealSlot); 5] {
        [
            ("Breakfast", &self.breakfast),
            ("Morning snack", &self.morning_snack),
            ("Lunch", &self.lunch),
            ("Afternoon snack", &self.afternoon_snack),
            ("Dinner", &self.dinner),
        ]
    }

    /// Sum of slot calories. Not expected to equal the daily target.
    pub fn total_calories(&self) -> u32 {
        self.slots().iter().map(|(_, s)| s.calories).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub daily_calories: u32,
    pub macro_split: MacroSplit,
    pub meals: MealCounts,
    /// Liters per day.
    pub water_intake: f64,
    pub meal_plan: MealPlan,
    pub tips: Vec<String>,
}

/// A generated plan as read back from storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredPlan {
    pub plan: DietPlan,
    pub generated_at: Option<DateTime<Utc>>,
    pub liked: bool,
}
