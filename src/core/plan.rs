//! Diet plan arithmetic. Everything here is pure.

use crate::models::UserProfile;
use crate::models::plan::{DietPlan, MacroSplit, MealCounts, MealPlan, MealSlot};

pub const BASE_CALORIES: f64 = 2000.0;
pub const GOAL_ADJUSTMENT: f64 = 500.0;
pub const WATER_INTAKE_LITERS: f64 = 2.5;

pub const MACRO_SPLIT: MacroSplit = MacroSplit {
    carbs: 40,
    protein: 30,
    fats: 30,
};

pub const MEAL_COUNTS: MealCounts = MealCounts {
    total: 5,
    main: 3,
    snacks: 2,
};

pub const TIPS: [&str; 5] = [
    "Eat slowly and mindfully",
    "Stay hydrated throughout the day",
    "Include a variety of colorful vegetables",
    "Plan your meals in advance",
    "Get adequate sleep (7-9 hours)",
];

/// Daily calorie target: activity-scaled base, shifted by the goal.
///
/// Only `activity_level` and `goal` take part; weight, BMI, age and height
/// are ignored.
pub fn compute_daily_calories(profile: &UserProfile) -> u32 {
    let mut calories = BASE_CALORIES * profile.activity_multiplier();
    let goal = profile.goal.to_lowercase();
    if goal.contains("loss") {
        calories -= GOAL_ADJUSTMENT;
    } else if goal.contains("gain") {
        calories += GOAL_ADJUSTMENT;
    }
    calories.round().max(0.0) as u32
}

fn slot(calories: f64, items: &[&str]) -> MealSlot {
    MealSlot {
        calories: calories.round() as u32,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// Five fixed meal slots sized off a fifth of the daily target. Slot totals
/// deliberately overshoot `daily_calories`.
pub fn build_meal_plan(daily_calories: u32) -> MealPlan {
    let per_meal = (daily_calories as f64 / 5.0).round();
    MealPlan {
        breakfast: slot(
            per_meal * 1.3,
            &["Oatmeal with berries", "Greek yogurt", "Green tea"],
        ),
        morning_snack: slot(per_meal, &["Apple with almond butter"]),
        lunch: slot(
            per_meal * 1.4,
            &["Grilled chicken salad", "Quinoa", "Mixed vegetables"],
        ),
        afternoon_snack: slot(per_meal, &["Protein shake", "Banana"]),
        dinner: slot(
            per_meal * 1.3,
            &["Baked salmon", "Brown rice", "Steamed broccoli"],
        ),
    }
}

pub fn generate_plan_data(profile: &UserProfile) -> DietPlan {
    let daily_calories = compute_daily_calories(profile);
    DietPlan {
        daily_calories,
        macro_split: MACRO_SPLIT,
        meals: MEAL_COUNTS,
        water_intake: WATER_INTAKE_LITERS,
        meal_plan: build_meal_plan(daily_calories),
        tips: TIPS.iter().map(|s| s.to_string()).collect(),
    }
}
