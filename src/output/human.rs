use colored::Colorize;
use comfy_table::{Cell, Table, presets::UTF8_FULL};

use crate::core::food_log::{FoodLog, FoodLogStats};
use crate::core::generator::Step;
use crate::models::plan::StoredPlan;
use crate::models::{FoodEntry, NutritionItem, UserProfile};

const BAR_WIDTH: usize = 30;

/// Uppercase the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line summary of an entry.
pub fn format_entry(e: &FoodEntry) -> String {
    format!(
        "#{} {} ({}, {}) {} kcal | P {}g C {}g F {}g",
        e.id,
        e.name,
        capitalize_first(&e.category.to_string()),
        e.time,
        e.calories,
        e.protein,
        e.carbs,
        e.fats
    )
}

pub fn format_food_log(log: &FoodLog) -> String {
    if log.entries().is_empty() {
        return "No food logged yet. Add your first meal!".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "ID", "Food", "Meal", "Time", "Calories", "Protein", "Carbs", "Fats",
    ]);
    for e in log.entries() {
        table.add_row(vec![
            Cell::new(e.id),
            Cell::new(&e.name),
            Cell::new(capitalize_first(&e.category.to_string())),
            Cell::new(&e.time),
            Cell::new(e.calories),
            Cell::new(format!("{}g", e.protein)),
            Cell::new(format!("{}g", e.carbs)),
            Cell::new(format!("{}g", e.fats)),
        ]);
    }
    table.to_string()
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled)
    )
}

pub fn format_stats(s: &FoodLogStats) -> String {
    let mut out = format!(
        "Consumed: {} kcal | Target: {} kcal | Remaining: {} kcal\n",
        s.total_calories, s.target_calories, s.remaining
    );
    out.push_str(&format!(
        "{} {:.1}% of daily target",
        progress_bar(s.progress),
        s.percentage
    ));
    if s.percentage > 100.0 {
        out.push_str(&format!(" {}", "(over target)".red()));
    }
    out.push_str(&format!(
        "\nMacros: P {:.1}g | C {:.1}g | F {:.1}g",
        s.total_protein, s.total_carbs, s.total_fats
    ));
    out
}

pub fn format_catalog(items: &[(usize, NutritionItem)]) -> String {
    if items.is_empty() {
        return "No matching foods.".to_string();
    }
    items
        .iter()
        .map(|(i, f)| {
            format!(
                "[{}] {} • {} cal • P: {}g • C: {}g • F: {}g",
                i, f.name, f.calories, f.protein, f.carbs, f.fats
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_profile(p: &UserProfile) -> String {
    format!(
        "Current weight: {} kg\nTarget weight: {} kg\nBMI: {}\nGoal: {}\nAge: {}\nHeight: {} cm\nActivity: {}\nDietary preferences: {}",
        p.current_weight,
        p.target_weight,
        p.bmi,
        p.goal,
        p.age,
        p.height,
        p.activity_level,
        p.dietary_preferences
    )
}

pub fn format_step(step: &Step) -> String {
    match step {
        Step::Stage {
            index,
            total,
            message,
            ..
        } => format!("[{}/{}] {}", index + 1, total, message),
        Step::Finalize { .. } => "Almost there...".to_string(),
    }
}

pub fn format_plan(stored: &StoredPlan) -> String {
    let plan = &stored.plan;
    let mut out = format!(
        "=== Your Diet Plan{} ===\n",
        if stored.liked { " ♥" } else { "" }
    );
    if let Some(at) = stored.generated_at {
        out.push_str(&format!("Generated: {}\n", at.format("%Y-%m-%d %H:%M UTC")));
    }
    out.push_str(&format!(
        "Daily target: {} kcal\nMacros: carbs {}% | protein {}% | fats {}%\nMeals: {} ({} main, {} snacks) | Water: {} L\n",
        plan.daily_calories.to_string().bold(),
        plan.macro_split.carbs,
        plan.macro_split.protein,
        plan.macro_split.fats,
        plan.meals.total,
        plan.meals.main,
        plan.meals.snacks,
        plan.water_intake
    ));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Meal", "Calories", "Items"]);
    for (label, slot) in plan.meal_plan.slots() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(slot.calories),
            Cell::new(slot.items.join(", ")),
        ]);
    }
    out.push_str(&table.to_string());

    out.push_str("\nTips:");
    for tip in &plan.tips {
        out.push_str(&format!("\n  - {}", tip));
    }
    out
}
