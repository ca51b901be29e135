use anyhow::Result;
use chrono::NaiveTime;
use serde_json::json;

use nutrilife::core::food_log::{self, Removal};
use nutrilife::db::Database;
use nutrilife::models::NutritionItem;
use nutrilife::models::config::Config;
use nutrilife::output;
use nutrilife::output::human;

use super::{confirm, timestamp};

pub fn run_list(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let log = food_log::load(&db, config.food_log.target_calories)?;
    let stats = log.compute_stats();

    if human_flag {
        println!("{}", human::format_food_log(&log));
        println!("{}", human::format_stats(&stats));
    } else {
        let out = output::success(
            "food",
            json!({ "entries": log.entries(), "stats": stats }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

fn add_item(item: &NutritionItem, at: Option<NaiveTime>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let (entry, stats) =
        food_log::log_food(&db, config.food_log.target_calories, item, timestamp(at))?;

    if human_flag {
        println!("Added {} to your food log!", entry.name);
        println!("{}", human::format_entry(&entry));
        println!("{}", human::format_stats(&stats));
    } else {
        let out = output::success("food", json!({ "entry": entry, "stats": stats }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_add(
    name: &str,
    [calories, protein, carbs, fats]: [f64; 4],
    at: Option<NaiveTime>,
    human_flag: bool,
) -> Result<()> {
    let item = NutritionItem::new(name, calories, protein, carbs, fats);
    add_item(&item, at, human_flag)
}

pub fn run_quick(food: &str, at: Option<NaiveTime>, human_flag: bool) -> Result<()> {
    let item = food_log::common_food(food)?;
    add_item(&item, at, human_flag)
}

pub fn run_catalog(search: Option<&str>, human_flag: bool) -> Result<()> {
    let items = food_log::search_common_foods(search.unwrap_or(""));

    if human_flag {
        println!("{}", human::format_catalog(&items));
    } else {
        let foods: Vec<_> = items
            .iter()
            .map(|(index, f)| json!({ "index": index, "food": f }))
            .collect();
        let out = output::success("food", json!({ "foods": foods }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_remove(id: i64, yes: bool, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let target = config.food_log.target_calories;

    // Only ask about entries that exist
    let confirmation = match food_log::load(&db, target)?.find(id) {
        Some(e) => confirm(&format!("Remove {} from your food log?", e.name), yes)?,
        None => nutrilife::core::Confirmation::Declined,
    };
    let (removal, stats) = food_log::remove_food(&db, target, id, confirmation)?;

    if human_flag {
        match &removal {
            Removal::Removed(e) => {
                println!("Removed {} from your food log", e.name);
                println!("{}", human::format_stats(&stats));
            }
            Removal::Declined => println!("Nothing removed."),
            Removal::NotFound => println!("No food entry with id {}", id),
        }
    } else {
        let data = match &removal {
            Removal::Removed(e) => json!({ "removed": true, "entry": e, "stats": stats }),
            Removal::Declined => json!({ "removed": false, "reason": "declined", "stats": stats }),
            Removal::NotFound => json!({ "removed": false, "reason": "not_found", "stats": stats }),
        };
        let out = output::success("food", data);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_reset(yes: bool, human_flag: bool) -> Result<()> {
    let confirmation = confirm(
        "Replace your food log with the starter entries? Logged food will be lost.",
        yes,
    )?;
    let reset = if confirmation.is_confirmed() {
        let mut db = Database::open(&Config::db_path())?;
        food_log::seed(&mut db, true)?
    } else {
        false
    };

    if human_flag {
        println!("{}", if reset { "Food log reset." } else { "Nothing changed." });
    } else {
        let out = output::success("food", json!({ "reset": reset }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
