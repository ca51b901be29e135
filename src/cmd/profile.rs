use anyhow::Result;
use serde_json::json;

use nutrilife::core::{plan, profile};
use nutrilife::db::Database;
use nutrilife::models::config::Config;
use nutrilife::output;
use nutrilife::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let p = profile::load_profile(&db)?;
    let daily = plan::compute_daily_calories(&p);

    if human_flag {
        println!("{}", human::format_profile(&p));
        println!("Estimated daily target: {} kcal", daily);
    } else {
        let out = output::success(
            "profile",
            json!({ "profile": p, "daily_calories": daily }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let p = profile::update_profile(&db, key, value)?;

    if human_flag {
        println!("Profile updated.");
        println!("{}", human::format_profile(&p));
    } else {
        let out = output::success(
            "profile",
            json!({ "key": key, "value": value, "profile": p }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
