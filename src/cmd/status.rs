use anyhow::Result;

use nutrilife::core::food_log;
use nutrilife::db::Database;
use nutrilife::models::config::Config;
use nutrilife::output;
use nutrilife::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let stats = food_log::load(&db, config.food_log.target_calories)?.compute_stats();

    if human_flag {
        println!("{}", human::format_stats(&stats));
    } else {
        let out = output::success("status", serde_json::to_value(&stats)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
