use anyhow::Result;
use serde_json::json;

use nutrilife::core::food_log;
use nutrilife::db::Database;
use nutrilife::models::config::Config;
use nutrilife::output;

pub fn run(force: bool, human: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;

    let mut db = Database::open(&Config::db_path())?;
    let seeded = food_log::seed(&mut db, force)?;

    if human {
        println!("Config initialized with defaults at {:?}", Config::path());
        if seeded {
            println!("Food log seeded with starter entries.");
        }
    } else {
        let out = output::success(
            "init",
            json!({
                "config": Config::path(),
                "database": Config::db_path(),
                "seeded": seeded
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
