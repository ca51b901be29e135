use anyhow::Result;
use serde_json::json;

use nutrilife::core::generator::{self, GenerationSession, ThreadPacer};
use nutrilife::core::profile;
use nutrilife::db::Database;
use nutrilife::models::config::Config;
use nutrilife::output;
use nutrilife::output::human;

use super::confirm;

fn run_session(
    session: &mut GenerationSession,
    db: &Database,
    command: &str,
    human_flag: bool,
) -> Result<()> {
    let mut steps = Vec::new();
    let stored = generator::drive(session, db, &mut ThreadPacer, |step| {
        if human_flag {
            println!("{}", human::format_step(step));
        } else {
            steps.push(step.clone());
        }
    })?;

    if human_flag {
        println!("Your personalized diet plan is ready!\n");
        println!("{}", human::format_plan(&stored));
    } else {
        let out = output::success(
            command,
            json!({
                "state": session.state(),
                "steps": steps,
                "generated_at": stored.generated_at,
                "plan": stored.plan
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_generate(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let p = profile::load_profile(&db)?;

    let mut session = GenerationSession::resume(&db, config.generation)?;
    session.start(p)?;
    run_session(&mut session, &db, "plan", human_flag)
}

pub fn run_regenerate(yes: bool, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let p = profile::load_profile(&db)?;

    let mut session = GenerationSession::resume(&db, config.generation)?;
    let confirmation = confirm(
        "Are you sure you want to generate a new plan? This will replace your current plan.",
        yes,
    )?;
    if !session.restart(p, confirmation)? {
        if human_flag {
            println!("Kept your current plan.");
        } else {
            let out = output::success(
                "plan",
                json!({ "regenerated": false, "state": session.state() }),
            );
            println!("{}", serde_json::to_string(&out)?);
        }
        return Ok(());
    }
    run_session(&mut session, &db, "plan", human_flag)
}

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let stored = generator::load_plan(&db)?;

    if human_flag {
        match stored {
            Some(s) => println!("{}", human::format_plan(&s)),
            None => println!("No diet plan yet. Run `nutrilife plan generate`."),
        }
    } else {
        let data = match stored {
            Some(s) => json!({
                "plan": s.plan,
                "generated_at": s.generated_at,
                "liked": s.liked
            }),
            None => json!({ "plan": null }),
        };
        let out = output::success("plan", data);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_like(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let liked = generator::toggle_like(&db)?;

    if human_flag {
        println!(
            "{}",
            if liked { "Added to favorites!" } else { "Removed from favorites" }
        );
    } else {
        let out = output::success("plan", json!({ "liked": liked }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
