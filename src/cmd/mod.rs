pub mod config;
pub mod food;
pub mod init;
pub mod plan;
pub mod profile;
pub mod status;

use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use std::io::IsTerminal;

use nutrilife::core::Confirmation;

/// Ask the user to confirm a destructive action. `--yes` answers for them;
/// without a terminal to ask on, the answer is no.
pub fn confirm(prompt: &str, yes: bool) -> Result<Confirmation> {
    if yes {
        return Ok(Confirmation::Confirmed);
    }
    if !std::io::stdin().is_terminal() {
        tracing::warn!("no terminal to confirm on; pass --yes to proceed");
        return Ok(Confirmation::Declined);
    }
    let answer = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(Confirmation::from_answer(answer))
}

/// Today at `at`, or right now.
pub fn timestamp(at: Option<NaiveTime>) -> NaiveDateTime {
    let now = Local::now().naive_local();
    match at {
        Some(t) => now.date().and_time(t),
        None => now,
    }
}
