//! Staged diet plan generation.
//!
//! Generation is a cooperative step function: `GenerationSession::poll` hands
//! back one step at a time together with the delay that precedes it, and the
//! caller decides how to wait. `drive` is the usual loop around it.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::time::Duration;

use crate::core::Confirmation;
use crate::core::plan::generate_plan_data;
use crate::db::Database;
use crate::db::store::{PLAN_DATE_KEY, PLAN_KEY, PLAN_LIKED_KEY};
use crate::error::{NutriError, Result};
use crate::models::config::GenerationConfig;
use crate::models::plan::{DietPlan, StoredPlan};
use crate::models::UserProfile;

pub const STAGE_MESSAGES: [&str; 5] = [
    "Analyzing your health profile...",
    "Calculating calorie requirements...",
    "Creating personalized meal plan...",
    "Optimizing macro distribution...",
    "Finalizing your diet plan...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Generating,
    Ready,
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Generating => write!(f, "generating"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// One observable boundary of a running generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Stage {
        index: usize,
        total: usize,
        message: &'static str,
        #[serde(skip)]
        delay: Duration,
    },
    Finalize {
        #[serde(skip)]
        delay: Duration,
    },
}

impl Step {
    /// How long to wait before this step is announced.
    pub fn delay(&self) -> Duration {
        match self {
            Self::Stage { delay, .. } | Self::Finalize { delay } => *delay,
        }
    }
}

#[derive(Debug)]
pub enum Progress {
    Step(Step),
    Ready(StoredPlan),
}

struct Pending {
    profile: UserProfile,
    next: usize,
}

/// Owns the Idle/Generating/Ready state for one session. At most one
/// generation runs at a time; a second `start` is rejected, not queued.
pub struct GenerationSession {
    state: GenerationState,
    pacing: GenerationConfig,
    pending: Option<Pending>,
}

impl GenerationSession {
    pub fn new(pacing: GenerationConfig) -> Self {
        Self {
            state: GenerationState::Idle,
            pacing,
            pending: None,
        }
    }

    /// Start Ready when a plan is already stored, Idle otherwise.
    pub fn resume(db: &Database, pacing: GenerationConfig) -> Result<Self> {
        let mut session = Self::new(pacing);
        if db.get_item(PLAN_KEY)?.is_some() {
            session.state = GenerationState::Ready;
        }
        Ok(session)
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn start(&mut self, profile: UserProfile) -> Result<()> {
        if self.state == GenerationState::Generating {
            return Err(NutriError::InvalidState(
                "a diet plan is already being generated".into(),
            ));
        }
        tracing::info!(from = %self.state, "plan generation started");
        self.state = GenerationState::Generating;
        self.pending = Some(Pending { profile, next: 0 });
        Ok(())
    }

    /// Regenerate path: replaces the current plan only once confirmed.
    /// Returns whether generation was started.
    pub fn restart(&mut self, profile: UserProfile, confirmation: Confirmation) -> Result<bool> {
        if !confirmation.is_confirmed() {
            tracing::debug!("plan regeneration declined");
            return Ok(false);
        }
        self.start(profile)?;
        Ok(true)
    }

    /// Advance the running generation by one step. The final call computes
    /// and stores the plan and moves the session to Ready.
    pub fn poll(&mut self, db: &Database) -> Result<Progress> {
        let pending = self.pending.as_mut().ok_or_else(|| {
            NutriError::InvalidState(format!("no generation in progress (state: {})", self.state))
        })?;

        let total = STAGE_MESSAGES.len();
        let index = pending.next;
        if index < total {
            pending.next += 1;
            tracing::debug!(stage = index + 1, total, "generation stage");
            return Ok(Progress::Step(Step::Stage {
                index,
                total,
                message: STAGE_MESSAGES[index],
                delay: self.pacing.stage_delay(),
            }));
        }
        if index == total {
            pending.next += 1;
            return Ok(Progress::Step(Step::Finalize {
                delay: self.pacing.final_delay(),
            }));
        }

        let plan = generate_plan_data(&pending.profile);
        let stored = persist_plan(db, plan, Utc::now())?;
        self.pending = None;
        self.state = GenerationState::Ready;
        Ok(Progress::Ready(stored))
    }
}

/// Waits out the delay in front of each step.
pub trait Pacer {
    fn wait(&mut self, delay: Duration);
}

/// Blocks the current thread.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Run a started generation to completion. No cancellation: every stage is
/// announced before the plan is produced.
pub fn drive<P, F>(
    session: &mut GenerationSession,
    db: &Database,
    pacer: &mut P,
    mut on_step: F,
) -> Result<StoredPlan>
where
    P: Pacer,
    F: FnMut(&Step),
{
    loop {
        match session.poll(db)? {
            Progress::Step(step) => {
                pacer.wait(step.delay());
                on_step(&step);
            }
            Progress::Ready(plan) => return Ok(plan),
        }
    }
}

/// Store a freshly generated plan with its timestamp. A new plan starts
/// out not liked.
pub fn persist_plan(db: &Database, plan: DietPlan, at: DateTime<Utc>) -> Result<StoredPlan> {
    db.set_item(PLAN_KEY, &serde_json::to_string(&plan)?)?;
    db.set_item(PLAN_DATE_KEY, &at.to_rfc3339_opts(SecondsFormat::Millis, true))?;
    db.remove_item(PLAN_LIKED_KEY)?;
    tracing::info!(daily_calories = plan.daily_calories, "diet plan saved");
    Ok(StoredPlan {
        plan,
        generated_at: Some(at),
        liked: false,
    })
}

/// Read the stored plan, surfacing a corrupt record as an error.
pub fn try_load_plan(db: &Database) -> Result<Option<StoredPlan>> {
    let Some(raw) = db.get_item(PLAN_KEY)? else {
        return Ok(None);
    };
    let plan: DietPlan = serde_json::from_str(&raw).map_err(|e| NutriError::DataCorruption {
        key: PLAN_KEY.to_string(),
        reason: e.to_string(),
    })?;
    let generated_at = db
        .get_item(PLAN_DATE_KEY)?
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|d| d.with_timezone(&Utc));
    let liked = db.get_item(PLAN_LIKED_KEY)?.as_deref() == Some("true");
    Ok(Some(StoredPlan {
        plan,
        generated_at,
        liked,
    }))
}

/// Read the stored plan. A corrupt record reads as no plan.
pub fn load_plan(db: &Database) -> Result<Option<StoredPlan>> {
    match try_load_plan(db) {
        Err(e @ NutriError::DataCorruption { .. }) => {
            tracing::warn!(error = %e, "discarding stored diet plan");
            Ok(None)
        }
        other => other,
    }
}

/// Flip the favorite flag on the stored plan. Returns the new value.
pub fn toggle_like(db: &Database) -> Result<bool> {
    if db.get_item(PLAN_KEY)?.is_none() {
        return Err(NutriError::InvalidState(
            "no diet plan has been generated yet".into(),
        ));
    }
    let liked = db.get_item(PLAN_LIKED_KEY)?.as_deref() != Some("true");
    db.set_item(PLAN_LIKED_KEY, if liked { "true" } else { "false" })?;
    Ok(liked)
}
