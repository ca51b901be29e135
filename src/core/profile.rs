use serde_json::{Map, Value};

use crate::db::Database;
use crate::db::store::PROFILE_KEY;
use crate::error::{NutriError, Result};
use crate::models::UserProfile;
use crate::models::profile::ActivityLevel;

enum FieldKind {
    Number,
    Integer,
    Activity,
    Text,
}

/// Stored key and value kind for a user-facing profile key. Accepts the
/// camelCase record keys and their snake_case spellings.
fn field(key: &str) -> Option<(&'static str, FieldKind)> {
    let f = match key {
        "currentWeight" | "current_weight" => ("currentWeight", FieldKind::Number),
        "targetWeight" | "target_weight" => ("targetWeight", FieldKind::Number),
        "bmi" => ("bmi", FieldKind::Number),
        "height" => ("height", FieldKind::Number),
        "age" => ("age", FieldKind::Integer),
        "activityLevel" | "activity_level" => ("activityLevel", FieldKind::Activity),
        "goal" => ("goal", FieldKind::Text),
        "dietaryPreferences" | "dietary_preferences" => ("dietaryPreferences", FieldKind::Text),
        _ => return None,
    };
    Some(f)
}

/// Read the stored profile, surfacing a corrupt record as an error.
pub fn try_load_profile(db: &Database) -> Result<UserProfile> {
    match db.get_item(PROFILE_KEY)? {
        None => Ok(UserProfile::default()),
        Some(raw) => {
            UserProfile::merged_over_defaults(&raw).map_err(|reason| NutriError::DataCorruption {
                key: PROFILE_KEY.to_string(),
                reason,
            })
        }
    }
}

/// Read the stored profile. A corrupt record is logged and replaced by the
/// defaults for this read; the record itself is left untouched.
pub fn load_profile(db: &Database) -> Result<UserProfile> {
    match try_load_profile(db) {
        Err(e @ NutriError::DataCorruption { .. }) => {
            tracing::warn!(error = %e, "discarding stored profile, using defaults");
            Ok(UserProfile::default())
        }
        other => other,
    }
}

/// Set one profile field in the stored record and return the merged profile.
pub fn update_profile(db: &Database, key: &str, value: &str) -> Result<UserProfile> {
    let (stored_key, kind) = field(key)
        .ok_or_else(|| NutriError::InvalidInput(format!("unknown profile key: {}", key)))?;

    let parsed = match kind {
        FieldKind::Number => {
            let v: f64 = value.parse().map_err(|_| {
                NutriError::InvalidInput(format!("{} must be a number, got '{}'", key, value))
            })?;
            if !v.is_finite() || v < 0.0 {
                return Err(NutriError::InvalidInput(format!(
                    "{} must be a non-negative number",
                    key
                )));
            }
            Value::from(v)
        }
        FieldKind::Integer => {
            let v: u32 = value.parse().map_err(|_| {
                NutriError::InvalidInput(format!("{} must be a whole number, got '{}'", key, value))
            })?;
            Value::from(v)
        }
        FieldKind::Activity => {
            let level: ActivityLevel = value.parse()?;
            Value::from(level.to_string())
        }
        FieldKind::Text => Value::from(value.to_string()),
    };

    // Start from the stored object when it is usable, so unrelated keys survive.
    let mut record = match db.get_item(PROFILE_KEY)? {
        Some(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            _ => {
                tracing::warn!("stored profile is corrupt, rebuilding it from this update");
                Map::new()
            }
        },
        None => Map::new(),
    };
    record.insert(stored_key.to_string(), parsed);

    let raw = serde_json::to_string(&Value::Object(record))?;
    let profile = UserProfile::merged_over_defaults(&raw).map_err(|reason| {
        NutriError::DataCorruption {
            key: PROFILE_KEY.to_string(),
            reason,
        }
    })?;
    db.set_item(PROFILE_KEY, &raw)?;
    tracing::debug!(key = stored_key, "profile updated");
    Ok(profile)
}

/// Overwrite the stored profile with a complete record.
pub fn save_profile(db: &Database, profile: &UserProfile) -> Result<()> {
    db.set_item(PROFILE_KEY, &serde_json::to_string(profile)?)
}
