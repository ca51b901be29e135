use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::NutriError;

/// Multiplier used when the stored activity level is not recognised.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    ExtraActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::ExtraActive => 1.9,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::ExtraActive => write!(f, "extra-active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutriError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "extra-active" => Ok(Self::ExtraActive),
            _ => Err(NutriError::InvalidInput(format!(
                "invalid activity level: {} (expected sedentary/light/moderate/active/extra-active)",
                s
            ))),
        }
    }
}

/// Health profile the diet plan is generated from.
///
/// Stored as a camelCase JSON object. Only `activityLevel` and `goal` feed
/// the calorie formula; the body measurements are informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub current_weight: f64,
    pub target_weight: f64,
    pub bmi: f64,
    pub goal: String,
    pub age: u32,
    pub height: f64,
    pub activity_level: String,
    pub dietary_preferences: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            current_weight: 68.0,
            target_weight: 62.0,
            bmi: 24.9,
            goal: "Weight Loss".to_string(),
            age: 25,
            height: 170.0,
            activity_level: "moderate".to_string(),
            dietary_preferences: "none".to_string(),
        }
    }
}

impl UserProfile {
    /// Overlay a stored JSON record on the defaults, key by key. Keys present
    /// in the record win; absent keys, and keys whose value does not fit the
    /// field's type, keep their default. Only a record that is not a JSON
    /// object is rejected.
    pub fn merged_over_defaults(record: &str) -> Result<Self, String> {
        let stored: Value = serde_json::from_str(record).map_err(|e| e.to_string())?;
        let Value::Object(stored) = stored else {
            return Err("profile record is not a JSON object".to_string());
        };
        let mut merged = serde_json::to_value(Self::default()).map_err(|e| e.to_string())?;
        let Value::Object(base) = &mut merged else {
            return Err("profile defaults did not serialize to an object".to_string());
        };

        for (key, value) in stored {
            if !base.contains_key(&key) {
                continue;
            }
            let mut candidate = base.clone();
            candidate.insert(key.clone(), value.clone());
            match serde_json::from_value::<Self>(Value::Object(candidate)) {
                Ok(_) => {
                    base.insert(key, value);
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "ignoring mistyped profile field");
                }
            }
        }
        serde_json::from_value(merged).map_err(|e| e.to_string())
    }

    /// Recognised activity level, if any.
    pub fn activity(&self) -> Option<ActivityLevel> {
        self.activity_level.parse().ok()
    }

    pub fn activity_multiplier(&self) -> f64 {
        self.activity()
            .map(ActivityLevel::multiplier)
            .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER)
    }
}
