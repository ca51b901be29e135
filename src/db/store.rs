//! String-valued key-value storage, the stand-in for browser local storage.

use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use crate::error::Result;

use super::Database;

pub const PROFILE_KEY: &str = "nutriLifeUserData";
pub const PLAN_KEY: &str = "nutriLifeDietPlan";
pub const PLAN_DATE_KEY: &str = "nutriLifeDietPlanDate";
pub const PLAN_LIKED_KEY: &str = "nutriLifeDietPlanLiked";

impl Database {
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Last write wins.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(count > 0)
    }
}
