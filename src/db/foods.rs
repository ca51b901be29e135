use rusqlite::params;

use crate::error::{NutriError, Result};
use crate::models::food::FoodEntry;

use super::Database;

struct FoodRow {
    id: i64,
    name: String,
    category: String,
    time: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
}

fn row_to_entry(r: FoodRow) -> Result<FoodEntry> {
    let category = r.category.parse().map_err(|_| NutriError::DataCorruption {
        key: format!("food_entries/{}", r.id),
        reason: format!("unknown category '{}'", r.category),
    })?;
    Ok(FoodEntry {
        id: r.id,
        name: r.name,
        category,
        time: r.time,
        calories: r.calories,
        protein: r.protein,
        carbs: r.carbs,
        fats: r.fats,
    })
}

impl Database {
    pub fn insert_food_entry(&self, e: &FoodEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO food_entries (id, name, category, time, calories, protein, carbs, fats)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                e.id,
                e.name,
                e.category.to_string(),
                e.time,
                e.calories,
                e.protein,
                e.carbs,
                e.fats,
            ],
        )?;
        Ok(())
    }

    /// All entries in insertion order.
    pub fn list_food_entries(&self) -> Result<Vec<FoodEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, time, calories, protein, carbs, fats
             FROM food_entries ORDER BY seq",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(FoodRow {
                id: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
                time: row.get(3)?,
                calories: row.get(4)?,
                protein: row.get(5)?,
                carbs: row.get(6)?,
                fats: row.get(7)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row_to_entry(row?)?);
        }
        Ok(entries)
    }

    pub fn delete_food_entry(&self, id: i64) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM food_entries WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }

    /// Replace the whole log, keeping the given order.
    pub fn replace_food_entries(&mut self, entries: &[FoodEntry]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM food_entries", [])?;
        for e in entries {
            tx.execute(
                "INSERT INTO food_entries (id, name, category, time, calories, protein, carbs, fats)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    e.id,
                    e.name,
                    e.category.to_string(),
                    e.time,
                    e.calories,
                    e.protein,
                    e.carbs,
                    e.fats,
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn count_food_entries(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM food_entries", [], |row| row.get(0))?;
        Ok(n)
    }
}
