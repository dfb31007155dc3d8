// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config::DB_ENV;
use crate::models::{Expense, Income, Periodicity, Stored, ensure_storable};
use crate::utils::parse_date;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Lifeplan", "lifeplan"));

pub fn db_path() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var(DB_ENV) {
        if !custom.trim().is_empty() {
            return Ok(PathBuf::from(custom.trim()));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("lifeplan.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    debug!(path = %path.display(), "store opened");
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT NOT NULL,
        amount REAL NOT NULL,
        periodicity TEXT NOT NULL,
        date TEXT NOT NULL,
        stage TEXT NOT NULL,
        origin TEXT NOT NULL DEFAULT 'general'
    );

    CREATE TABLE IF NOT EXISTS incomes(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        amount REAL NOT NULL,
        periodicity TEXT NOT NULL,
        date TEXT NOT NULL,
        description TEXT
    );
    "#,
    )
    .context("Failed to create schema")?;
    Ok(())
}

fn to_real(amount: Decimal) -> Result<f64> {
    ensure_storable(amount)?;
    amount
        .to_f64()
        .with_context(|| format!("Amount {} cannot be stored", amount))
}

fn from_real(value: f64, table: &str, id: i64) -> Result<Decimal> {
    Decimal::try_from(value)
        .with_context(|| format!("Invalid amount '{}' in {} row {}", value, table, id))
}

pub fn insert_expense(conn: &Connection, e: &Expense) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses(category, amount, periodicity, date, stage, origin)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            e.category,
            to_real(e.amount)?,
            e.periodicity.as_tag(),
            e.date.to_string(),
            e.stage,
            e.origin
        ],
    )
    .context("Failed to save expense")?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_income(conn: &Connection, i: &Income) -> Result<i64> {
    conn.execute(
        "INSERT INTO incomes(type, amount, periodicity, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            i.r#type,
            to_real(i.amount)?,
            i.periodicity.as_tag(),
            i.date.to_string(),
            i.description
        ],
    )
    .context("Failed to save income")?;
    Ok(conn.last_insert_rowid())
}

pub fn list_expenses(conn: &Connection) -> Result<Vec<Stored<Expense>>> {
    let mut stmt = conn.prepare(
        "SELECT id, category, amount, periodicity, date, stage, origin FROM expenses ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let amount: f64 = r.get(2)?;
        let periodicity: String = r.get(3)?;
        let date: String = r.get(4)?;
        let origin: Option<String> = r.get(6)?;
        data.push(Stored {
            id,
            record: Expense {
                category: r.get(1)?,
                amount: from_real(amount, "expenses", id)?,
                periodicity: Periodicity::parse(&periodicity),
                date: parse_date(&date)?,
                stage: r.get(5)?,
                origin: origin.unwrap_or_else(|| crate::models::ORIGIN_GENERAL.to_string()),
            },
        });
    }
    Ok(data)
}

pub fn list_incomes(conn: &Connection) -> Result<Vec<Stored<Income>>> {
    let mut stmt = conn.prepare(
        "SELECT id, type, amount, periodicity, date, description FROM incomes ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let amount: f64 = r.get(2)?;
        let periodicity: String = r.get(3)?;
        let date: String = r.get(4)?;
        data.push(Stored {
            id,
            record: Income {
                r#type: r.get(1)?,
                amount: from_real(amount, "incomes", id)?,
                periodicity: Periodicity::parse(&periodicity),
                date: parse_date(&date)?,
                description: r.get(5)?,
            },
        });
    }
    Ok(data)
}

/// Removes the expense with `id`. Returns false when there was no such row.
pub fn delete_expense(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM expenses WHERE id=?1", params![id])
        .with_context(|| format!("Failed to delete expense {}", id))?;
    Ok(n == 1)
}

pub fn delete_all(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM expenses", [])?;
    tx.execute("DELETE FROM incomes", [])?;
    tx.commit().context("Failed to clear stored data")?;
    Ok(())
}
