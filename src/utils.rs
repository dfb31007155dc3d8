// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use crate::config::DEFAULT_CURRENCY;
use crate::models::{Periodicity, ensure_positive, ensure_storable};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    Ok(ensure_storable(ensure_positive(parse_decimal(s)?)?)?)
}

/// Input-boundary parse: only tags the plan knows about are accepted here.
pub fn parse_periodicity(s: &str) -> Result<Periodicity> {
    let p = Periodicity::parse(s);
    if !p.is_recognized() {
        return Err(anyhow!(
            "Invalid periodicity '{}', expected one of {}",
            s,
            Periodicity::TAGS.join("|")
        ));
    }
    Ok(p)
}

/// Parses `ROLE=HOURS`.
pub fn parse_role_hours(s: &str) -> Result<(String, Decimal)> {
    let (role, hours) = s
        .split_once('=')
        .with_context(|| format!("Invalid allocation '{}', expected ROLE=HOURS", s))?;
    let role = role.trim();
    if role.is_empty() {
        return Err(anyhow!("Invalid allocation '{}': role name is empty", s));
    }
    Ok((role.to_string(), parse_decimal(hours)?))
}

/// Parses a comma separated list of amounts, skipping blanks.
pub fn parse_amount_list(s: &str) -> Result<Vec<Decimal>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_decimal)
        .collect()
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{:.2} {}", d.round_dp(2), ccy)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn get_currency(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='currency'", [], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()))
}

pub fn set_currency(conn: &Connection, ccy: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![ccy],
    )?;
    Ok(())
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
