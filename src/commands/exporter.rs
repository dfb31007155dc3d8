// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::reports::category_totals;
use crate::db;
use crate::utils::get_currency;
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use serde_json::json;

/// Lines of category totals per page of the summary document.
pub const LINES_PER_PAGE: usize = 40;
const PAGE_BREAK: char = '\u{000C}';

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(conn, sub),
        Some(("summary", sub)) => export_summary(conn, sub),
        _ => Ok(()),
    }
}

fn export_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let rows = db::list_expenses(conn)?;
    if rows.is_empty() {
        println!("No expenses to export");
        return Ok(());
    }

    if fmt == "csv" {
        let mut wtr =
            csv::Writer::from_path(out).with_context(|| format!("Failed to create {}", out))?;
        wtr.write_record([
            "id", "category", "amount", "periodicity", "date", "stage", "origin",
        ])?;
        for r in &rows {
            let e = &r.record;
            wtr.write_record([
                r.id.to_string(),
                e.category.clone(),
                e.amount.to_string(),
                e.periodicity.to_string(),
                e.date.to_string(),
                e.stage.clone(),
                e.origin.clone(),
            ])?;
        }
        wtr.flush()?;
    } else {
        let items: Vec<_> = rows
            .iter()
            .map(|r| {
                json!({
                    "id": r.id,
                    "category": r.record.category,
                    "amount": r.record.amount.to_string(),
                    "periodicity": r.record.periodicity.as_tag(),
                    "date": r.record.date.to_string(),
                    "stage": r.record.stage,
                    "origin": r.record.origin,
                })
            })
            .collect();
        std::fs::write(out, serde_json::to_string_pretty(&items)?)
            .with_context(|| format!("Failed to write {}", out))?;
    }
    println!("Exported {} expenses to {}", rows.len(), out);
    Ok(())
}

/// Category totals laid out as a text document, split into pages separated
/// by form feeds.
pub fn render_summary(totals: &[(String, rust_decimal::Decimal)], ccy: &str) -> String {
    let mut doc = String::from("Life Plan Report\n\nExpenses by category:\n\n");
    for (i, (cat, amount)) in totals.iter().enumerate() {
        if i > 0 && i % LINES_PER_PAGE == 0 {
            doc.push(PAGE_BREAK);
            doc.push('\n');
        }
        doc.push_str(&format!("{}: {:.2} {}\n", cat, amount, ccy));
    }
    doc
}

fn export_summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let totals = category_totals(conn)?;
    if totals.is_empty() {
        println!("No expenses to export");
        return Ok(());
    }
    let doc = render_summary(&totals, &get_currency(conn)?);
    std::fs::write(out, doc).with_context(|| format!("Failed to write {}", out))?;
    println!("Exported summary to {}", out);
    Ok(())
}
