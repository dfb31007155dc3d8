// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::{Expense, Stored};
use crate::plan::{LifePlan, stage_key};
use crate::utils::{
    fmt_money, get_currency, maybe_print_json, parse_amount, parse_date, parse_periodicity,
    pretty_table,
};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds the expense described by `expense add` arguments.
pub fn expense_from_args(sub: &clap::ArgMatches) -> Result<Expense> {
    let category = sub.get_one::<String>("category").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let periodicity = parse_periodicity(sub.get_one::<String>("periodicity").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let stage = sub.get_one::<String>("stage").unwrap();
    let origin = sub.get_one::<String>("origin").unwrap();
    Ok(Expense::new(category, amount, periodicity, date, stage)?.with_origin(origin.trim()))
}

/// Persists the expense, then attaches it to the in-memory plan. Returns the
/// new row id and the stage it landed in, if any.
pub fn record(conn: &Connection, plan: &mut LifePlan, expense: Expense) -> Result<(i64, Option<String>)> {
    let id = db::insert_expense(conn, &expense)?;
    info!(id, category = %expense.category, "expense stored");
    let stage = plan.attach(expense);
    Ok((id, stage))
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let expense = expense_from_args(sub)?;
    let (mut plan, _) = LifePlan::load(conn)?;
    let ccy = get_currency(conn)?;
    let summary = format!(
        "{} {} ({}) on {}",
        expense.category,
        fmt_money(&expense.amount, &ccy),
        expense.periodicity,
        expense.date
    );
    let (id, stage) = record(conn, &mut plan, expense)?;
    match stage {
        Some(name) => {
            let total = match plan.find_stage(&name) {
                Some(s) => s.total()?,
                None => Decimal::ZERO,
            };
            println!(
                "Recorded #{} {} in stage '{}' (stage total {})",
                id,
                summary,
                name,
                fmt_money(&total, &ccy)
            );
        }
        None => println!("Recorded #{} {} without a stage", id, summary),
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Stored<Expense>>> {
    let mut rows = db::list_expenses(conn)?;
    if let Some(stage) = sub.get_one::<String>("stage") {
        let key = stage_key(stage);
        rows.retain(|r| stage_key(&r.record.stage) == key);
    }
    Ok(rows)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.record.date.to_string(),
                    r.record.category.clone(),
                    format!("{:.2}", r.record.amount),
                    r.record.periodicity.to_string(),
                    r.record.stage.clone(),
                    r.record.origin.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Amount", "Periodicity", "Stage", "Origin"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !db::delete_expense(conn, id)? {
        return Err(anyhow!("Expense {} not found", id));
    }
    println!("Removed expense {}", id);
    Ok(())
}
