// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::Income;
use crate::utils::{
    fmt_money, get_currency, maybe_print_json, parse_amount, parse_date, parse_periodicity,
    pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let income = Income::new(
        sub.get_one::<String>("type").unwrap(),
        parse_amount(sub.get_one::<String>("amount").unwrap())?,
        parse_periodicity(sub.get_one::<String>("periodicity").unwrap())?,
        parse_date(sub.get_one::<String>("date").unwrap())?,
        sub.get_one::<String>("description").cloned(),
    )?;
    let id = db::insert_income(conn, &income)?;
    println!(
        "Recorded income #{} {} {} ({}) on {}",
        id,
        income.r#type,
        fmt_money(&income.amount, &get_currency(conn)?),
        income.periodicity,
        income.date
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = db::list_incomes(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.record.date.to_string(),
                    r.record.r#type.clone(),
                    format!("{:.2}", r.record.amount),
                    r.record.periodicity.to_string(),
                    r.record.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Amount", "Periodicity", "Description"],
                rows
            )
        );
    }
    Ok(())
}
