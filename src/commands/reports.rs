// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use crate::db;
use crate::error::PlanError;
use crate::plan::LifePlan;
use crate::utils::{get_currency, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("stages", sub)) => stages(conn, sub)?,
        Some(("detail", sub)) => detail(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct StageRow {
    pub stage: String,
    pub months: u32,
    pub expenses: usize,
    pub total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct StageReport {
    pub stages: Vec<StageRow>,
    pub grand_total: Decimal,
    pub unassigned: usize,
}

pub fn stage_report(conn: &Connection) -> Result<StageReport> {
    let (plan, orphans) = LifePlan::load(conn)?;
    let stages = plan
        .stages()
        .iter()
        .map(|s| -> Result<StageRow> {
            Ok(StageRow {
                stage: s.name.clone(),
                months: s.duration_months,
                expenses: s.expenses.len(),
                total: s.total()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(StageReport {
        stages,
        grand_total: plan.grand_total()?,
        unassigned: orphans.len(),
    })
}

fn stages(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = stage_report(conn)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let ccy = get_currency(conn)?;
    let mut rows: Vec<Vec<String>> = report
        .stages
        .iter()
        .map(|r| {
            vec![
                r.stage.clone(),
                r.months.to_string(),
                r.expenses.to_string(),
                format!("{:.2}", r.total),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".into(),
        String::new(),
        String::new(),
        format!("{:.2}", report.grand_total),
    ]);
    let hdr = format!("Total ({})", ccy);
    println!(
        "{}",
        pretty_table(&["Stage", "Months", "Expenses", &hdr], rows)
    );
    if report.unassigned > 0 {
        println!(
            "{} stored expense(s) belong to no stage and are not counted; run `lifeplan doctor`",
            report.unassigned
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct DetailRow {
    pub id: i64,
    pub label: String,
    pub amount: Decimal,
}

fn detail(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<DetailRow> = db::list_expenses(conn)?
        .into_iter()
        .map(|r| DetailRow {
            id: r.id,
            label: format!("{} ({})", r.record.category, r.record.stage),
            amount: r.record.amount,
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| vec![r.id.to_string(), r.label.clone(), format!("{:.2}", r.amount)])
            .collect();
        println!("{}", pretty_table(&["ID", "Category (Stage)", "Amount"], rows));
    }
    Ok(())
}

/// Raw amounts summed per category, ordered by category name.
pub fn category_totals(conn: &Connection) -> Result<Vec<(String, Decimal)>> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for r in db::list_expenses(conn)? {
        let slot = agg.entry(r.record.category).or_insert(Decimal::ZERO);
        *slot = slot
            .checked_add(r.record.amount)
            .ok_or(PlanError::AmountOverflow)?;
    }
    Ok(agg.into_iter().collect())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_totals(conn)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let hdr = format!("Amount ({})", get_currency(conn)?);
        let rows = data
            .into_iter()
            .map(|(cat, amt)| vec![cat, format!("{:.2}", amt)])
            .collect();
        println!("{}", pretty_table(&["Category", &hdr], rows));
    }
    Ok(())
}
