// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{InvestmentParameters, ScheduleParameters};
use crate::projection::{ScheduleRow, project_investment, project_schedule_with};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("invest", sub)) => invest(sub)?,
        Some(("schedule", sub)) => schedule(sub)?,
        _ => {}
    }
    Ok(())
}

/// Reads `simulate invest` flags. Rates are given in percent.
pub fn investment_params(sub: &clap::ArgMatches) -> Result<(InvestmentParameters, f64)> {
    let params = InvestmentParameters {
        initial: *sub.get_one::<f64>("initial").unwrap(),
        monthly_contribution: *sub.get_one::<f64>("monthly").unwrap(),
        annual_rate: *sub.get_one::<f64>("rate").unwrap() / 100.0,
        term_months: *sub.get_one::<u32>("term").unwrap(),
    };
    params.validate()?;
    let compare = *sub.get_one::<f64>("compare").unwrap() / 100.0;
    Ok((params, compare))
}

#[derive(Debug, Serialize)]
pub struct InvestmentRow {
    pub month: u32,
    pub balance: f64,
    pub comparison: f64,
}

pub fn investment_rows(params: &InvestmentParameters, compare_rate: f64) -> Result<Vec<InvestmentRow>> {
    let current = project_investment(params)?;
    let comparison = project_investment(&InvestmentParameters {
        annual_rate: compare_rate,
        ..params.clone()
    })?;
    Ok(current
        .into_iter()
        .zip(comparison)
        .zip(1..)
        .map(|((balance, comparison), month)| InvestmentRow {
            month,
            balance,
            comparison,
        })
        .collect())
}

fn invest(sub: &clap::ArgMatches) -> Result<()> {
    let (params, compare) = investment_params(sub)?;
    let data = investment_rows(&params, compare)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rate_hdr = format!("Rate {:.1}%", params.annual_rate * 100.0);
        let cmp_hdr = format!("Rate {:.1}%", compare * 100.0);
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.month.to_string(),
                    format!("{:.2}", r.balance),
                    format!("{:.2}", r.comparison),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", &rate_hdr, &cmp_hdr], rows));
    }
    Ok(())
}

pub fn schedule_params(sub: &clap::ArgMatches) -> ScheduleParameters {
    ScheduleParameters {
        expense_start: *sub.get_one::<f64>("expense-start").unwrap(),
        expense_end: *sub.get_one::<f64>("expense-end").unwrap(),
        income_start: *sub.get_one::<f64>("income-start").unwrap(),
        income_end: *sub.get_one::<f64>("income-end").unwrap(),
        term_months: *sub.get_one::<u32>("term").unwrap(),
    }
}

fn schedule(sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<ScheduleRow> = project_schedule_with(&schedule_params(sub))?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.month.to_string(),
                    format!("{:.2}", r.expenses),
                    format!("{:.2}", r.income),
                    format!("{:.2}", r.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Expenses", "Income", "Balance"], rows)
        );
    }
    Ok(())
}
