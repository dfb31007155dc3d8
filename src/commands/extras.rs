// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Household cost calculators. Each one prints an annual figure and stores
//! the expense under its own label and origin. Those labels are not plan
//! stages, so the stored rows show up in listings and exports but not in
//! stage totals.

use crate::db;
use crate::error::PlanError;
use crate::models::{Expense, Periodicity, checked_sum, normalize};
use crate::utils::{
    fmt_money, get_currency, parse_amount, parse_amount_list, parse_date, parse_periodicity,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: u32 = 12;

/// Label and origin recorded for each calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extra {
    Home,
    Baby,
    Hospital,
    Event,
    Service,
}

impl Extra {
    pub fn stage(self) -> &'static str {
        match self {
            Extra::Home => "Home",
            Extra::Baby => "Baby",
            Extra::Hospital => "Hospital",
            Extra::Event => "Events",
            Extra::Service => "Services",
        }
    }

    pub fn origin(self) -> &'static str {
        match self {
            Extra::Home => "home",
            Extra::Baby => "baby",
            Extra::Hospital => "hospital",
            Extra::Event => "documentation",
            Extra::Service => "services",
        }
    }
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("support", sub)) => support(conn, sub)?,
        Some(("home", sub)) => recurring(conn, sub, Extra::Home)?,
        Some(("service", sub)) => recurring(conn, sub, Extra::Service)?,
        Some(("baby", sub)) => baby(conn, sub)?,
        Some(("hospital", sub)) => one_off(conn, sub, Extra::Hospital)?,
        Some(("event", sub)) => one_off(conn, sub, Extra::Event)?,
        _ => {}
    }
    Ok(())
}

pub fn support_total(amounts: &[Decimal]) -> Result<Decimal, PlanError> {
    checked_sum(amounts.iter().copied().map(Ok))
}

fn batch_cost(cost: Decimal, frequency: u32) -> Result<Decimal, PlanError> {
    cost.checked_mul(Decimal::from(frequency))
        .ok_or(PlanError::AmountOverflow)
}

/// Cost over a year of buying `frequency` units each period.
pub fn annual_cost(
    cost: Decimal,
    frequency: u32,
    periodicity: &Periodicity,
) -> Result<Decimal, PlanError> {
    normalize(batch_cost(cost, frequency)?, periodicity, MONTHS_PER_YEAR)
}

pub fn store_extra(
    conn: &Connection,
    kind: Extra,
    name: &str,
    amount: Decimal,
    periodicity: Periodicity,
    date: NaiveDate,
) -> Result<i64> {
    let expense = Expense::new(name, amount, periodicity, date, kind.stage())?.with_origin(kind.origin());
    db::insert_expense(conn, &expense)
}

fn support(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amounts = parse_amount_list(sub.get_one::<String>("amounts").unwrap())?;
    println!(
        "Total support: {}",
        fmt_money(&support_total(&amounts)?, &get_currency(conn)?)
    );
    Ok(())
}

fn recurring(conn: &Connection, sub: &clap::ArgMatches, kind: Extra) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let periodicity = parse_periodicity(sub.get_one::<String>("periodicity").unwrap())?;
    let annual = annual_cost(amount, 1, &periodicity)?;
    store_extra(conn, kind, name, amount, periodicity, Local::now().date_naive())?;
    println!("Annual cost: {}", fmt_money(&annual, &get_currency(conn)?));
    Ok(())
}

fn baby(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let item = sub.get_one::<String>("item").unwrap();
    let cost = parse_amount(sub.get_one::<String>("cost").unwrap())?;
    let periodicity = parse_periodicity(sub.get_one::<String>("periodicity").unwrap())?;
    let frequency = *sub.get_one::<u32>("frequency").unwrap();
    let annual = annual_cost(cost, frequency, &periodicity)?;
    store_extra(
        conn,
        Extra::Baby,
        item,
        batch_cost(cost, frequency)?,
        periodicity,
        Local::now().date_naive(),
    )?;
    println!("Annual cost: {}", fmt_money(&annual, &get_currency(conn)?));
    Ok(())
}

fn one_off(conn: &Connection, sub: &clap::ArgMatches, kind: Extra) -> Result<()> {
    let item = sub.get_one::<String>("item").unwrap();
    let cost = parse_amount(sub.get_one::<String>("cost").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    store_extra(conn, kind, item, cost, Periodicity::OneTime, date)?;
    println!(
        "Recorded '{}': {} on {}",
        item,
        fmt_money(&cost, &get_currency(conn)?),
        date
    );
    Ok(())
}
