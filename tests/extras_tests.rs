// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use lifeplan::commands::extras::{self, Extra, annual_cost, support_total};
use lifeplan::error::PlanError;
use lifeplan::models::Periodicity;
use lifeplan::{cli, db, plan::LifePlan, utils::parse_amount_list};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_extras(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["lifeplan", "extras"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("extras", sub)) => extras::handle(conn, sub),
        _ => panic!("no extras subcommand"),
    }
}

#[test]
fn annual_cost_scales_by_frequency() {
    let cost = Decimal::from(300);
    assert_eq!(annual_cost(cost, 4, &Periodicity::Monthly).unwrap(), Decimal::from(14_400));
    assert_eq!(annual_cost(cost, 2, &Periodicity::OneTime).unwrap(), Decimal::from(600));
    assert_eq!(annual_cost(cost, 1, &Periodicity::Yearly).unwrap(), Decimal::from(300));
}

#[test]
fn oversized_costs_are_errors() {
    assert_eq!(
        annual_cost(Decimal::MAX, 2, &Periodicity::OneTime),
        Err(PlanError::AmountOverflow)
    );
    assert_eq!(
        annual_cost(Decimal::MAX, 1, &Periodicity::Monthly),
        Err(PlanError::AmountOverflow)
    );
    assert_eq!(
        support_total(&[Decimal::MAX, Decimal::ONE]),
        Err(PlanError::AmountOverflow)
    );
}

#[test]
fn support_sums_listed_amounts() {
    let amounts = parse_amount_list("1000, 2500.5,,  300").unwrap();
    assert_eq!(support_total(&amounts).unwrap(), "3800.5".parse::<Decimal>().unwrap());
    assert!(parse_amount_list("10, ten").is_err());
}

#[test]
fn baby_stores_cost_times_frequency() {
    let conn = setup();
    run_extras(
        &conn,
        &["baby", "--item", "Diapers", "--cost", "250", "-p", "monthly", "--frequency", "4"],
    )
    .unwrap();
    let rows = db::list_expenses(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.amount, Decimal::from(1000));
    assert_eq!(rows[0].record.stage, Extra::Baby.stage());
    assert_eq!(rows[0].record.origin, "baby");
}

#[test]
fn hospital_and_event_are_one_time() {
    let conn = setup();
    run_extras(&conn, &["hospital", "--item", "Delivery", "--cost", "35000", "-d", "2025-09-10"]).unwrap();
    run_extras(&conn, &["event", "--item", "Birth certificate", "--cost", "120", "-d", "2025-09-20"]).unwrap();
    let rows = db::list_expenses(&conn).unwrap();
    assert!(rows.iter().all(|r| r.record.periodicity == Periodicity::OneTime));
    assert_eq!(rows[0].record.origin, "hospital");
    assert_eq!(rows[1].record.origin, "documentation");
    assert!(run_extras(&conn, &["event", "--item", "Party", "--cost", "-5", "-d", "2025-09-20"]).is_err());
}

#[test]
fn extras_do_not_count_toward_stage_totals() {
    let conn = setup();
    run_extras(&conn, &["home", "--name", "Rent", "-a", "9000", "-p", "monthly"]).unwrap();
    run_extras(&conn, &["service", "--name", "Phone", "-a", "400", "-p", "monthly"]).unwrap();
    let (plan, orphans) = LifePlan::load(&conn).unwrap();
    assert_eq!(plan.grand_total().unwrap(), Decimal::ZERO);
    assert_eq!(orphans.len(), 2);
}
