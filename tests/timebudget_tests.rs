// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use lifeplan::{cli, commands::hours, error::PlanError, timebudget};
use rust_decimal::Decimal;

fn alloc(items: &[(&str, i64)]) -> Vec<(String, Decimal)> {
    items
        .iter()
        .map(|(r, h)| (r.to_string(), Decimal::from(*h)))
        .collect()
}

#[test]
fn over_a_day_is_rejected() {
    let err = timebudget::validate(&alloc(&[("A", 10), ("B", 10), ("C", 5)])).unwrap_err();
    assert_eq!(
        err,
        PlanError::BudgetExceeded {
            total: Decimal::from(25)
        }
    );
}

#[test]
fn within_a_day_returns_total() {
    let total = timebudget::validate(&alloc(&[("A", 8), ("B", 8), ("C", 7)])).unwrap();
    assert_eq!(total, Decimal::from(23));
    assert_eq!(
        timebudget::validate(&alloc(&[("A", 24)])).unwrap(),
        Decimal::from(24)
    );
}

#[test]
fn exactly_a_day_is_accepted() {
    assert_eq!(
        timebudget::validate(&alloc(&[("A", 12), ("B", 12)])).unwrap(),
        Decimal::from(24)
    );
    let mut fractional = alloc(&[("Sleep", 8)]);
    fractional.push(("Work".into(), "15.5".parse().unwrap()));
    fractional.push(("Play".into(), "0.5".parse().unwrap()));
    assert_eq!(timebudget::validate(&fractional).unwrap(), Decimal::from(24));
    assert!(timebudget::breakdown(&fractional)
        .unwrap()
        .ends_with("Total allocated: 24 hours"));
}

#[test]
fn negative_hours_are_rejected() {
    assert!(matches!(
        timebudget::validate(&alloc(&[("Sleep", 8), ("Work", -2)])),
        Err(PlanError::NegativeHours { .. })
    ));
}

#[test]
fn breakdown_lists_roles_in_order() {
    let m = cli::build_cli().get_matches_from([
        "lifeplan", "hours", "--role", "Sleep=8", "--role", "Work = 7.5", "-r", "Baby care=4",
    ]);
    let Some(("hours", sub)) = m.subcommand() else {
        panic!("no hours subcommand");
    };
    let allocation = hours::allocation_from_args(sub).unwrap();
    let report = timebudget::breakdown(&allocation).unwrap();
    assert_eq!(
        report,
        "Hours allocation:\nSleep: 8 hours\nWork: 7.5 hours\nBaby care: 4 hours\nTotal allocated: 19.5 hours"
    );
}

#[test]
fn malformed_role_is_an_error() {
    let m = cli::build_cli().get_matches_from(["lifeplan", "hours", "--role", "Sleep"]);
    let Some(("hours", sub)) = m.subcommand() else {
        panic!("no hours subcommand");
    };
    assert!(hours::handle(sub).is_err());
}
