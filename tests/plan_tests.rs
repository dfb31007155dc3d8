// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use lifeplan::error::PlanError;
use lifeplan::models::{Expense, Periodicity};
use lifeplan::plan::{DEFAULT_STAGES, LifePlan, Stage};
use lifeplan::utils::parse_date;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(category: &str, amount: &str, p: Periodicity, stage: &str) -> Expense {
    Expense::new(category, d(amount), p, parse_date("2025-02-01").unwrap(), stage).unwrap()
}

#[test]
fn default_plan_has_seven_ordered_stages() {
    let plan = LifePlan::with_default_stages();
    let names: Vec<_> = plan.stages().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.len(), 7);
    assert_eq!(names[0], "Pregnancy");
    assert_eq!(names[1], "Birth");
    assert_eq!(names[6], "Fifth Year");
    let months: u32 = plan.stages().iter().map(|s| s.duration_months).sum();
    assert_eq!(months, DEFAULT_STAGES.iter().map(|(_, m)| m).sum::<u32>());
    assert_eq!(months, 70);
}

#[test]
fn stage_total_uses_stage_duration() {
    let mut stage = Stage::new("Pregnancy", 9).unwrap();
    stage.add_expense(expense("Checkups", "100", Periodicity::Monthly, "Pregnancy"));
    assert_eq!(stage.total().unwrap(), d("900"));
}

#[test]
fn stage_total_is_additive() {
    let r1 = expense("Checkups", "100", Periodicity::Monthly, "Pregnancy");
    let r2 = expense("Insurance", "1200", Periodicity::Yearly, "Pregnancy");

    let mut only1 = Stage::new("Pregnancy", 9).unwrap();
    only1.add_expense(r1.clone());
    let mut only2 = Stage::new("Pregnancy", 9).unwrap();
    only2.add_expense(r2.clone());
    let mut both = Stage::new("Pregnancy", 9).unwrap();
    both.add_expense(r1);
    both.add_expense(r2);

    assert_eq!(both.total().unwrap(), only1.total().unwrap() + only2.total().unwrap());
    assert_eq!(both.total().unwrap(), d("1800"));
}

#[test]
fn duplicates_are_kept_in_order() {
    let mut stage = Stage::new("Birth", 1).unwrap();
    let e = expense("Stroller", "4500", Periodicity::OneTime, "Birth");
    stage.add_expense(e.clone());
    stage.add_expense(e);
    assert_eq!(stage.expenses.len(), 2);
    assert_eq!(stage.total().unwrap(), d("9000"));
}

#[test]
fn find_stage_ignores_case_and_whitespace() {
    let plan = LifePlan::with_default_stages();
    assert_eq!(plan.find_stage("  first year ").unwrap().name, "First Year");
    assert!(plan.find_stage("First").is_none());
}

#[test]
fn attach_reports_missing_stage() {
    let mut plan = LifePlan::with_default_stages();
    let hit = plan.attach(expense("Diapers", "800", Periodicity::Monthly, "FIRST YEAR"));
    assert_eq!(hit.as_deref(), Some("First Year"));
    let miss = plan.attach(expense("Rent", "9000", Periodicity::Monthly, "Home"));
    assert_eq!(miss, None);
    assert_eq!(plan.grand_total().unwrap(), d("9600"));
}

#[test]
fn grand_total_sums_all_stages() {
    let mut plan = LifePlan::with_default_stages();
    plan.attach(expense("Vitamins", "300", Periodicity::Monthly, "Pregnancy"));
    plan.attach(expense("Hospital", "25000", Periodicity::OneTime, "Birth"));
    plan.attach(expense("Daycare", "24000", Periodicity::Yearly, "Second Year"));
    assert_eq!(plan.grand_total().unwrap(), d("2700") + d("25000") + d("24000"));
}

#[test]
fn add_stage_rejects_duplicates_and_zero_duration() {
    let mut plan = LifePlan::new();
    plan.add_stage(Stage::new("Sixth Year", 12).unwrap()).unwrap();
    assert_eq!(
        plan.add_stage(Stage::new(" sixth year", 12).unwrap()),
        Err(PlanError::DuplicateStage("sixth year".into()))
    );
    assert_eq!(Stage::new("Empty", 0).unwrap_err(), PlanError::InvalidDuration(0));
    assert_eq!(plan.stages().len(), 1);
}

#[test]
fn totals_too_large_are_errors() {
    let huge = Expense {
        category: "Tuition".into(),
        amount: Decimal::MAX,
        periodicity: Periodicity::Monthly,
        date: parse_date("2025-02-01").unwrap(),
        stage: "First Year".into(),
        origin: "general".into(),
    };
    let mut plan = LifePlan::with_default_stages();
    assert!(plan.attach(huge).is_some());
    assert_eq!(
        plan.find_stage("First Year").unwrap().total(),
        Err(PlanError::AmountOverflow)
    );
    assert_eq!(plan.grand_total(), Err(PlanError::AmountOverflow));

    // Each stage fits, the sum across stages does not
    let mut plan = LifePlan::with_default_stages();
    let half = Decimal::MAX / Decimal::from(2) + Decimal::ONE;
    for stage in ["Birth", "Second Year"] {
        let mut e = expense("Gift", "1", Periodicity::OneTime, stage);
        e.amount = half;
        plan.attach(e);
    }
    assert!(plan.find_stage("Birth").unwrap().total().is_ok());
    assert_eq!(plan.grand_total(), Err(PlanError::AmountOverflow));
}
