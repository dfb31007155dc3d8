// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::config::{InvestmentParameters, ScheduleParameters};
use crate::error::PlanError;

/// Month-by-month balances of a compounding investment.
///
/// Each month grows the balance by the monthly equivalent of `annual_rate`
/// and then adds the contribution, so the first value is already one period
/// in. Computed as a forward recurrence.
pub fn project(
    initial: f64,
    monthly: f64,
    annual_rate: f64,
    term_months: u32,
) -> Result<Vec<f64>, PlanError> {
    InvestmentParameters {
        initial,
        monthly_contribution: monthly,
        annual_rate,
        term_months,
    }
    .validate()?;

    let monthly_rate = (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0;
    let mut balance = initial;
    let mut values = Vec::with_capacity(term_months as usize);
    for _ in 0..term_months {
        balance = balance * (1.0 + monthly_rate) + monthly;
        values.push(balance);
    }
    Ok(values)
}

pub fn project_investment(params: &InvestmentParameters) -> Result<Vec<f64>, PlanError> {
    project(
        params.initial,
        params.monthly_contribution,
        params.annual_rate,
        params.term_months,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub expenses: f64,
    pub income: f64,
    pub balance: f64,
}

/// `points` evenly spaced values from `start` to `end`, both included.
/// A single point is just `start`.
fn linspace(start: f64, end: f64, points: u32) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / f64::from(n - 1);
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * f64::from(i) })
                .collect()
        }
    }
}

pub fn project_schedule(
    expense_start: f64,
    expense_end: f64,
    income_start: f64,
    income_end: f64,
    term_months: u32,
) -> Result<Vec<ScheduleRow>, PlanError> {
    if term_months == 0 {
        return Err(PlanError::InvalidTerm(term_months));
    }
    let expenses = linspace(expense_start, expense_end, term_months);
    let income = linspace(income_start, income_end, term_months);
    Ok(expenses
        .into_iter()
        .zip(income)
        .zip(1..)
        .map(|((expenses, income), month)| ScheduleRow {
            month,
            expenses,
            income,
            balance: income - expenses,
        })
        .collect())
}

pub fn project_schedule_with(params: &ScheduleParameters) -> Result<Vec<ScheduleRow>, PlanError> {
    params.validate()?;
    project_schedule(
        params.expense_start,
        params.expense_end,
        params.income_start,
        params.income_end,
        params.term_months,
    )
}
