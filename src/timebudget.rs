// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::error::PlanError;

pub const HOURS_PER_DAY: u32 = 24;

/// Named hour allocations in the order they were given.
pub type Allocation = Vec<(String, Decimal)>;

/// Total hours of `allocation`, rejecting negative entries and totals above a day.
pub fn validate(allocation: &[(String, Decimal)]) -> Result<Decimal, PlanError> {
    let mut total = Decimal::ZERO;
    for (role, hours) in allocation {
        if *hours < Decimal::ZERO {
            return Err(PlanError::NegativeHours {
                role: role.clone(),
                hours: *hours,
            });
        }
        total = total
            .checked_add(*hours)
            .ok_or(PlanError::AmountOverflow)?;
    }
    if total > Decimal::from(HOURS_PER_DAY) {
        return Err(PlanError::BudgetExceeded { total });
    }
    Ok(total)
}

pub fn breakdown(allocation: &[(String, Decimal)]) -> Result<String, PlanError> {
    let total = validate(allocation)?;
    let mut report = String::from("Hours allocation:\n");
    for (role, hours) in allocation {
        report.push_str(&format!("{}: {} hours\n", role, hours.normalize()));
    }
    report.push_str(&format!("Total allocated: {} hours", total.normalize()));
    Ok(report)
}
