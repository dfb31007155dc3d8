// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Input validation failures. Each one aborts the current command before
/// anything is written.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Amount {0} has more significant digits than the store can keep")]
    TooPrecise(Decimal),
    #[error("Amount is too large to total")]
    AmountOverflow,
    #[error("{field} cannot be negative, got {value}")]
    NegativeContribution { field: &'static str, value: f64 },
    #[error("Annual rate {0} is invalid, it must be a finite number not below -100%")]
    InvalidRate(f64),
    #[error("Term must be at least 1 month, got {0}")]
    InvalidTerm(u32),
    #[error("Stage duration must be at least 1 month, got {0}")]
    InvalidDuration(u32),
    #[error("Stage '{0}' already exists in the plan")]
    DuplicateStage(String),
    #[error("Hours for '{role}' cannot be negative, got {hours}")]
    NegativeHours { role: String, hours: Decimal },
    #[error("Allocated hours add up to {total}, which exceeds the 24 hours in a day")]
    BudgetExceeded { total: Decimal },
}
