// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::error::PlanError;

/// Overrides the platform data dir location of the store.
pub const DB_ENV: &str = "LIFEPLAN_DB";
/// Log filter directives, `RUST_LOG` syntax.
pub const LOG_ENV: &str = "LIFEPLAN_LOG";
pub const DEFAULT_LOG_FILTER: &str = "lifeplan=warn";
pub const DEFAULT_CURRENCY: &str = "MXN";
/// Annual rate of the comparison curve drawn next to the investment projection.
pub const DEFAULT_COMPARISON_RATE: f64 = 0.12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentParameters {
    pub initial: f64,
    pub monthly_contribution: f64,
    /// Fraction, 0.06 is 6% a year.
    pub annual_rate: f64,
    pub term_months: u32,
}

impl Default for InvestmentParameters {
    fn default() -> Self {
        InvestmentParameters {
            initial: 10_000.0,
            monthly_contribution: 2_000.0,
            annual_rate: 0.06,
            term_months: 60,
        }
    }
}

impl InvestmentParameters {
    pub fn validate(&self) -> Result<(), PlanError> {
        for (field, value) in [
            ("Initial balance", self.initial),
            ("Monthly contribution", self.monthly_contribution),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::NegativeContribution { field, value });
            }
        }
        if !self.annual_rate.is_finite() || self.annual_rate < -1.0 {
            return Err(PlanError::InvalidRate(self.annual_rate));
        }
        if self.term_months == 0 {
            return Err(PlanError::InvalidTerm(self.term_months));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleParameters {
    pub expense_start: f64,
    pub expense_end: f64,
    pub income_start: f64,
    pub income_end: f64,
    pub term_months: u32,
}

impl Default for ScheduleParameters {
    fn default() -> Self {
        ScheduleParameters {
            expense_start: 10_000.0,
            expense_end: 60_000.0,
            income_start: 15_000.0,
            income_end: 70_000.0,
            term_months: 60,
        }
    }
}

impl ScheduleParameters {
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.term_months == 0 {
            return Err(PlanError::InvalidTerm(self.term_months));
        }
        Ok(())
    }
}
