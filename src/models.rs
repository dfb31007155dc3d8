// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

pub const ORIGIN_GENERAL: &str = "general";

/// How often an amount recurs.
///
/// Tags read back from the store are free text, so parsing never fails:
/// anything unknown is kept verbatim as `Unrecognized` and normalizes to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Periodicity {
    OneTime,
    Monthly,
    Yearly,
    Unrecognized(String),
}

impl Periodicity {
    pub const TAGS: [&'static str; 3] = ["one_time", "monthly", "yearly"];

    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "one_time" | "one-time" | "once" | "único" | "unico" => Periodicity::OneTime,
            "monthly" | "mensual" => Periodicity::Monthly,
            "yearly" | "annual" | "anual" => Periodicity::Yearly,
            _ => Periodicity::Unrecognized(tag.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Periodicity::OneTime => "one_time",
            Periodicity::Monthly => "monthly",
            Periodicity::Yearly => "yearly",
            Periodicity::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Periodicity::Unrecognized(_))
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl From<String> for Periodicity {
    fn from(s: String) -> Self {
        Periodicity::parse(&s)
    }
}

impl From<Periodicity> for String {
    fn from(p: Periodicity) -> Self {
        p.as_tag().to_string()
    }
}

/// Total of `amount` over `periods` months.
///
/// One-time amounts keep their face value, monthly ones repeat every month,
/// yearly ones prorate linearly by month. Unrecognized tags yield zero.
pub fn normalize(
    amount: Decimal,
    periodicity: &Periodicity,
    periods: u32,
) -> Result<Decimal, PlanError> {
    let periods = Decimal::from(periods);
    let total = match periodicity {
        Periodicity::OneTime => Some(amount),
        Periodicity::Monthly => amount.checked_mul(periods),
        Periodicity::Yearly => amount
            .checked_mul(periods)
            .and_then(|v| v.checked_div(Decimal::from(12))),
        Periodicity::Unrecognized(tag) => {
            tracing::warn!(tag = %tag, "unrecognized periodicity, counting as zero");
            Some(Decimal::ZERO)
        }
    };
    total.ok_or(PlanError::AmountOverflow)
}

/// Overflow-checked sum.
pub fn checked_sum<I>(values: I) -> Result<Decimal, PlanError>
where
    I: IntoIterator<Item = Result<Decimal, PlanError>>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v?).ok_or(PlanError::AmountOverflow)
    })
}

pub fn ensure_positive(amount: Decimal) -> Result<Decimal, PlanError> {
    if amount <= Decimal::ZERO {
        return Err(PlanError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Amounts are kept in a REAL column; reject any that would not read back
/// unchanged.
pub fn ensure_storable(amount: Decimal) -> Result<Decimal, PlanError> {
    let back = amount.to_f64().and_then(Decimal::from_f64);
    if back != Some(amount) {
        return Err(PlanError::TooPrecise(amount));
    }
    Ok(amount)
}

fn validate_amount(amount: Decimal) -> Result<Decimal, PlanError> {
    ensure_storable(ensure_positive(amount)?)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: String,
    pub amount: Decimal,
    pub periodicity: Periodicity,
    pub date: NaiveDate,
    pub stage: String,
    pub origin: String,
}

impl Expense {
    pub fn new(
        category: &str,
        amount: Decimal,
        periodicity: Periodicity,
        date: NaiveDate,
        stage: &str,
    ) -> Result<Self, PlanError> {
        Ok(Expense {
            category: category.trim().to_string(),
            amount: validate_amount(amount)?,
            periodicity,
            date,
            stage: stage.trim().to_string(),
            origin: ORIGIN_GENERAL.to_string(),
        })
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    pub fn total(&self, periods: u32) -> Result<Decimal, PlanError> {
        normalize(self.amount, &self.periodicity, periods)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub r#type: String,
    pub amount: Decimal,
    pub periodicity: Periodicity,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl Income {
    pub fn new(
        kind: &str,
        amount: Decimal,
        periodicity: Periodicity,
        date: NaiveDate,
        description: Option<String>,
    ) -> Result<Self, PlanError> {
        Ok(Income {
            r#type: kind.trim().to_string(),
            amount: validate_amount(amount)?,
            periodicity,
            date,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        })
    }

    pub fn total(&self, periods: u32) -> Result<Decimal, PlanError> {
        normalize(self.amount, &self.periodicity, periods)
    }
}

/// A record as read back from the store, with its row id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<T> {
    pub id: i64,
    #[serde(flatten)]
    pub record: T,
}
