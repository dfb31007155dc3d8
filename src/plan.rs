// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::db;
use crate::error::PlanError;
use crate::models::{Expense, Stored, checked_sum};

/// Life stages every plan starts with, in report order.
pub const DEFAULT_STAGES: [(&str, u32); 7] = [
    ("Pregnancy", 9),
    ("Birth", 1),
    ("First Year", 12),
    ("Second Year", 12),
    ("Third Year", 12),
    ("Fourth Year", 12),
    ("Fifth Year", 12),
];

/// Key used to match stage names: trimmed and case-folded.
pub fn stage_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Serialize)]
pub struct Stage {
    pub name: String,
    pub duration_months: u32,
    pub expenses: Vec<Expense>,
}

impl Stage {
    pub fn new(name: &str, duration_months: u32) -> Result<Self, PlanError> {
        if duration_months == 0 {
            return Err(PlanError::InvalidDuration(duration_months));
        }
        Ok(Stage {
            name: name.trim().to_string(),
            duration_months,
            expenses: Vec::new(),
        })
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Sum of every expense normalized over this stage's duration, whatever
    /// the expense's own date.
    pub fn total(&self) -> Result<Decimal, PlanError> {
        checked_sum(self.expenses.iter().map(|e| e.total(self.duration_months)))
    }

    fn matches(&self, name: &str) -> bool {
        stage_key(&self.name) == stage_key(name)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LifePlan {
    stages: Vec<Stage>,
}

impl LifePlan {
    pub fn new() -> Self {
        LifePlan::default()
    }

    pub fn with_default_stages() -> Self {
        let mut plan = LifePlan::new();
        for (name, months) in DEFAULT_STAGES {
            plan.stages.push(Stage {
                name: name.to_string(),
                duration_months: months,
                expenses: Vec::new(),
            });
        }
        plan
    }

    /// Rebuild the default plan from every persisted expense. Expenses whose
    /// stage matches nothing are returned alongside instead of being attached.
    pub fn load(conn: &Connection) -> Result<(Self, Vec<Stored<Expense>>)> {
        let mut plan = LifePlan::with_default_stages();
        let mut orphans = Vec::new();
        for stored in db::list_expenses(conn)? {
            match plan.find_stage_mut(&stored.record.stage) {
                Some(stage) => stage.add_expense(stored.record.clone()),
                None => {
                    debug!(id = stored.id, stage = %stored.record.stage, "expense has no matching stage");
                    orphans.push(stored);
                }
            }
        }
        Ok((plan, orphans))
    }

    pub fn add_stage(&mut self, stage: Stage) -> Result<(), PlanError> {
        if self.find_stage(&stage.name).is_some() {
            return Err(PlanError::DuplicateStage(stage.name));
        }
        self.stages.push(stage);
        Ok(())
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn find_stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.matches(name))
    }

    pub fn find_stage_mut(&mut self, name: &str) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|s| s.matches(name))
    }

    /// Attach an expense to the stage it names. Returns the stage's canonical
    /// name, or `None` (with a warning) when no stage matches.
    pub fn attach(&mut self, expense: Expense) -> Option<String> {
        match self.find_stage_mut(&expense.stage) {
            Some(stage) => {
                stage.add_expense(expense);
                Some(stage.name.clone())
            }
            None => {
                warn!(
                    "Expense '{}' was not assigned to any stage: '{}' is not part of the plan",
                    expense.category, expense.stage
                );
                None
            }
        }
    }

    pub fn grand_total(&self) -> Result<Decimal, PlanError> {
        checked_sum(self.stages.iter().map(Stage::total))
    }
}
