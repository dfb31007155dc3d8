// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::plan::LifePlan;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

/// One `(issue, detail)` pair per problem found in the store.
pub fn diagnose(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Expenses whose stage is not part of the plan
    let (_, orphans) = LifePlan::load(conn)?;
    for o in &orphans {
        rows.push(vec![
            "expense_without_stage".into(),
            format!("#{} {} (stage '{}')", o.id, o.record.category, o.record.stage),
        ]);
    }

    // 2) Periodicity tags that count as zero
    for e in db::list_expenses(conn)? {
        if !e.record.periodicity.is_recognized() {
            rows.push(vec![
                "unknown_periodicity".into(),
                format!("expense #{} '{}'", e.id, e.record.periodicity),
            ]);
        }
    }
    for i in db::list_incomes(conn)? {
        if !i.record.periodicity.is_recognized() {
            rows.push(vec![
                "unknown_periodicity".into(),
                format!("income #{} '{}'", i.id, i.record.periodicity),
            ]);
        }
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = diagnose(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
