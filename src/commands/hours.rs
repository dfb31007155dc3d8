// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::timebudget::{Allocation, breakdown};
use crate::utils::parse_role_hours;
use anyhow::Result;

pub fn allocation_from_args(m: &clap::ArgMatches) -> Result<Allocation> {
    m.get_many::<String>("role")
        .unwrap_or_default()
        .map(|s| parse_role_hours(s))
        .collect()
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let allocation = allocation_from_args(m)?;
    println!("{}", breakdown(&allocation)?);
    Ok(())
}
