// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use lifeplan::commands::simulate;
use lifeplan::config::{InvestmentParameters, ScheduleParameters};
use lifeplan::{cli, error::PlanError};

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["lifeplan", "simulate"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("simulate", sim_m)) = matches.subcommand() else {
        panic!("no simulate subcommand");
    };
    let Some((_, sub)) = sim_m.subcommand() else {
        panic!("no simulate action");
    };
    sub.clone()
}

#[test]
fn defaults_match_configuration() {
    let (params, compare) = simulate::investment_params(&sub_matches(&["invest"])).unwrap();
    assert_eq!(params, InvestmentParameters::default());
    assert!((compare - 0.12).abs() < 1e-12);
    assert_eq!(
        simulate::schedule_params(&sub_matches(&["schedule"])),
        ScheduleParameters::default()
    );
}

#[test]
fn rates_are_read_as_percent() {
    let (params, _) = simulate::investment_params(&sub_matches(&[
        "invest", "--rate", "8", "--term", "24", "--initial", "0",
    ]))
    .unwrap();
    assert!((params.annual_rate - 0.08).abs() < 1e-12);
    assert_eq!(params.term_months, 24);
    assert_eq!(params.initial, 0.0);
}

#[test]
fn invalid_rate_is_rejected_before_projection() {
    let err = simulate::investment_params(&sub_matches(&["invest", "--rate", "-150"])).unwrap_err();
    assert_eq!(err.downcast_ref::<PlanError>(), Some(&PlanError::InvalidRate(-1.5)));
}

#[test]
fn comparison_curve_runs_alongside() {
    let (params, compare) = simulate::investment_params(&sub_matches(&["invest", "--term", "12"])).unwrap();
    let rows = simulate::investment_rows(&params, compare).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].month, 1);
    assert!(rows.iter().all(|r| r.comparison > r.balance));
}
