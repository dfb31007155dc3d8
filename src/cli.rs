// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::models::Periodicity;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn periodicity_arg() -> Arg {
    Arg::new("periodicity")
        .long("periodicity")
        .short('p')
        .value_parser(Periodicity::TAGS)
        .default_value("one_time")
        .help("How often the amount recurs")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .short('d')
        .required(true)
        .help("YYYY-MM-DD")
}

fn money_arg(name: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .default_value(default)
        .help(help)
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .short('a')
        .required(true)
        .allow_negative_numbers(true)
}

fn cost_arg() -> Arg {
    Arg::new("cost")
        .long("cost")
        .required(true)
        .allow_negative_numbers(true)
}

fn term_arg() -> Arg {
    Arg::new("term")
        .long("term")
        .value_parser(value_parser!(u32))
        .default_value("60")
        .help("Number of months")
}

pub fn build_cli() -> Command {
    Command::new("lifeplan")
        .about("Plan family expenses across life stages, run projections, and export reports")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the data store"))
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("category").long("category").short('c').required(true))
                        .arg(amount_arg())
                        .arg(periodicity_arg())
                        .arg(date_arg())
                        .arg(
                            Arg::new("stage")
                                .long("stage")
                                .short('s')
                                .required(true)
                                .help("Life stage the expense belongs to"),
                        )
                        .arg(Arg::new("origin").long("origin").default_value("general")),
                )
                .subcommand(json_flags(
                    Command::new("list").arg(Arg::new("stage").long("stage").short('s')),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Record and list incomes")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("type").long("type").short('t').required(true))
                        .arg(amount_arg())
                        .arg(periodicity_arg())
                        .arg(date_arg())
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete every stored expense and income")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm deletion"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated reports")
                .subcommand(json_flags(
                    Command::new("stages").about("Totals per life stage and for the whole plan"),
                ))
                .subcommand(json_flags(
                    Command::new("detail").about("Every expense with its stage"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Amounts summed per category"),
                )),
        )
        .subcommand(
            Command::new("simulate")
                .about("Investment and schedule projections")
                .subcommand(json_flags(
                    Command::new("invest")
                        .arg(money_arg("initial", "Initial balance", "10000"))
                        .arg(money_arg("monthly", "Monthly contribution", "2000"))
                        .arg(money_arg("rate", "Annual rate in percent", "6"))
                        .arg(money_arg("compare", "Comparison annual rate in percent", "12"))
                        .arg(term_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("schedule")
                        .arg(money_arg("expense-start", "Expenses in the first month", "10000"))
                        .arg(money_arg("expense-end", "Expenses in the last month", "60000"))
                        .arg(money_arg("income-start", "Income in the first month", "15000"))
                        .arg(money_arg("income-end", "Income in the last month", "70000"))
                        .arg(term_arg()),
                )),
        )
        .subcommand(
            Command::new("hours")
                .about("Check a daily time allocation fits in 24 hours")
                .arg(
                    Arg::new("role")
                        .long("role")
                        .short('r')
                        .action(ArgAction::Append)
                        .required(true)
                        .help("ROLE=HOURS, repeatable"),
                ),
        )
        .subcommand(
            Command::new("extras")
                .about("Quick calculators for household costs")
                .subcommand(
                    Command::new("support")
                        .about("Total of family support amounts")
                        .arg(Arg::new("amounts").required(true).help("Comma separated")),
                )
                .subcommand(
                    Command::new("home")
                        .about("Annual cost of a household expense")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(amount_arg())
                        .arg(periodicity_arg()),
                )
                .subcommand(
                    Command::new("service")
                        .about("Annual cost of a service subscription")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(amount_arg())
                        .arg(periodicity_arg()),
                )
                .subcommand(
                    Command::new("baby")
                        .about("Annual cost of a baby item bought several times per period")
                        .arg(Arg::new("item").long("item").required(true))
                        .arg(cost_arg())
                        .arg(periodicity_arg())
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_parser(value_parser!(u32))
                                .default_value("1"),
                        ),
                )
                .subcommand(
                    Command::new("hospital")
                        .about("Record a hospital or postpartum cost")
                        .arg(Arg::new("item").long("item").required(true))
                        .arg(cost_arg())
                        .arg(date_arg()),
                )
                .subcommand(
                    Command::new("event")
                        .about("Record a documentation or event cost")
                        .arg(Arg::new("item").long("item").required(true))
                        .arg(cost_arg())
                        .arg(date_arg()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write stored data to files")
                .subcommand(
                    Command::new("expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").short('o').required(true)),
                )
                .subcommand(
                    Command::new("summary")
                        .about("Paginated text summary of totals per category")
                        .arg(Arg::new("out").long("out").short('o').required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Find stored expenses the plan ignores"))
        .subcommand(
            Command::new("config")
                .about("Display settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-currency").arg(Arg::new("currency").required(true)),
                ),
        )
}
