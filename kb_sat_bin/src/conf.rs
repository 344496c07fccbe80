//! Configuration stuff.

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

use kb_sat::front::prelude::*;

pub struct Conf {
    pub file: String,
    pub test_literals: Vec<Lit>,
    pub sat_literals: Vec<Lit>,
    pub print_literals: bool,
    pub check_models: bool,
    pub log_level: LevelFilter,
}

impl Conf {
    fn validate_bool(s: &str) -> Result<bool, String> {
        match s {
            "on" | "true" | "On" | "True" => Ok(true),
            "off" | "false" | "Off" | "False" => Ok(false),
            _ => Err(format!("expected boolean `on|true|off|false`, got `{}`", s)),
        }
    }
    fn validate_lit(s: &str) -> Result<i64, String> {
        match s.parse::<i64>() {
            Ok(0) => Err("literal `0` has no polarity".into()),
            Ok(n) => Ok(n),
            Err(_) => Err(format!("expected nonzero integer, got `{}`", s)),
        }
    }

    pub fn new() -> Self {
        use clap::{crate_authors, crate_description, crate_version};
        let matches = Command::new("kb_sat")
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .arg(
                Arg::new("VERB")
                    .short('v')
                    .action(ArgAction::Count)
                    .help("Increases verbosity"),
            )
            .arg(
                Arg::new("TEST")
                    .value_name("LIT")
                    .long("test-literal")
                    .short('t')
                    .num_args(1..)
                    .allow_hyphen_values(true)
                    .value_parser(Conf::validate_lit)
                    .conflicts_with_all(["SAT", "PRINT"])
                    .help(
                        "Reports whether the knowledge base forces each literal \
                         true (TRUE), false (FALSE), or neither (UNKNOWN)",
                    ),
            )
            .arg(
                Arg::new("SAT")
                    .value_name("LIT")
                    .long("sat-literal")
                    .short('s')
                    .num_args(1..)
                    .allow_hyphen_values(true)
                    .value_parser(Conf::validate_lit)
                    .help("Appends the given literals to the knowledge base as unit clauses"),
            )
            .arg(
                Arg::new("PRINT")
                    .long("print-literals")
                    .short('l')
                    .action(ArgAction::SetTrue)
                    .help("On SAT, prints the satisfying assignment instead of `SAT`"),
            )
            .arg(
                Arg::new("CHECK")
                    .value_name("on|true|off|false")
                    .long("check")
                    .num_args(1)
                    .value_parser(Conf::validate_bool)
                    .default_value("off")
                    .help("(De)activates model checking, [on|off|true|false]"),
            )
            .arg(
                Arg::new("FILE")
                    .required(true)
                    .help("Input clause file, `-` for stdin"),
            )
            .get_matches();

        let log_level = match matches.get_count("VERB") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        let lits_of = |id: &str| -> Vec<Lit> {
            matches
                .get_many::<i64>(id)
                .map(|ns| {
                    ns.map(|n| Lit::of_int(*n).expect("validated as nonzero"))
                        .collect()
                })
                .unwrap_or_default()
        };
        let test_literals = lits_of("TEST");
        let sat_literals = lits_of("SAT");

        let print_literals = matches.get_flag("PRINT");
        let check_models = *matches
            .get_one("CHECK")
            .expect("arguments with default value cannot be absent");

        let file = matches
            .get_one::<String>("FILE")
            .expect("unreachable: `FILE` argument is mandatory")
            .clone();

        Self {
            file,
            test_literals,
            sat_literals,
            print_literals,
            check_models,
            log_level,
        }
    }
}
