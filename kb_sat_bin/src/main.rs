//! CLI for the knowledge-base satisfiability checker.

mod conf;

use kb_sat::front::{self, prelude::*};

fn main() {
    let conf = conf::Conf::new();

    // Keep this first so that logging is available ASAP.
    simplelog::SimpleLogger::init(conf.log_level, simplelog::Config::default())
        .expect("fatal error during logger initialization");

    match run(&conf) {
        Ok(()) => std::process::exit(0),
        Err(errors) => {
            eprintln!("|===| Error(s):");
            for (idx, error) in errors.iter().enumerate() {
                if idx > 0 {
                    eprintln!("| ")
                }
                for e in error.iter() {
                    let e = e.to_string();
                    for (idx, line) in e.lines().enumerate() {
                        if idx == 0 {
                            eprint!("| - ")
                        } else {
                            eprint!("|   ")
                        }
                        eprintln!("{}", line)
                    }
                }
            }
            eprintln!("|===|");
            std::process::exit(2)
        }
    }
}

fn run(conf: &conf::Conf) -> Result<(), Vec<err::Error>> {
    let cnf = load(&conf.file).map_err(|e| vec![e])?;
    log::debug!("parsed {} clause(s)", cnf.len());

    if !conf.test_literals.is_empty() {
        return test_literals(&cnf, &conf.test_literals);
    }

    let mut cnf = cnf;
    for lit in &conf.sat_literals {
        log::info!("appending unit clause ({})", lit);
        cnf = cnf.with_unit(*lit);
    }

    let original = cnf.clone();
    match solve(cnf) {
        Outcome::Sat(model) => {
            if conf.check_models {
                check_model(&original, &model).map_err(|e| vec![e])?;
            }
            if conf.print_literals {
                let lits: Vec<String> = sorted_model(&model)
                    .iter()
                    .map(|lit| lit.to_string())
                    .collect();
                println!("{}", lits.join(" "));
            } else {
                println!("SAT");
            }
        }
        Outcome::Unsat => println!("UNSAT"),
    }
    Ok(())
}

fn load(file: &str) -> Res<Cnf<Lit>> {
    use front::parse::Parser;
    if file == "-" {
        Parser::new(std::io::stdin()).parse()
    } else {
        Parser::open_file(file)?.parse()
    }
}

/// Runs one entailment query per literal; the queries are independent,
/// so they go through `rayon`.
fn test_literals(cnf: &Cnf<Lit>, lits: &[Lit]) -> Result<(), Vec<err::Error>> {
    use rayon::prelude::*;

    let verdicts: Vec<(Lit, Entailment)> = lits
        .par_iter()
        .map(|lit| (*lit, entailment(cnf, *lit)))
        .collect();

    for (lit, verdict) in verdicts {
        let word = match verdict {
            Entailment::ForcedTrue => "TRUE",
            Entailment::ForcedFalse => "FALSE",
            Entailment::Unconstrained => "UNKNOWN",
            Entailment::Inconsistent => "INCONSISTENT",
        };
        if lits.len() == 1 {
            println!("{}", word)
        } else {
            println!("{} {}", lit, word)
        }
    }
    Ok(())
}

/// Checks a model against the clauses it came from: no complementary
/// pair, and every clause directly satisfied.
fn check_model(cnf: &Cnf<Lit>, model: &Γ<Lit>) -> Res<()> {
    for lit in model {
        let n_lit = lit.ref_negate();
        if model.contains(&n_lit) {
            return Err(format!(
                "inconsistent model contains both {} and {}",
                lit, n_lit
            )
            .into());
        }
    }
    for clause in cnf.iter() {
        if !clause.iter().any(|lit| model.contains(lit)) {
            return Err(format!("model does not satisfy clause `{}`", clause).into());
        }
    }
    log::info!("model checked against {} clause(s)", cnf.len());
    Ok(())
}
