//! Round-trip and rejection tests for the clause-file format.

use front::{parse::Parser, prelude::*};

fn parse_str(txt: &str) -> Res<Cnf<Lit>> {
    Parser::new(txt.as_bytes()).parse()
}

fn lit(n: i64) -> Lit {
    Lit::of_int(n).expect("nonzero literal")
}

fn clause(lits: &[i64]) -> Clause<Lit> {
    Clause::new(lits.iter().map(|n| lit(*n)).collect())
}

#[test]
fn parses_clauses_and_comments() {
    let kb = parse_str(
        "# a comment\n\
         1 2 -3\n\
         \t-1  4\n\
         # another comment\n\
         2\n",
    )
    .expect("well-formed input");
    assert_eq!(kb.len(), 3);
    assert!(kb.contains(&clause(&[1, 2, -3])));
    assert!(kb.contains(&clause(&[-1, 4])));
    assert!(kb.contains(&clause(&[2])));
}

#[test]
fn duplicate_clauses_collapse() {
    let kb = parse_str("1 2\n2 1\n1 1 2\n").expect("well-formed input");
    assert_eq!(kb.len(), 1);
}

#[test]
fn rejects_blank_lines() {
    let err = parse_str("1 2\n\n3\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn rejects_zero_literals() {
    let err = parse_str("1 0 2\n").unwrap_err();
    assert!(err.to_string().contains("no polarity"));
}

#[test]
fn rejects_malformed_tokens() {
    let err = parse_str("1 two 3\n").unwrap_err();
    assert!(err.to_string().contains("expected signed integer"));
}

#[test]
fn round_trip_is_set_equal() {
    let kb = parse_str(
        "1 22 43 64\n\
         -1 -22\n\
         -22 -43\n\
         7\n\
         -5 2 -7\n",
    )
    .expect("well-formed input");

    let mut buf = Vec::new();
    front::dump::write_kb(&kb, &mut buf).expect("writing to a buffer");
    let txt = String::from_utf8(buf).expect("ascii output");
    let reparsed = parse_str(&txt).expect("own output parses back");
    assert_eq!(kb, reparsed);
}

#[test]
fn written_clauses_are_canonically_ordered() {
    let kb = parse_str("3 -1 2\n").expect("well-formed input");
    let mut buf = Vec::new();
    front::dump::write_kb(&kb, &mut buf).expect("writing to a buffer");
    assert_eq!(String::from_utf8(buf).expect("ascii output"), "-1 2 3\n");
}
