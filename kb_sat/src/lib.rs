//! Knowledge-base satisfiability for rule-based puzzle deduction.
//!
//! Re-exports the workspace crates: [`dpll`] holds the solver, the
//! 3-SAT normalizer and the entailment tester, [`front`] the clause
//! file format.

pub use base;
pub use dpll;
pub use front;
