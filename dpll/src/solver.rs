//! Recursive DPLL with unit propagation and pure-literal elimination.
//!
//! The solver state is a pair of an assignment set `γ` and a knowledge
//! base `δ`. Every step derives a fresh pair by value, so backtracking
//! needs no undo: the parent's state stays valid while a branch runs.
//!
//! Between calls the state satisfies one invariant: `δ` holds no empty
//! and no unit clause, and no variable of `γ` occurs anywhere in `δ`,
//! since every literal entering `γ` is unit-propagated on the spot.

prelude!();

macro_rules! raise {
	{ sat $γ:expr } => { return Err(Outcome::Sat($γ)) };
	{ unsat } => { return Err(Outcome::Unsat) };
}

/// Early-exit protocol: `Err` carries a final outcome up the recursion.
pub type Res<T, Lit> = Result<T, Outcome<Lit>>;

/// DPLL solver state.
#[derive(Debug, Clone)]
pub struct Solver<Lit: Literal> {
    /// Environment, *i.e.* a set of literals.
    γ: Γ<Lit>,
    /// CNF we're working on.
    δ: Cnf<Lit>,
}

impl<Lit: Literal> Deref for Solver<Lit> {
    type Target = Γ<Lit>;
    fn deref(&self) -> &Γ<Lit> {
        &self.γ
    }
}

impl<Lit: Literal> Solver<Lit> {
    /// Constructs a solver from a formula.
    pub fn new<F>(f: F) -> Self
    where
        F: Formula<Lit = Lit>,
    {
        Self {
            γ: Γ::new(),
            δ: f.into_cnf(),
        }
    }

    /// *Assume* rule: forces `lit` and unit-propagates to fixed point.
    ///
    /// Works a list of newly forced literals. Popping a literal scans
    /// every clause: clauses containing it are satisfied and dropped,
    /// its negation is removed from the rest. A clause shrunk to one
    /// literal forces that literal in turn; a clause shrunk to nothing
    /// refutes the branch. `self` is untouched either way.
    pub fn assume(&self, lit: Lit) -> Res<Self, Lit> {
        log::debug!("assume({})", lit);
        let mut new = self.clone();
        let mut units = Vec::with_capacity(7);
        if new.γ.contains(&lit.ref_negate()) {
            raise!(unsat)
        }
        if new.γ.insert(lit.clone()) {
            units.push(lit)
        }

        while let Some(lit) = units.pop() {
            if new.γ.contains(&lit.ref_negate()) {
                raise!(unsat)
            }
            let n_lit = lit.ref_negate();
            let mut δ = Cnf::with_capacity(new.δ.len());

            for clause in new.δ.iter() {
                if clause.has(&lit) {
                    // Satisfied, drop it.
                    continue;
                }
                if !clause.has(&n_lit) {
                    δ.insert(clause.clone());
                    continue;
                }
                let shrunk = clause.without(&n_lit);
                match shrunk.len() {
                    0 => raise!(unsat),
                    1 => {
                        let forced = shrunk[0].clone();
                        log::trace!("forced({})", forced);
                        if new.γ.contains(&forced.ref_negate()) {
                            raise!(unsat)
                        }
                        if new.γ.insert(forced.clone()) {
                            units.push(forced)
                        }
                    }
                    _ => {
                        δ.insert(shrunk);
                    }
                }
            }
            new.δ = δ;
        }
        Ok(new)
    }

    /// *Pure literal* rule: assigns every variable occurring in a single
    /// polarity and drops the clauses it satisfies.
    ///
    /// One pass over `δ` indexes, per candidate pure literal, the
    /// clauses containing it; observing the opposite polarity discards
    /// the candidate. Only whole clauses are ever removed, never single
    /// literals, so this step cannot create a unit or empty clause and
    /// never re-enters propagation.
    pub fn pure_literals(&self) -> Self {
        let mut impure: Set<usize> = Set::new();
        let mut pure: Map<Lit, Set<Clause<Lit>>> = Map::new();
        for clause in self.δ.iter() {
            for lit in clause.iter() {
                if impure.contains(&lit.var()) {
                    continue;
                }
                if pure.remove(&lit.ref_negate()).is_some() {
                    impure.insert(lit.var());
                    continue;
                }
                pure.entry(lit.clone())
                    .or_insert_with(Set::new)
                    .insert(clause.clone());
            }
        }

        if pure.is_empty() {
            return self.clone();
        }
        let mut new = self.clone();
        for (lit, clauses) in pure {
            log::debug!("pure({})", lit);
            let _is_new = new.γ.insert(lit);
            debug_assert!(_is_new);
            for clause in clauses {
                new.δ.remove(&clause);
            }
        }
        new
    }

    /// Normalizes a raw knowledge base so that [`Self::search`]'s
    /// invariant holds.
    ///
    /// An empty clause refutes immediately. Unit clauses move their
    /// literal to an initial forced set (a variable showing up there in
    /// both polarities refutes too), and each forced literal not already
    /// subsumed is propagated, in ascending variable order so conflicts
    /// surface identically on every run.
    pub fn normalize(self) -> Res<Self, Lit> {
        let Self { γ, δ } = self;
        debug_assert!(γ.is_empty());
        let mut units: Set<Lit> = Set::new();
        let mut kept = Cnf::with_capacity(δ.len());
        for clause in δ.iter() {
            match clause.len() {
                0 => {
                    log::debug!("empty clause in input");
                    raise!(unsat)
                }
                1 => {
                    let lit = clause[0].clone();
                    if units.contains(&lit.ref_negate()) {
                        raise!(unsat)
                    }
                    units.insert(lit);
                }
                _ => {
                    kept.insert(clause.clone());
                }
            }
        }

        let mut units: Vec<Lit> = units.into_iter().collect();
        units.sort();

        let mut new = Self { γ, δ: kept };
        for lit in units {
            if new.γ.contains(&lit) {
                continue;
            }
            if new.γ.contains(&lit.ref_negate()) {
                raise!(unsat)
            }
            new = new.assume(lit)?;
        }
        Ok(new)
    }

    /// Branching literal: the first literal of the first clause of the
    /// canonically ordered view.
    ///
    /// The backing clause set has no stable iteration order, so the
    /// minimum clause under the canonical clause order is used instead.
    /// The choice is fixed across runs and hasher seeds; it only affects
    /// which model comes back, never whether one exists.
    fn branch_lit(&self) -> Lit {
        match self.δ.iter().min().and_then(|clause| clause.first()) {
            Some(lit) => lit.clone(),
            None => panic!("illegal empty clause in branching step"),
        }
    }

    /// Recursive search, assuming the normalization invariant.
    ///
    /// Applies the pure-literal rule, then declares SAT on an empty
    /// knowledge base, or branches on [`Self::branch_lit`]: positive
    /// polarity first, short-circuiting on SAT without exploring the
    /// negative branch.
    pub fn search(&self) -> Res<Empty, Lit> {
        let new = self.pure_literals();
        if new.δ.is_empty() {
            raise!(sat new.γ)
        }

        let lit = new.branch_lit();
        log::debug!("branch({})", lit);
        match new.assume(lit.clone()).and_then(|new| new.search()) {
            Ok(empty) => match empty {},
            Err(out) => {
                if out.is_unsat() {
                    log::trace!("backtracking {}", lit)
                } else {
                    return Err(out);
                }
            }
        }

        let new = new.assume(lit.negate())?;
        let empty = new.search()?;
        match empty {}
    }

    /// Full decision: normalization, then recursive search.
    pub fn solve(self) -> Outcome<Lit> {
        match self.normalize().and_then(|new| new.search()) {
            Err(out) => out,
            Ok(empty) => match empty {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prelude::*, tlit::*};

    fn solver(clauses: &[&[isize]]) -> Solver<TLit> {
        Solver::new(cnf(clauses))
    }

    fn model_of(outcome: Outcome<TLit>) -> Vec<TLit> {
        sorted_model(&outcome.into_model().expect("expected SAT"))
    }

    /// Every clause must hold a literal of the model directly.
    fn assert_satisfies(kb: &Cnf<TLit>, model: &Γ<TLit>) {
        for lit in model {
            assert!(
                !model.contains(&lit.ref_negate()),
                "inconsistent model: contains both {} and its negation",
                lit
            );
        }
        for clause in kb.iter() {
            assert!(
                clause.iter().any(|lit| model.contains(lit)),
                "clause `{}` not satisfied",
                clause
            );
        }
    }

    #[test]
    fn empty_kb_is_sat() {
        assert!(solve(Cnf::<TLit>::empty()).is_sat());
    }

    #[test]
    fn empty_clause_is_unsat() {
        let mut kb = cnf(&[&[1, 2]]);
        kb.insert(Clause::empty());
        assert!(solve(kb).is_unsat());
    }

    #[test]
    fn conflicting_units_are_unsat() {
        assert!(solve(cnf(&[&[1], &[-1]])).is_unsat());
    }

    #[test]
    fn assume_reaches_fixed_point() {
        // Forcing 1 cascades through (−1 2) and (−2 3).
        let state = solver(&[&[-1, 2], &[-2, 3], &[3, 4]]);
        let new = state.assume(lit(1)).expect("no contradiction");
        for n in &[1, 2, 3] {
            assert!(new.contains(&lit(*n)));
        }
        assert!(new.δ.is_empty());
    }

    #[test]
    fn assume_detects_contradiction() {
        let state = solver(&[&[-1, 2], &[-1, -2]]);
        let res = state.assume(lit(1));
        assert!(matches!(res, Err(Outcome::Unsat)));
        // The caller's state is untouched.
        assert_eq!(state.δ.len(), 2);
        assert!(state.γ.is_empty());
    }

    #[test]
    fn propagated_literals_leave_the_kb() {
        let state = solver(&[&[-1, 2, 3], &[4, 5]]);
        let new = state.assume(lit(1)).expect("no contradiction");
        assert!(new.contains(&lit(1)));
        assert_eq!(new.δ.len(), 2);
        assert!(new.δ.contains(&clause(&[2, 3])));
        assert!(new.δ.contains(&clause(&[4, 5])));
    }

    #[test]
    fn pure_literal_shortcut() {
        // 1 occurs only positively: the whole KB dissolves without
        // branching, and 2 and 3 come along as pure literals too.
        let outcome = solve(cnf(&[&[1, 2], &[1, 3]]));
        assert_eq!(model_of(outcome), vec![lit(1), lit(2), lit(3)]);
    }

    #[test]
    fn pure_literal_pass_removes_whole_clauses_only() {
        let state = solver(&[&[1, 2], &[-2, 3], &[-3, 2]]);
        let new = state.pure_literals();
        // 1 is pure, 2 and 3 are not.
        assert!(new.contains(&lit(1)));
        assert!(!new.contains(&lit(2)));
        assert!(!new.contains(&lit(3)));
        assert_eq!(new.δ.len(), 2);
        for clause in new.δ.iter() {
            assert!(clause.len() >= 2);
        }
    }

    #[test]
    fn normalize_propagates_initial_units() {
        let state = solver(&[&[2], &[-2, 3], &[1, 4]]);
        let new = state.normalize().expect("satisfiable so far");
        assert!(new.contains(&lit(2)));
        assert!(new.contains(&lit(3)));
        assert_eq!(new.δ.len(), 1);
    }

    #[test]
    fn normalize_rejects_unit_conflicts() {
        let res = solver(&[&[3], &[1, 2], &[-3]]).normalize();
        assert!(matches!(res, Err(Outcome::Unsat)));
    }

    #[test]
    fn branching_is_deterministic() {
        let state = solver(&[&[4, 5], &[2, 3], &[-2, 5]]);
        // Minimum clause is (2 3), its minimum literal is 2.
        assert_eq!(state.branch_lit(), lit(2));
    }

    #[test]
    fn backtracking_explores_the_negative_branch() {
        // Branching starts at 1, which forces both 3 and −3; only the
        // −1 branch survives.
        let kb = cnf(&[&[1, 2], &[-1, 3], &[-1, -3], &[-2, -3]]);
        let outcome = solve(kb.clone());
        let model = outcome.into_model().expect("expected SAT");
        assert!(model.contains(&lit(-1)));
        assert_satisfies(&kb, &model);
    }

    #[test]
    fn models_satisfy_every_original_clause() {
        let kb = cnf(&[
            &[1, 2, 3],
            &[-1, -2],
            &[-1, -3],
            &[-2, -3],
            &[2, 4],
            &[-4, -2, 1],
        ]);
        match solve(kb.clone()) {
            Outcome::Sat(model) => assert_satisfies(&kb, &model),
            Outcome::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn unsat_core_case() {
        // Complete contradiction over two variables.
        let kb = cnf(&[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]]);
        assert!(solve(kb).is_unsat());
    }
}
