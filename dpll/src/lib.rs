//! Knowledge-base satisfiability: clause store, recursive DPLL search,
//! 3-SAT normalization and literal entailment.

#![allow(mixed_script_confusables)]

/// Imports this crate's prelude.
///
/// Pass `pub` when calling this macro to make the imports public.
#[macro_export]
macro_rules! prelude {
    {} => { use $crate::prelude::*; };
    { pub } => { pub use $crate::prelude::*; };
}

/// Common traits and types defined by this crate.
///
/// See also the [`prelude!`] macro.
pub mod prelude {
    base::prelude! { pub }

    pub use crate::{
        entail::{entailment, Entailment},
        solve, sorted_model,
        solver::Solver,
        three_sat::to_three_sat,
        Clause, Cnf, Formula, Literal, Outcome, Γ,
    };
}

prelude!();

pub mod entail;
pub mod solver;
pub mod three_sat;

/// Abstracts over the notion of literal.
///
/// The `Ord` implementation must order by variable id first, then
/// polarity with positive before negative, so that magnitude-ordered
/// views and the unit-processing order of the search are well defined.
pub trait Literal:
    Clone + std::fmt::Debug + Display + PartialEq + Eq + PartialOrd + Ord + Hash
{
    /// Variable id of this literal, always nonzero.
    fn var(&self) -> usize;
    /// True for the negative polarity.
    fn is_negated(&self) -> bool;
    /// Builds the literal over `var` with the given polarity.
    fn of_var(var: usize, negated: bool) -> Self;
    /// Negates a literal (owned version).
    fn negate(self) -> Self;
    /// Negates a literal (reference version).
    fn ref_negate(&self) -> Self;
}

/// An assignment set: a consistent set of literals, never containing a
/// literal and its negation.
pub type Γ<Lit> = Set<Lit>;

/// A disjunction of distinct literals.
///
/// Literals are kept sorted and deduplicated, so equality, ordering and
/// hashing do not depend on insertion order. An empty clause is an
/// immediate contradiction; a single literal makes a unit clause.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause<Lit> {
    lits: Vec<Lit>,
}
impl<Lit: Literal> Clause<Lit> {
    pub fn new(mut lits: Vec<Lit>) -> Self {
        lits.sort();
        lits.dedup();
        Self { lits }
    }
    pub fn empty() -> Self {
        Self { lits: vec![] }
    }
    pub fn unit(lit: Lit) -> Self {
        Self { lits: vec![lit] }
    }

    /// True if the clause contains `lit`.
    pub fn has(&self, lit: &Lit) -> bool {
        self.lits.binary_search(lit).is_ok()
    }
    /// New clause with `lit` filtered out, `self` preserved.
    pub fn without(&self, lit: &Lit) -> Self {
        Self {
            lits: self
                .lits
                .iter()
                .filter(|l| *l != lit)
                .cloned()
                .collect(),
        }
    }
}
impl<Lit: Display> Display for Clause<Lit> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (idx, lit) in self.lits.iter().enumerate() {
            if idx > 0 {
                ", ".fmt(fmt)?
            }
            lit.fmt(fmt)?
        }
        Ok(())
    }
}
impl<Lit> Deref for Clause<Lit> {
    type Target = Vec<Lit>;
    fn deref(&self) -> &Vec<Lit> {
        &self.lits
    }
}

/// A knowledge base: a set of clauses, understood as a conjunction.
///
/// Structurally equal clauses collapse. Iteration order of the backing
/// set is not stable; anything that must be reproducible goes through
/// [`Cnf::to_sorted`].
#[derive(Debug, Clone)]
pub struct Cnf<Lit> {
    clauses: Set<Clause<Lit>>,
}
impl<Lit: Literal> Cnf<Lit> {
    pub fn new(clauses: impl IntoIterator<Item = Clause<Lit>>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }
    pub fn empty() -> Self {
        Self {
            clauses: Set::new(),
        }
    }
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            clauses: Set::with_capacity(capa),
        }
    }

    /// New knowledge base extended with the unit clause `(lit)`, `self`
    /// preserved.
    pub fn with_unit(&self, lit: Lit) -> Self {
        let mut new = self.clone();
        new.insert(Clause::unit(lit));
        new
    }

    /// Greatest variable id occurring in the knowledge base, `0` when
    /// there is none.
    pub fn max_var(&self) -> usize {
        self.clauses
            .iter()
            .flat_map(|clause| clause.iter())
            .map(Literal::var)
            .max()
            .unwrap_or(0)
    }

    /// Canonically ordered view of the clauses: empty clauses first,
    /// then by literal magnitude.
    pub fn to_sorted(&self) -> Vec<Clause<Lit>> {
        let mut clauses: Vec<_> = self.clauses.iter().cloned().collect();
        clauses.sort();
        clauses
    }
}
impl<Lit: Literal> PartialEq for Cnf<Lit> {
    fn eq(&self, other: &Self) -> bool {
        self.clauses == other.clauses
    }
}
impl<Lit: Literal> Eq for Cnf<Lit> {}
impl<Lit> Deref for Cnf<Lit> {
    type Target = Set<Clause<Lit>>;
    fn deref(&self) -> &Set<Clause<Lit>> {
        &self.clauses
    }
}
impl<Lit> DerefMut for Cnf<Lit> {
    fn deref_mut(&mut self) -> &mut Set<Clause<Lit>> {
        &mut self.clauses
    }
}
impl<Lit: Literal> std::iter::FromIterator<Clause<Lit>> for Cnf<Lit> {
    fn from_iter<I: IntoIterator<Item = Clause<Lit>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Abstracts over the notion of formula.
pub trait Formula {
    /// Type of literals for this formula.
    type Lit: Literal;

    /// Transforms a formula into a CNF.
    fn into_cnf(self) -> Cnf<Self::Lit>;
}

impl<Lit: Literal> Formula for Cnf<Lit> {
    type Lit = Lit;
    fn into_cnf(self) -> Self {
        self
    }
}

/// Outcome of a satisfiability decision.
///
/// There is no third state: the search is total for finite input.
#[derive(Debug, Clone)]
pub enum Outcome<Lit> {
    /// Satisfiable, with the assignment the search produced. Variables
    /// absent from the assignment are don't-care.
    Sat(Γ<Lit>),
    /// No assignment satisfies the knowledge base.
    Unsat,
}
impl<Lit> Outcome<Lit> {
    /// Sat constructor.
    pub fn new_sat(γ: Γ<Lit>) -> Self {
        Self::Sat(γ)
    }
    /// Unsat constructor.
    pub fn new_unsat() -> Self {
        Self::Unsat
    }

    pub fn is_sat(&self) -> bool {
        matches!(self, Self::Sat(_))
    }
    pub fn is_unsat(&self) -> bool {
        matches!(self, Self::Unsat)
    }

    /// Map over either the [`Self::Sat`] or [`Self::Unsat`] variant.
    pub fn map<T>(
        self,
        sat_action: impl FnOnce(Γ<Lit>) -> T,
        unsat_action: impl FnOnce() -> T,
    ) -> T {
        match self {
            Self::Sat(γ) => sat_action(γ),
            Self::Unsat => unsat_action(),
        }
    }

    /// The model, if satisfiable.
    pub fn into_model(self) -> Option<Γ<Lit>> {
        match self {
            Self::Sat(γ) => Some(γ),
            Self::Unsat => None,
        }
    }
}

/// Decides satisfiability of a formula.
pub fn solve<F: Formula>(f: F) -> Outcome<F::Lit> {
    Solver::new(f).solve()
}

/// Magnitude-ordered view of an assignment set.
pub fn sorted_model<Lit: Literal>(model: &Γ<Lit>) -> Vec<Lit> {
    let mut lits: Vec<_> = model.iter().cloned().collect();
    lits.sort();
    lits
}
