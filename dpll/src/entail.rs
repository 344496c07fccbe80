//! Literal entailment queries layered on the satisfiability decision.

prelude!();

/// Verdict of an entailment query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entailment {
    /// Every model of the knowledge base makes the literal true.
    ForcedTrue,
    /// Every model of the knowledge base makes the literal false.
    ForcedFalse,
    /// The knowledge base admits models of either polarity.
    Unconstrained,
    /// The knowledge base itself is unsatisfiable: it refutes both
    /// polarities, so neither is meaningfully forced.
    Inconsistent,
}
impl Entailment {
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::ForcedTrue | Self::ForcedFalse)
    }
}
impl Display for Entailment {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ForcedTrue => "forced true".fmt(fmt),
            Self::ForcedFalse => "forced false".fmt(fmt),
            Self::Unconstrained => "unconstrained".fmt(fmt),
            Self::Inconsistent => "inconsistent".fmt(fmt),
        }
    }
}

/// Decides whether the knowledge base forces `lit` true, forces it
/// false, or leaves it unconstrained.
///
/// Two independent satisfiability queries, each on a value-level copy
/// of the base clauses extended with a unit clause: one for `lit`, one
/// for its negation. Refuting one polarity forces the other; refuting
/// both means the *base* is unsatisfiable, reported as
/// [`Entailment::Inconsistent`] rather than conflated with a forced
/// value.
pub fn entailment<Lit: Literal>(cnf: &Cnf<Lit>, lit: Lit) -> Entailment {
    let n_lit = lit.ref_negate();
    log::debug!("entailment({})", lit);
    let positive = crate::solve(cnf.with_unit(lit));
    let negative = crate::solve(cnf.with_unit(n_lit));
    match (positive.is_sat(), negative.is_sat()) {
        (true, true) => Entailment::Unconstrained,
        (true, false) => Entailment::ForcedTrue,
        (false, true) => Entailment::ForcedFalse,
        (false, false) => Entailment::Inconsistent,
    }
}
