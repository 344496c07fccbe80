//! Width normalization: equisatisfiable rewrite of a knowledge base so
//! that no clause holds more than three literals.

prelude!();

/// Splits every clause wider than three literals into a chain of
/// 3-literal clauses over fresh auxiliary variables.
///
/// A clause `(l₁ … lₙ)` with `n > 3` becomes `(l₁ l₂ a₁)`, then
/// `(¬aᵢ lᵢ₊₂ aᵢ₊₁)` for the middle literals, closed by
/// `(¬a_last lₙ₋₁ lₙ)`: each auxiliary says "some literal of the prefix
/// already holds". Auxiliaries are drawn from a counter seeded once
/// above [`Cnf::max_var`] and bumped monotonically, so no split can
/// collide with the input or with another split; clauses are processed
/// in canonical order, which pins the numbering. The result is
/// equisatisfiable with the input, and a knowledge base already in
/// 3-SAT form passes through unchanged.
pub fn to_three_sat<Lit: Literal>(cnf: &Cnf<Lit>) -> Cnf<Lit> {
    let mut next = cnf.max_var();
    let mut res = Cnf::with_capacity(cnf.len());

    for clause in cnf.to_sorted() {
        if clause.len() <= 3 {
            res.insert(clause);
            continue;
        }
        log::trace!("splitting clause of width {}", clause.len());

        next += 1;
        res.insert(Clause::new(vec![
            clause[0].clone(),
            clause[1].clone(),
            Lit::of_var(next, false),
        ]));

        let mut rest = &clause[2..];
        while rest.len() > 2 {
            let link = Lit::of_var(next, true);
            next += 1;
            res.insert(Clause::new(vec![
                link,
                rest[0].clone(),
                Lit::of_var(next, false),
            ]));
            rest = &rest[1..];
        }

        res.insert(Clause::new(vec![
            Lit::of_var(next, true),
            rest[0].clone(),
            rest[1].clone(),
        ]));
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prelude::*, tlit::*};

    /// Distinct auxiliary variables introduced beyond `max_var`.
    fn aux_vars(out: &Cnf<TLit>, max_var: usize) -> Set<usize> {
        out.iter()
            .flat_map(|clause| clause.iter())
            .map(Literal::var)
            .filter(|var| *var > max_var)
            .collect()
    }

    #[test]
    fn narrow_kbs_pass_through_unchanged() {
        let kb = cnf(&[&[1], &[1, -2], &[2, 3, -4]]);
        assert_eq!(to_three_sat(&kb), kb);
    }

    #[test]
    fn width_four_splits_in_two() {
        let kb = cnf(&[&[1, 2, 3, 4]]);
        let out = to_three_sat(&kb);
        assert_eq!(out.len(), 2);
        assert!(out.contains(&clause(&[1, 2, 5])));
        assert!(out.contains(&clause(&[-5, 3, 4])));
    }

    #[test]
    fn width_six_chains_the_auxiliaries() {
        let kb = cnf(&[&[1, 2, 3, 4, 5, 6]]);
        let out = to_three_sat(&kb);
        assert_eq!(out.len(), 4);
        assert!(out.contains(&clause(&[1, 2, 7])));
        assert!(out.contains(&clause(&[-7, 3, 8])));
        assert!(out.contains(&clause(&[-8, 4, 9])));
        assert!(out.contains(&clause(&[-9, 5, 6])));
    }

    #[test]
    fn arity_scaling() {
        // A clause of width k yields k − 2 clauses over k − 3 fresh
        // variables, all above the previous maximum.
        for k in 4..10 {
            let wide: Vec<isize> = (1..=k).collect();
            let kb = cnf(&[&wide]);
            let out = to_three_sat(&kb);
            assert_eq!(out.len(), (k - 2) as usize);
            assert!(out.iter().all(|clause| clause.len() <= 3));
            assert_eq!(aux_vars(&out, k as usize).len(), (k - 3) as usize);
        }
    }

    #[test]
    fn splits_share_the_counter() {
        let kb = cnf(&[&[1, 2, 3, 4], &[5, 6, 7, 8, 9]]);
        let out = to_three_sat(&kb);
        // 2 + 3 clauses, 1 + 2 fresh variables, no collision.
        assert_eq!(out.len(), 5);
        assert_eq!(aux_vars(&out, 9), vec![10, 11, 12].into_iter().collect());
    }

    #[test]
    fn transform_preserves_satisfiability() {
        let sat_kb = cnf(&[&[1, 2, 3, 4, 5], &[-1, -2], &[-3]]);
        assert!(solve(sat_kb.clone()).is_sat());
        assert!(solve(to_three_sat(&sat_kb)).is_sat());

        let unsat_kb = cnf(&[&[1, 2, 3, 4], &[-1], &[-2], &[-3], &[-4]]);
        assert!(solve(unsat_kb.clone()).is_unsat());
        assert!(solve(to_three_sat(&unsat_kb)).is_unsat());
    }

    #[test]
    fn transformed_models_project_onto_the_original() {
        // Dropping the auxiliaries from a model of the transform leaves
        // a model of the original: each original clause keeps a
        // directly satisfying literal.
        let kb = cnf(&[&[1, 2, 3, 4, 5, 6], &[-2, -3], &[-1]]);
        let model = solve(to_three_sat(&kb))
            .into_model()
            .expect("expected SAT");
        for clause in kb.iter() {
            assert!(
                clause.iter().any(|lit| model.contains(lit)),
                "clause `{}` not satisfied after projection",
                clause
            );
        }
    }
}
