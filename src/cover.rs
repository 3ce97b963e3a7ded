//! Selection of a minimal set of prime implicants covering all required values.

use crate::*;

use delegate::delegate;
use itertools::Itertools;
use log::debug;
use std::collections::BTreeSet;
use std::slice::Iter;

/// A list of implicants covering all required values of a function.
///
/// The first implicants are essential: they are the only prime implicant covering at least one required value.
/// The remaining (supplemental) implicants are selected by the minimum cover search.
#[derive(Clone, Debug, Default)]
pub struct Cover {
    terms: Vec<Term>,
    essential: usize,
}

impl Cover {
    delegate! {
        to self.terms {
            /// Get the number of implicants in this cover
            pub fn len(&self) -> usize;
            /// Return whether the cover is empty (the function is constant)
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> Iter<'_, Term>;
        }
    }

    /// All implicants of the cover, essential ones first
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn essential(&self) -> &[Term] {
        &self.terms[..self.essential]
    }

    pub fn supplemental(&self) -> &[Term] {
        &self.terms[self.essential..]
    }

    /// Test if a value is covered by at least one implicant of the cover
    pub fn covers(&self, value: u32) -> bool {
        self.terms.iter().any(|t| t.covers(value))
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Term;
    type IntoIter = Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Select a minimal cover of the required values from the list of prime implicants.
///
/// Essential prime implicants are selected first. If some required values are not covered by
/// essential implicants, all subsets of the other implicants covering at least one of these values
/// are enumerated by increasing size. Subsets of the same size are enumerated in lexicographic order
/// of the positions of their implicants in the list of primes: the first subset covering all
/// remaining values is selected.
///
/// Fails if the number of candidates exceeds the limit, or if the primes can not cover all required values.
pub fn solve(problem: &Problem, primes: &[Term], limits: &Limits) -> Result<Cover, QmError> {
    let mut selected: Vec<usize> = Vec::new();
    let mut satisfied: BTreeSet<u32> = BTreeSet::new();

    for value in problem.required() {
        let mut covering = primes.iter().positions(|t| t.covers(value));
        if let (Some(idx), None) = (covering.next(), covering.next()) {
            if selected.contains(&idx) {
                continue;
            }
            selected.push(idx);
            satisfied.extend(
                primes[idx]
                    .covered()
                    .filter(|v| !problem.is_dont_care(*v)),
            );
        }
    }
    let essential = selected.len();

    let remaining: Vec<u32> = problem
        .required()
        .filter(|v| !satisfied.contains(v))
        .collect();
    debug!(
        "{} essential prime implicants out of {}, {} values left",
        essential,
        primes.len(),
        remaining.len()
    );

    if !remaining.is_empty() {
        let candidates: Vec<usize> = (0..primes.len())
            .filter(|idx| !selected.contains(idx))
            .filter(|idx| remaining.iter().any(|v| primes[*idx].covers(*v)))
            .collect();
        if candidates.len() > limits.max_candidates {
            return Err(QmError::SearchLimit {
                candidates: candidates.len(),
                limit: limits.max_candidates,
            });
        }

        let subset = smallest_cover(primes, &candidates, &remaining).ok_or_else(|| {
            QmError::InternalInconsistency(format!(
                "{} candidate implicants can not cover {} values",
                candidates.len(),
                remaining.len()
            ))
        })?;
        debug!(
            "selected {} of {} candidate implicants",
            subset.len(),
            candidates.len()
        );
        selected.extend(subset);
    }

    Ok(Cover {
        terms: selected.into_iter().map(|idx| primes[idx].clone()).collect(),
        essential,
    })
}

/// Find the first smallest subset of candidates covering all remaining values.
///
/// The full set is never tested: each remaining value is covered by at least two candidates,
/// any of them can thus be removed from a full cover.
fn smallest_cover(primes: &[Term], candidates: &[usize], remaining: &[u32]) -> Option<Vec<usize>> {
    (1..candidates.len())
        .flat_map(|size| candidates.iter().copied().combinations(size))
        .find(|subset| {
            remaining
                .iter()
                .all(|v| subset.iter().any(|idx| primes[*idx].covers(*v)))
        })
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn patterns(terms: &[Term]) -> Vec<String> {
        terms.iter().map(|t| t.pattern().to_string()).collect()
    }

    #[test]
    fn essential_only() -> Result<(), QmError> {
        let problem = Problem::new(["A", "B"], [1, 2, 3], [], Mode::Minterm)?;
        let primes = tabulate(&problem).into_primes();
        let cover = solve(&problem, &primes, &Limits::default())?;

        assert_eq!(patterns(cover.essential()), vec!["-1", "1-"]);
        assert!(cover.supplemental().is_empty());
        Ok(())
    }

    #[test]
    fn essential_and_supplemental() -> Result<(), QmError> {
        let problem = Problem::new(
            ["A", "B", "C", "D"],
            [4, 8, 10, 11, 12, 15],
            [9, 14],
            Mode::Minterm,
        )?;
        let primes = tabulate(&problem).into_primes();
        let cover = solve(&problem, &primes, &Limits::default())?;

        assert_eq!(patterns(cover.essential()), vec!["-100", "1-1-"]);
        assert_eq!(cover.supplemental().len(), 1);
        assert!(cover.supplemental()[0].covers(8));
        assert_eq!(cover.len(), 3);
        for v in problem.required() {
            assert!(cover.covers(v));
        }
        Ok(())
    }

    #[test]
    fn cyclic_cover() -> Result<(), QmError> {
        let problem = Problem::new(["A", "B", "C"], [0, 1, 2, 5, 6, 7], [], Mode::Minterm)?;
        let primes = tabulate(&problem).into_primes();
        let cover = solve(&problem, &primes, &Limits::default())?;

        // No essential implicant, first subset of size 3 in lexicographic order
        assert!(cover.essential().is_empty());
        assert_eq!(patterns(cover.supplemental()), vec!["00-", "-10", "1-1"]);

        // The search is deterministic
        let again = solve(&problem, &primes, &Limits::default())?;
        assert_eq!(patterns(again.terms()), patterns(cover.terms()));
        Ok(())
    }

    #[test]
    fn search_limit() -> Result<(), QmError> {
        let problem = Problem::new(["A", "B", "C"], [0, 1, 2, 5, 6, 7], [], Mode::Minterm)?;
        let primes = tabulate(&problem).into_primes();
        let limits = Limits::default().with_max_candidates(5);
        assert_eq!(
            solve(&problem, &primes, &limits).unwrap_err(),
            QmError::SearchLimit {
                candidates: 6,
                limit: 5
            }
        );
        Ok(())
    }

    #[test]
    fn inconsistent_primes() -> Result<(), QmError> {
        let problem = Problem::new(["A", "B"], [0, 3], [], Mode::Minterm)?;
        let primes = vec![Term::from_value(0, 2)];
        let err = solve(&problem, &primes, &Limits::default()).unwrap_err();
        assert!(matches!(err, QmError::InternalInconsistency(_)));
        Ok(())
    }

    #[test]
    fn empty_cover() -> Result<(), QmError> {
        let problem = Problem::new(["A"], [], [0], Mode::Minterm)?;
        let primes = tabulate(&problem).into_primes();
        let cover = solve(&problem, &primes, &Limits::default())?;
        assert!(cover.is_empty());
        Ok(())
    }
}
