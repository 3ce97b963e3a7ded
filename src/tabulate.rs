//! Generation of prime implicants with the tabulation method.
//!
//! Terms are grouped in buckets according to the number of positions fixed at 1.
//! Two terms can only differ at a single position if they are in adjacent buckets:
//! each round tries to merge all pairs of terms taken from adjacent buckets and
//! builds the buckets of the next round with the merged terms.
//!
//! The terms of a round are stored in an arena. At the end of the round, they are all moved out:
//! the terms merged with at least one other term are retired, the others are prime implicants.
//! Each round adds one free position to all produced terms: the process stops after at most
//! one round per variable.

use crate::*;

use bit_set::BitSet;
use itertools::{iproduct, Itertools};
use log::{debug, trace};
use slab::Slab;

/// The prime implicants of a function, with some information on the tabulation rounds.
///
/// ```
/// use qmkit::{tabulate, Mode, Problem};
///
/// let problem = Problem::new(["A", "B"], [1, 2, 3], [], Mode::Minterm).unwrap();
/// let tabulation = tabulate(&problem);
///
/// let primes: Vec<String> = tabulation.primes().iter().map(|t| t.pattern().to_string()).collect();
/// assert_eq!(primes, vec!["-1", "1-"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tabulation {
    primes: Vec<Term>,
    retired: Vec<Term>,
    rounds: usize,
}

impl Tabulation {
    /// The prime implicants, in order of discovery
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    pub fn into_primes(self) -> Vec<Term> {
        self.primes
    }

    /// All terms which have been merged into larger terms
    pub fn retired(&self) -> &[Term] {
        &self.retired
    }

    /// Number of merge rounds, including the last one which did not produce any new term
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

/// Terms of a single round, grouped by number of positions fixed at 1
struct Round {
    arena: Slab<Term>,
    buckets: Vec<Vec<usize>>,
}

impl Round {
    fn with_buckets(count: usize) -> Self {
        Self {
            arena: Slab::new(),
            buckets: vec![Vec::new(); count],
        }
    }

    fn initial(problem: &Problem) -> Self {
        let width = problem.width();
        let mut round = Self::with_buckets(width + 1);
        for value in problem.all_values() {
            let term = Term::from_value(value, width);
            let bucket = term.pattern().ones();
            let key = round.arena.insert(term);
            round.buckets[bucket].push(key);
        }
        round
    }

    /// Add a new term in a bucket unless a term with the same pattern is already there
    fn push_new_term(&mut self, bucket: usize, term: Term) {
        let arena = &self.arena;
        if self.buckets[bucket]
            .iter()
            .any(|key| arena[*key].pattern() == term.pattern())
        {
            return;
        }
        let key = self.arena.insert(term);
        self.buckets[bucket].push(key);
    }

    fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

/// Compute all prime implicants of the function defined by the required and don't-care values.
pub fn tabulate(problem: &Problem) -> Tabulation {
    let mut result = Tabulation::default();
    let mut round = Round::initial(problem);

    while !round.is_empty() {
        result.rounds += 1;
        let mut next = Round::with_buckets(round.buckets.len().saturating_sub(1));
        let mut consumed = BitSet::new();
        let mut merges = 0;

        for (idx, (low, high)) in round.buckets.iter().tuple_windows().enumerate() {
            for (a, b) in iproduct!(low, high) {
                if let Some(term) = round.arena[*a].merge(&round.arena[*b]) {
                    trace!(
                        "merge {} and {} into {}",
                        round.arena[*a].pattern(),
                        round.arena[*b].pattern(),
                        term.pattern()
                    );
                    consumed.insert(*a);
                    consumed.insert(*b);
                    merges += 1;
                    next.push_new_term(idx, term);
                }
            }
        }

        let found = result.primes.len();
        for key in round.buckets.iter().flatten() {
            let term = round.arena.remove(*key);
            match consumed.contains(*key) {
                true => result.retired.push(term),
                false => result.primes.push(term),
            }
        }
        debug!(
            "tabulation round {}: {} merges, {} new prime implicants",
            result.rounds,
            merges,
            result.primes.len() - found
        );

        round = next;
    }

    result
}
