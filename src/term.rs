//! Implicants annotated with the input values they represent.

use crate::*;

use itertools::Itertools;

/// A pattern together with the set of input values it stands for.
///
/// Terms are created from a single input value or by merging two terms which differ at a single position.
/// They are never modified afterwards. The covered values are kept as a sorted list,
/// its size depends on the number of covered values and not on their magnitude.
///
/// ```
/// use qmkit::Term;
///
/// let t1 = Term::from_value(0b101, 3);
/// let t2 = Term::from_value(0b111, 3);
/// let merged = t1.merge(&t2).unwrap();
/// assert_eq!(merged.to_string(), "m(5, 7) = 1-1");
/// ```
#[derive(Clone, Debug)]
pub struct Term {
    covered: Vec<u32>,
    pattern: Pattern,
}

impl Term {
    /// Create the term representing a single value written on `width` bits
    pub fn from_value(value: u32, width: usize) -> Self {
        Self {
            covered: vec![value],
            pattern: Pattern::from_value(value, width),
        }
    }

    /// Create the term covering all values contained in a pattern
    pub fn from_pattern(pattern: Pattern) -> Self {
        let width = pattern.width();
        let base = pattern
            .iter_fixed()
            .filter(|(_, value)| *value)
            .fold(0, |acc, (pos, _)| acc | bit_value(pos, width));
        let free: Vec<u32> = (0..width)
            .filter(|pos| pattern.value_at(*pos).is_none())
            .map(|pos| bit_value(pos, width))
            .collect();
        let covered = free
            .into_iter()
            .powerset()
            .map(|bits| bits.into_iter().fold(base, |acc, b| acc | b))
            .sorted()
            .collect();
        Self { covered, pattern }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Iterate over the covered values in ascending order
    pub fn covered(&self) -> impl Iterator<Item = u32> + '_ {
        self.covered.iter().copied()
    }

    /// Test if a value is represented by this term
    pub fn covers(&self, value: u32) -> bool {
        self.covered.binary_search(&value).is_ok()
    }

    /// Merge with a term whose pattern differs at exactly one position.
    ///
    /// Returns None if the patterns have different widths or more than one mismatch.
    /// The covered values of the result are the union of both sets.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let pattern = self.pattern.merge(&other.pattern)?;
        let covered = self
            .covered
            .iter()
            .merge(&other.covered)
            .dedup()
            .copied()
            .collect();
        Some(Self { covered, pattern })
    }
}

/// Weight of the bit displayed at position `pos` on `width` bits
fn bit_value(pos: usize, width: usize) -> u32 {
    1u32.checked_shl((width - 1 - pos) as u32).unwrap_or(0)
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m({}) = {}", self.covered().join(", "), self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn merge_terms() {
        let t1 = Term::from_value(4, 4);
        let t2 = Term::from_value(12, 4);
        let t3 = Term::from_value(6, 4);

        let m = t1.merge(&t2).unwrap();
        assert_eq!(m.pattern().to_string(), "-100");
        assert_eq!(m.covered().collect::<Vec<_>>(), vec![4, 12]);
        assert!(m.covers(12));
        assert!(!m.covers(6));

        // 12 and 6 differ at two positions
        assert!(t2.merge(&t3).is_none());

        let m2 = t3.merge(&Term::from_value(14, 4)).unwrap();
        let quad = m.merge(&m2).unwrap();
        assert_eq!(quad.to_string(), "m(4, 6, 12, 14) = -1-0");
    }

    #[test]
    fn covered_values_agree_with_pattern() {
        let quad = Term::from_value(0, 3)
            .merge(&Term::from_value(1, 3))
            .and_then(|t| {
                let other = Term::from_value(2, 3).merge(&Term::from_value(3, 3))?;
                t.merge(&other)
            })
            .unwrap();
        assert_eq!(quad.pattern().to_string(), "0--");
        for v in quad.covered() {
            assert!(quad.pattern().contains_value(v));
        }
        assert_eq!(quad.covered().count(), 4);
    }

    #[test]
    fn from_pattern() -> Result<(), QmError> {
        let t = Term::from_pattern("1-0-".parse()?);
        assert_eq!(t.covered().collect::<Vec<_>>(), vec![8, 9, 12, 13]);
        assert_eq!(t.to_string(), "m(8, 9, 12, 13) = 1-0-");

        let t = Term::from_pattern("".parse()?);
        assert_eq!(t.covered().collect::<Vec<_>>(), vec![0]);
        Ok(())
    }
}
