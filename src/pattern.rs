use crate::*;

use bit_set::BitSet;
use std::fmt;
use std::str::FromStr;

/// A fixed-width cube defined by sets of positions fixed at 1 and at 0, the others are free.
///
/// Position `i` corresponds to the `i`-th variable of the problem. When a pattern is built from
/// an integer value, position 0 holds the most significant bit, so that the pattern reads
/// like the binary representation of the value.
///
/// A Pattern can be parsed from strings where the position in the string defines the
/// variable and the character defines its value: - for free, 0 for inactive, 1 for active.
/// To make the strings easier to read, spaces and single quotes are ignored around and inside the string.
/// For example "0-100-100", "  0-100-100", and "0-100 -100" are equivalent.
///
/// ```
/// use qmkit::Pattern;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let p: Pattern = "1-0".parse()?;
/// assert_eq!(p.width(), 3);
/// assert!(p.contains_value(0b100));
/// assert!(p.contains_value(0b110));
/// assert!(!p.contains_value(0b101));
/// assert_eq!(Pattern::from_value(6, 4).to_string(), "0110");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug)]
pub struct Pattern {
    pub(crate) positive: BitSet,
    pub(crate) negative: BitSet,
    width: usize,
}

impl Pattern {
    /// Create a pattern with all positions free
    pub fn free(width: usize) -> Self {
        Self {
            positive: BitSet::default(),
            negative: BitSet::default(),
            width,
        }
    }

    /// Create a pattern restricted to a single value written on `width` bits
    pub fn from_value(value: u32, width: usize) -> Self {
        let mut p = Self::free(width);
        for pos in 0..width {
            p.set(pos, bit_at(value, pos, width));
        }
        p
    }

    /// Number of positions (variables) in this pattern
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fix a position to a specific value.
    ///
    /// If it was fixed to the opposite value, the existing restriction is replaced.
    /// Positions outside of the pattern are ignored.
    pub fn set(&mut self, pos: usize, value: bool) {
        if pos >= self.width {
            return;
        }
        if value {
            self.negative.remove(pos);
            self.positive.insert(pos);
        } else {
            self.positive.remove(pos);
            self.negative.insert(pos);
        }
    }

    /// Remove all constraints on a given position.
    pub fn unset(&mut self, pos: usize) {
        if pos >= self.width {
            return;
        }
        self.positive.remove(pos);
        self.negative.remove(pos);
    }

    /// Retrieve the fixed value of a position, None if it is free
    pub fn value_at(&self, pos: usize) -> Option<bool> {
        if self.positive.contains(pos) {
            Some(true)
        } else if self.negative.contains(pos) {
            Some(false)
        } else {
            None
        }
    }

    /// Number of free positions
    pub fn free_count(&self) -> usize {
        self.width - self.positive.len() - self.negative.len()
    }

    /// Number of positions fixed at 1
    pub fn ones(&self) -> usize {
        self.positive.len()
    }

    /// Test if all positions are free: the pattern then covers all values
    pub fn is_free(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Iterate over the fixed positions and their values, from left to right
    pub fn iter_fixed(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.width).filter_map(move |pos| self.value_at(pos).map(|v| (pos, v)))
    }

    /// Check if a value (written on the width of this pattern) is contained in this pattern
    pub fn contains_value(&self, value: u32) -> bool {
        self.iter_fixed()
            .all(|(pos, v)| bit_at(value, pos, self.width) == v)
    }

    /// Test if this pattern contains the given pattern.
    pub fn contains(&self, p: &Pattern) -> bool {
        self.width == p.width
            && p.positive.is_superset(&self.positive)
            && p.negative.is_superset(&self.negative)
    }

    /// Build the pattern covering two patterns which differ at exactly one position.
    ///
    /// The positions are compared from left to right, giving up as soon as a second mismatch is found.
    /// The mismatching position is freed in the result, all other positions are shared by the two patterns.
    /// Identical patterns or patterns of different widths do not merge.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        if self.width != other.width {
            return None;
        }
        let mut mismatch = None;
        for pos in 0..self.width {
            if self.value_at(pos) != other.value_at(pos) {
                if mismatch.is_some() {
                    return None;
                }
                mismatch = Some(pos);
            }
        }
        let pos = mismatch?;
        let mut result = self.clone();
        result.unset(pos);
        Some(result)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.positive.iter().eq(other.positive.iter())
            && self.negative.iter().eq(other.negative.iter())
    }
}

impl Eq for Pattern {}

/// Value of the bit of `value` displayed at position `pos` on `width` bits.
pub(crate) fn bit_at(value: u32, pos: usize, width: usize) -> bool {
    let shift = width - 1 - pos;
    shift < 32 && (value >> shift) & 1 == 1
}

impl FromStr for Pattern {
    type Err = QmError;

    fn from_str(descr: &str) -> Result<Pattern, QmError> {
        let mut p = Pattern::default();
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => continue, // skip spacing and ` for formatting
                '-' => (),
                '0' => {
                    p.negative.insert(p.width);
                }
                '1' => {
                    p.positive.insert(p.width);
                }
                _ => return Err(QmError::InvalidPattern(descr.to_string())),
            };
            p.width += 1;
        }
        Ok(p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = (0..self.width)
            .map(|pos| match self.value_at(pos) {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            })
            .collect();
        write!(f, "{}", &s)
    }
}
