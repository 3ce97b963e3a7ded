//! Validated definition of a function to minimize

use crate::*;

use std::collections::BTreeSet;

/// Hard upper bound on the number of variables, whatever the configured limits.
pub const MAX_SUPPORTED_VARIABLES: usize = 24;

/// Convention used to interpret the required values and to render the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The required values are minterms: the result is a sum of products
    #[default]
    Minterm,
    /// The required values are maxterms: the result is a product of sums
    Maxterm,
}

/// Bounds applied before running the exponential parts of the minimization.
///
/// The two bounds go together: the number of prime implicants grows quickly with the number of
/// variables, and the cover search fails with [QmError::SearchLimit] as soon as more than
/// `max_candidates` of them are left after the essential ones. With the default values, typical functions
/// of up to 5 variables are minimized and some 6-variable functions already hit the search limit.
/// Larger problems need both limits raised, at the cost of a longer search.
///
/// ```
/// use qmkit::{Limits, Minimizer, Mode, Problem};
///
/// let problem = Problem::new(["A", "B", "C", "D", "E", "F", "G"], [1], [], Mode::Minterm).unwrap();
/// assert!(Minimizer::new().minimize(&problem).unwrap_err().is_config_error());
///
/// let limits = Limits::default().with_max_variables(8).with_max_candidates(28);
/// assert!(Minimizer::with_limits(limits).minimize(&problem).is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximal number of variables in a problem
    pub max_variables: usize,
    /// Maximal number of candidate implicants in the exhaustive cover search
    pub max_candidates: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: 6,
            max_candidates: 24,
        }
    }
}

impl Limits {
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables.min(MAX_SUPPORTED_VARIABLES);
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

/// A partially defined Boolean function: ordered variables, required values and don't-care values.
///
/// All checks are performed on construction, a Problem is always well-formed:
/// variable names are valid and unique, all values can be written with the available variables,
/// and no value is both required and don't-care. Repeated values are collapsed.
///
/// ```
/// use qmkit::{Mode, Problem};
///
/// let problem = Problem::new(["A", "B"], [1, 2, 3], [], Mode::Minterm).unwrap();
/// assert_eq!(problem.required().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// // 4 can not be written with two variables
/// assert!(Problem::new(["A", "B"], [4], [], Mode::Minterm).is_err());
/// // 1 can not be both required and don't-care
/// assert!(Problem::new(["A", "B"], [1], [1], Mode::Minterm).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    variables: VarList,
    required: BTreeSet<u32>,
    dont_cares: BTreeSet<u32>,
    mode: Mode,
}

impl Problem {
    pub fn new<V, S, R, D>(
        variables: V,
        required: R,
        dont_cares: D,
        mode: Mode,
    ) -> Result<Self, QmError>
    where
        V: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = u32>,
        D: IntoIterator<Item = u32>,
    {
        Self::with_variables(VarList::new(variables)?, required, dont_cares, mode)
    }

    /// Build a problem on an existing list of variables
    pub fn with_variables<R, D>(
        variables: VarList,
        required: R,
        dont_cares: D,
        mode: Mode,
    ) -> Result<Self, QmError>
    where
        R: IntoIterator<Item = u32>,
        D: IntoIterator<Item = u32>,
    {
        let count = variables.len();
        if count > MAX_SUPPORTED_VARIABLES {
            return Err(ConfigError::TooManyVariables {
                count,
                limit: MAX_SUPPORTED_VARIABLES,
            }
            .into());
        }

        let bound = 1u64 << count;
        let check = |value: u32| match (value as u64) < bound {
            true => Ok(value),
            false => Err(ConfigError::ValueOutOfRange {
                value,
                variables: count,
            }),
        };
        let required = required
            .into_iter()
            .map(check)
            .collect::<Result<BTreeSet<u32>, _>>()?;
        let dont_cares = dont_cares
            .into_iter()
            .map(check)
            .collect::<Result<BTreeSet<u32>, _>>()?;

        if let Some(v) = required.intersection(&dont_cares).next() {
            return Err(ConfigError::Overlap(*v).into());
        }

        Ok(Self {
            variables,
            required,
            dont_cares,
            mode,
        })
    }

    pub fn variables(&self) -> &VarList {
        &self.variables
    }

    /// Number of variables, i.e. the width of all patterns
    pub fn width(&self) -> usize {
        self.variables.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Iterate over the required values in ascending order
    pub fn required(&self) -> impl Iterator<Item = u32> + '_ {
        self.required.iter().copied()
    }

    /// Iterate over the don't-care values in ascending order
    pub fn dont_cares(&self) -> impl Iterator<Item = u32> + '_ {
        self.dont_cares.iter().copied()
    }

    pub fn is_required(&self, value: u32) -> bool {
        self.required.contains(&value)
    }

    pub fn is_dont_care(&self, value: u32) -> bool {
        self.dont_cares.contains(&value)
    }

    /// Iterate over the required and don't-care values in ascending order
    pub fn all_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.required.union(&self.dont_cares).copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn validation() {
        let p = Problem::new(["A", "B", "C"], [7, 1, 1, 3], [0, 6], Mode::Maxterm).unwrap();
        assert_eq!(p.width(), 3);
        assert_eq!(p.mode(), Mode::Maxterm);
        assert_eq!(p.required().collect::<Vec<_>>(), vec![1, 3, 7]);
        assert_eq!(p.all_values().collect::<Vec<_>>(), vec![0, 1, 3, 6, 7]);
        assert!(p.is_dont_care(6));
        assert!(!p.is_required(6));

        let err = Problem::new(["A", "B"], [1], [5], Mode::Minterm).unwrap_err();
        assert_eq!(
            err,
            QmError::InvalidConfig(ConfigError::ValueOutOfRange {
                value: 5,
                variables: 2
            })
        );
        assert!(err.is_config_error());

        let err = Problem::new(["A", "B"], [1, 2], [2], Mode::Minterm).unwrap_err();
        assert_eq!(err, QmError::InvalidConfig(ConfigError::Overlap(2)));

        let err = Problem::new(["A", "A"], [], [], Mode::Minterm).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn no_variables() {
        // A constant function: only the value 0 exists
        assert!(Problem::new(Vec::<String>::new(), [0], [], Mode::Minterm).is_ok());
        assert!(Problem::new(Vec::<String>::new(), [1], [], Mode::Minterm).is_err());
    }

    #[test]
    fn variable_bound() {
        let vars = VarList::generic(MAX_SUPPORTED_VARIABLES + 1);
        let err = Problem::with_variables(vars, [], [], Mode::Minterm).unwrap_err();
        assert!(err.is_config_error());

        assert_eq!(Limits::default().with_max_variables(40).max_variables, MAX_SUPPORTED_VARIABLES);
    }

    #[test]
    fn default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_variables, 6);
        assert_eq!(limits.max_candidates, 24);

        let problem = Problem::with_variables(VarList::generic(7), [0], [], Mode::Minterm).unwrap();
        let err = Minimizer::new().minimize(&problem).unwrap_err();
        assert_eq!(
            err,
            QmError::InvalidConfig(ConfigError::TooManyVariables { count: 7, limit: 6 })
        );
    }
}
