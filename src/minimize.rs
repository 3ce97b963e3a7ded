//! Minimization of complete problems

use crate::efmt::{CoverFormatted, FormatterConfig, DEFAULT_FMT_CFG};
use crate::*;

use log::debug;

/// Minimize functions according to some limits.
///
/// ```
/// use qmkit::{Limits, Minimizer, Mode, Problem};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let minimizer = Minimizer::with_limits(Limits::default().with_max_candidates(12));
/// let problem = Problem::new(["A", "B", "C"], [0, 1, 2, 5, 6, 7], [], Mode::Minterm)?;
/// let solution = minimizer.minimize(&problem)?;
/// assert_eq!(solution.cover().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimizer {
    limits: Limits,
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Compute a minimal cover of the required values of a problem.
    ///
    /// The problem is rejected if it has more variables than allowed.
    pub fn minimize(&self, problem: &Problem) -> Result<Solution, QmError> {
        if problem.width() > self.limits.max_variables {
            return Err(ConfigError::TooManyVariables {
                count: problem.width(),
                limit: self.limits.max_variables,
            }
            .into());
        }
        debug!(
            "minimize {} required and {} don't-care values on {} variables",
            problem.required().count(),
            problem.dont_cares().count(),
            problem.width()
        );

        let tabulation = tabulate(problem);
        let cover = solve(problem, tabulation.primes(), &self.limits)?;
        Ok(Solution {
            variables: problem.variables().clone(),
            mode: problem.mode(),
            cover,
            primes: tabulation.into_primes(),
        })
    }
}

/// Minimize a function with the default limits.
///
/// ```
/// use qmkit::{minimize, Mode};
///
/// let solution = minimize(["A", "B"], [1, 2, 3], [], Mode::Minterm).unwrap();
/// assert_eq!(solution.expression(), "B | A");
///
/// let solution = minimize(["A", "B", "C"], [0, 1], [], Mode::Maxterm).unwrap();
/// assert_eq!(solution.expression(), "A | B");
/// ```
pub fn minimize<V, S, R, D>(
    variables: V,
    required: R,
    dont_cares: D,
    mode: Mode,
) -> Result<Solution, QmError>
where
    V: IntoIterator<Item = S>,
    S: Into<String>,
    R: IntoIterator<Item = u32>,
    D: IntoIterator<Item = u32>,
{
    let problem = Problem::new(variables, required, dont_cares, mode)?;
    Minimizer::default().minimize(&problem)
}

/// A minimal cover of a function, with the context needed to display it.
#[derive(Clone, Debug)]
pub struct Solution {
    variables: VarList,
    mode: Mode,
    cover: Cover,
    primes: Vec<Term>,
}

impl Solution {
    pub fn variables(&self) -> &VarList {
        &self.variables
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// The selected implicants: essential ones first, then supplemental ones
    pub fn terms(&self) -> &[Term] {
        self.cover.terms()
    }

    pub fn essential(&self) -> &[Term] {
        self.cover.essential()
    }

    pub fn supplemental(&self) -> &[Term] {
        self.cover.supplemental()
    }

    /// All prime implicants found during tabulation, including unselected ones
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    /// Value of the minimized function for an input value.
    ///
    /// In maxterm mode, the implicants describe the values for which the function is false.
    pub fn eval(&self, value: u32) -> bool {
        let covered = self
            .cover
            .iter()
            .any(|t| t.pattern().contains_value(value));
        covered == (self.mode == Mode::Minterm)
    }

    /// Display the expression using custom symbols
    pub fn format_with<'a>(&'a self, cfg: &'a FormatterConfig<'a>) -> CoverFormatted<'a> {
        cfg.cover(self.cover.terms(), &self.variables, self.mode)
    }

    /// The expression written with the default symbols
    pub fn expression(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with(&DEFAULT_FMT_CFG))
    }
}
