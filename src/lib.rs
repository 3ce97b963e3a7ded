//! Minimize partially defined Boolean functions with the Quine-McCluskey method.
//!
//! A [Problem] describes a Boolean function by its ordered [list of variables](VarList), the set of input values
//! for which it must be true (the *required* values) and an optional set of values for which it is
//! unconstrained (the *don't-care* values). An input value is an integer: its binary representation
//! gives the value of each variable, the first variable corresponding to the most significant bit.
//!
//! ```
//! use qmkit::{minimize, Mode};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! // A | B: only the input 00 is false
//! let solution = minimize(["A", "B"], [1, 2, 3], [], Mode::Minterm)?;
//! println!("{}", solution);
//! assert!(!solution.eval(0));
//! assert!(solution.eval(2));
//! # Ok(())
//! # }
//! ```
//!
//! # Patterns and terms
//!
//! A [Pattern] fixes some variables to ```0``` or ```1``` and leaves the others free (```-```).
//! It stands for all input values which agree with its fixed positions.
//! A [Term] associates a pattern to the set of required or don't-care values it covers.
//! Two terms whose patterns differ at exactly one position can be merged into a larger term.
//!
//! ```
//! use qmkit::{Pattern, Term};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let pattern: Pattern = "1-0".parse()?;
//! assert!(pattern.contains_value(0b110));
//!
//! let t = Term::from_value(0b100, 3).merge(&Term::from_value(0b110, 3)).unwrap();
//! assert_eq!(t.pattern(), &pattern);
//! # Ok(())
//! # }
//! ```
//!
//! # Minimization
//!
//! The minimization proceeds in two steps:
//! * the [tabulation](tabulate()) merges terms until no merge is possible, giving the list of prime implicants.
//! * the [covering search](solve()) selects the essential prime implicants and completes them with the smallest
//!   set of other prime implicants covering all required values.
//!
//! The second step is exponential in the number of candidate implicants: the [Limits] given to the [Minimizer]
//! bound the size of the problems it accepts.
//!
//! ```
//! use qmkit::{Limits, Minimizer, Problem};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let problem: Problem = "F(A, B, C, D) = m(4, 8, 10, 11, 12, 15) + d(9, 14)".parse()?;
//! let minimizer = Minimizer::with_limits(Limits::default().with_max_variables(8));
//! let solution = minimizer.minimize(&problem)?;
//!
//! assert_eq!(solution.essential().len(), 2);
//! for term in solution.terms() {
//!     println!("{}", term);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Minterms and maxterms
//!
//! In maxterm [mode](Mode), the required values are the inputs for which the function is *false*.
//! The same cover is then displayed as a product of sums, using the De Morgan dual of the sum of products.
//! The [formatting API](efmt) controls the symbols used to display expressions.
//!
//! ```
//! use qmkit::{minimize, Mode};
//! use qmkit::efmt::UNICODE_FMT_CFG;
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let solution = minimize(["A", "B", "C"], [0, 1, 2, 6], [], Mode::Maxterm)?;
//! assert_eq!(solution.expression(), "(A | B) & (!B | C)");
//! assert_eq!(solution.format_with(&UNICODE_FMT_CFG).to_string(), "(A ⋁ B)⋀(¬B ⋁ C)");
//! # Ok(())
//! # }
//! ```

mod cover;
mod error;
pub mod efmt;
mod minimize;
mod parse;
mod pattern;
mod problem;
mod tabulate;
mod term;
mod variables;

use std::fmt;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use cover::{solve, Cover};
pub use error::{ConfigError, QmError};
pub use minimize::{minimize, Minimizer, Solution};
pub use parse::parse_problem;
pub use pattern::Pattern;
pub use problem::{Limits, Mode, Problem, MAX_SUPPORTED_VARIABLES};
pub use tabulate::{tabulate, Tabulation};
pub use term::Term;
pub use variables::VarList;
