use crate::{Mode, Problem, QmError, VarList};
use pest::{iterators, Parser};
use std::str::FromStr;

#[derive(Parser)]
#[grammar_inline = r####"
function   = { SOI ~ (header ~ "=")? ~ terms ~ dont_cares? ~ EOI }
header     = { name ~ "(" ~ (name ~ ("," ~ name)*)? ~ ")" }
terms      = { (minterms | maxterms) ~ "(" ~ values? ~ ")" }
dont_cares = { "+" ~ "d" ~ "(" ~ values? ~ ")" }
minterms   = { ("Σ" | "∑")? ~ "m" | "sum" }
maxterms   = { ("Π" | "∏")? ~ "M" | "prod" }
values     = { value ~ ("," ~ value)* }
value      = @{ ASCII_DIGIT+ }
name       = @{ (ASCII_ALPHA | "_") ~ (ASCII_ALPHANUMERIC | "_" | "'")* }

WHITESPACE = _{ " " | "\t" | "\n" }
"####]
struct FunctionParser;

/// Parse the textbook description of a function: `F(A, B, C) = m(1, 3, 5) + d(0, 7)`.
///
/// The header naming the function and its variables is optional: without it,
/// the variables are named A, B, C... with just enough variables to write the largest value.
/// Maxterms are introduced by `M` (or `ΠM`), minterms by `m` (or `Σm`).
///
/// ```
/// use qmkit::{parse_problem, Mode};
///
/// let problem = parse_problem("F(x, y, z) = ΠM(0, 2) + d(7)").unwrap();
/// assert_eq!(problem.mode(), Mode::Maxterm);
/// assert_eq!(&problem.variables()[1], "y");
///
/// let problem = parse_problem("m(1, 5)").unwrap();
/// assert_eq!(problem.width(), 3);
/// ```
pub fn parse_problem(s: &str) -> Result<Problem, QmError> {
    let function = FunctionParser::parse(Rule::function, s)
        .map_err(|e| QmError::Parse(e.to_string()))?
        .next()
        .ok_or_else(|| QmError::Parse(s.to_string()))?;

    let mut names: Option<Vec<String>> = None;
    let mut mode = Mode::Minterm;
    let mut required = Vec::new();
    let mut dont_cares = Vec::new();
    for pair in function.into_inner() {
        match pair.as_rule() {
            Rule::header => {
                // The first name is the function itself
                names = Some(pair.into_inner().skip(1).map(|p| p.as_str().into()).collect());
            }
            Rule::terms => {
                for inner in pair.into_inner() {
                    match inner.as_rule() {
                        Rule::maxterms => mode = Mode::Maxterm,
                        Rule::values => required = load_values(inner)?,
                        _ => (),
                    }
                }
            }
            Rule::dont_cares => {
                if let Some(values) = pair.into_inner().next() {
                    dont_cares = load_values(values)?;
                }
            }
            _ => (),
        }
    }

    let variables = match names {
        Some(names) => VarList::new(names)?,
        None => {
            let largest = required.iter().chain(&dont_cares).max().copied().unwrap_or(0);
            VarList::generic((32 - largest.leading_zeros() as usize).max(1))
        }
    };
    Problem::with_variables(variables, required, dont_cares, mode)
}

fn load_values(values: iterators::Pair<Rule>) -> Result<Vec<u32>, QmError> {
    values
        .into_inner()
        .map(|v| {
            v.as_str()
                .parse()
                .map_err(|_| QmError::Parse(format!("'{}' is not a valid value", v.as_str())))
        })
        .collect()
}

impl FromStr for Problem {
    type Err = QmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_problem(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parse_with_header() -> Result<(), QmError> {
        let problem: Problem = "F(A, B, C) = m(1, 3, 5) + d(0, 7)".parse()?;
        assert_eq!(problem.mode(), Mode::Minterm);
        assert_eq!(problem.width(), 3);
        assert_eq!(problem.required().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(problem.dont_cares().collect::<Vec<_>>(), vec![0, 7]);

        let problem = parse_problem("f(a,b) = prod(0)")?;
        assert_eq!(problem.mode(), Mode::Maxterm);
        assert_eq!(problem.dont_cares().count(), 0);

        let problem = parse_problem("G(A) = Σm()")?;
        assert_eq!(problem.required().count(), 0);
        Ok(())
    }

    #[test]
    fn parse_without_header() -> Result<(), QmError> {
        let problem = parse_problem("Σm(2, 9) + d(12)")?;
        assert_eq!(problem.width(), 4);
        assert_eq!(&problem.variables()[3], "D");

        let problem = parse_problem("M(0)")?;
        assert_eq!(problem.width(), 1);
        assert_eq!(problem.mode(), Mode::Maxterm);
        Ok(())
    }

    #[test]
    fn invalid_descriptions() {
        assert!(matches!(parse_problem("m(1, 2"), Err(QmError::Parse(_))));
        assert!(matches!(parse_problem("x(1)"), Err(QmError::Parse(_))));
        assert!(matches!(
            parse_problem("m(99999999999)"),
            Err(QmError::Parse(_))
        ));

        // Parsed but invalid
        let err = parse_problem("F(A, B) = m(1, 4)").unwrap_err();
        assert!(err.is_config_error());
        let err = parse_problem("F(A, A) = m(1)").unwrap_err();
        assert!(err.is_config_error());
        let err = parse_problem("F(A, B) = m(1) + d(1)").unwrap_err();
        assert!(err.is_config_error());
    }
}
