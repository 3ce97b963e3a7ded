//! Formatting API for covers

use crate::{Mode, Term, VarList};

use std::fmt;

/// Symbols used to write expressions.
pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_not: &'a str,
    s_false: &'a str,
    s_true: &'a str,
}

pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " & ",
    s_or: " | ",
    s_not: "!",
    s_false: "0",
    s_true: "1",
};

/// The logic symbols of the truth table web interface
pub static UNICODE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "⋀",
    s_or: " ⋁ ",
    s_not: "¬",
    s_false: "0",
    s_true: "1",
};

pub static LOWERCASE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " and ",
    s_or: " or ",
    s_not: "not ",
    s_false: "false",
    s_true: "true",
};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Connectives joining literals and implicants
pub enum Operator {
    /// AND operator: both children need to be true
    And,
    /// OR operator: at least one child needs to be true
    Or,
}

impl Operator {
    pub fn priority(&self) -> usize {
        match self {
            Operator::And => 2,
            Operator::Or => 1,
        }
    }
}

impl Mode {
    /// The operators joining literals inside an implicant and joining the implicants
    pub fn operators(&self) -> (Operator, Operator) {
        match self {
            Mode::Minterm => (Operator::And, Operator::Or),
            Mode::Maxterm => (Operator::Or, Operator::And),
        }
    }
}

impl<'a> FormatterConfig<'a> {
    /// Define custom symbols for the AND, OR and NOT operators and for the two constants.
    ///
    /// ```
    /// use qmkit::efmt::FormatterConfig;
    /// use qmkit::{minimize, Mode};
    ///
    /// static C_STYLE: FormatterConfig = FormatterConfig::new(" && ", " || ", "!", "false", "true");
    ///
    /// let solution = minimize(["a", "b", "c"], [1, 3, 6], [], Mode::Minterm).unwrap();
    /// assert_eq!(solution.format_with(&C_STYLE).to_string(), "!a && c || a && b && !c");
    ///
    /// let solution = minimize(["a"], [], [], Mode::Minterm).unwrap();
    /// assert_eq!(solution.format_with(&C_STYLE).to_string(), "false");
    /// ```
    pub const fn new(
        s_and: &'a str,
        s_or: &'a str,
        s_not: &'a str,
        s_false: &'a str,
        s_true: &'a str,
    ) -> Self {
        Self {
            s_and,
            s_or,
            s_not,
            s_false,
            s_true,
        }
    }

    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
        }
    }

    pub fn constant(&self, value: bool) -> &str {
        match value {
            true => self.s_true,
            false => self.s_false,
        }
    }

    /// Wrap a cover into a displayable expression
    pub fn cover<'b>(
        &'b self,
        terms: &'b [Term],
        variables: &'b VarList,
        mode: Mode,
    ) -> CoverFormatted<'b> {
        CoverFormatted {
            terms,
            variables,
            mode,
            cfg: self,
        }
    }
}

/// Display a list of implicants as a sum of products (minterm mode) or as a product of sums (maxterm mode).
///
/// In minterm mode, an empty list gives the constant false and an implicant without
/// fixed variables gives the constant true. The constants are inverted in maxterm mode,
/// where the literals are also negated.
pub struct CoverFormatted<'a> {
    terms: &'a [Term],
    variables: &'a VarList,
    mode: Mode,
    cfg: &'a FormatterConfig<'a>,
}

impl CoverFormatted<'_> {
    fn write_variable(&self, f: &mut fmt::Formatter, pos: usize, value: bool) -> fmt::Result {
        if !value {
            write!(f, "{}", self.cfg.s_not)?;
        }
        match pos < self.variables.len() {
            true => write!(f, "{}", &self.variables[pos]),
            false => write!(f, "_{}_", pos),
        }
    }
}

impl fmt::Display for CoverFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sum_of_products = self.mode == Mode::Minterm;
        if self.terms.is_empty() {
            return write!(f, "{}", self.cfg.constant(!sum_of_products));
        }
        if self.terms.iter().any(|t| t.pattern().is_free()) {
            return write!(f, "{}", self.cfg.constant(sum_of_products));
        }

        let (inner, outer) = self.mode.operators();
        let wrap = self.terms.len() > 1 && inner.priority() < outer.priority();
        for (idx, term) in self.terms.iter().enumerate() {
            if idx > 0 {
                write!(f, "{}", self.cfg.operator(outer))?;
            }
            let pattern = term.pattern();
            let parenthesis = wrap && pattern.width() - pattern.free_count() > 1;
            if parenthesis {
                write!(f, "(")?;
            }
            for (rank, (pos, value)) in pattern.iter_fixed().enumerate() {
                if rank > 0 {
                    write!(f, "{}", self.cfg.operator(inner))?;
                }
                self.write_variable(f, pos, value == sum_of_products)?;
            }
            if parenthesis {
                write!(f, ")")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::QmError;

    fn terms(patterns: &[&str]) -> Result<Vec<Term>, QmError> {
        patterns
            .iter()
            .map(|p| Ok(Term::from_pattern(p.parse()?)))
            .collect()
    }

    #[test]
    fn sum_of_products() -> Result<(), QmError> {
        let vars = VarList::generic(3);
        let cover = terms(&["1-0", "-11"])?;

        let fr = DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Minterm);
        assert_eq!(fr.to_string(), "A & !C | B & C");

        let fr = UNICODE_FMT_CFG.cover(&cover, &vars, Mode::Minterm);
        assert_eq!(fr.to_string(), "A⋀¬C ⋁ B⋀C");

        let fr = LOWERCASE_FMT_CFG.cover(&cover, &vars, Mode::Minterm);
        assert_eq!(fr.to_string(), "A and not C or B and C");
        Ok(())
    }

    #[test]
    fn product_of_sums() -> Result<(), QmError> {
        let vars = VarList::generic(3);
        let cover = terms(&["1-0", "-11"])?;
        let fr = DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Maxterm);
        assert_eq!(fr.to_string(), "(!A | C) & (!B | !C)");

        // No parenthesis for single literals or single implicants
        let cover = terms(&["--0", "01-"])?;
        let fr = DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Maxterm);
        assert_eq!(fr.to_string(), "C & (A | !B)");

        let cover = terms(&["01-"])?;
        let fr = DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Maxterm);
        assert_eq!(fr.to_string(), "A | !B");
        Ok(())
    }

    #[test]
    fn constants() -> Result<(), QmError> {
        let vars = VarList::generic(2);
        let empty: Vec<Term> = Vec::new();
        assert_eq!(DEFAULT_FMT_CFG.cover(&empty, &vars, Mode::Minterm).to_string(), "0");
        assert_eq!(DEFAULT_FMT_CFG.cover(&empty, &vars, Mode::Maxterm).to_string(), "1");

        let cover = terms(&["1-", "--"])?;
        assert_eq!(DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Minterm).to_string(), "1");
        assert_eq!(DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Maxterm).to_string(), "0");
        assert_eq!(LOWERCASE_FMT_CFG.cover(&cover, &vars, Mode::Minterm).to_string(), "true");
        Ok(())
    }

    #[test]
    fn unnamed_variables() -> Result<(), QmError> {
        let vars = VarList::generic(1);
        let cover = terms(&["-1"])?;
        let fr = DEFAULT_FMT_CFG.cover(&cover, &vars, Mode::Minterm);
        assert_eq!(fr.to_string(), "_1_");
        Ok(())
    }
}
