//! Ordered lists of named variables

use crate::*;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Index;
use std::slice::Iter;

static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s(),;&|!~¬⋀⋁]+$").unwrap());

/// The ordered list of variable names of a Boolean function.
///
/// The rank of a variable in the list is its position in patterns: the first variable
/// corresponds to the most significant bit of the input values.
/// Names must be unique and can not contain spaces, parenthesis, separators or operator symbols,
/// which would make the rendered expressions ambiguous.
///
/// ```
/// use qmkit::VarList;
///
/// let vars = VarList::new(["A", "B", "Cin"]).unwrap();
/// assert_eq!(vars.len(), 3);
/// assert_eq!(&vars[2], "Cin");
///
/// assert!(VarList::new(["A", "A"]).is_err());
/// assert!(VarList::new(["A B"]).is_err());
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VarList {
    names: Vec<String>,
}

impl VarList {
    /// Build a list of variables, checking that all names are valid and unique
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !RE_NAME.is_match(name) {
                return Err(ConfigError::InvalidName(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateVariable(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Generic names for the given number of variables: A, B, C... then x26, x27...
    pub fn generic(count: usize) -> Self {
        let names = (0..count)
            .map(|idx| match idx {
                0..=25 => ((b'A' + idx as u8) as char).to_string(),
                _ => format!("x{}", idx),
            })
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.names.iter()
    }
}

impl Index<usize> for VarList {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.names[idx]
    }
}

impl<'a> IntoIterator for &'a VarList {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
