use thiserror::Error;

/// Invalid minimization problem, detected before any tabulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The name can not be used for a variable
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The name is used for more than one variable
    #[error("The name '{0}' is used by more than one variable")]
    DuplicateVariable(String),

    /// Too many variables for an interactive minimization
    #[error("{count} variables exceed the limit of {limit}")]
    TooManyVariables { count: usize, limit: usize },

    /// A value can not be encoded with the available variables
    #[error("The value {value} is out of range for {variables} variables")]
    ValueOutOfRange { value: u32, variables: usize },

    /// A value is both required and don't-care
    #[error("The value {0} is both required and don't-care")]
    Overlap(u32),
}

/// Errors raised while building or minimizing a Boolean function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QmError {
    /// The problem is not well-formed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The pattern contains unexpected characters
    #[error("Not a valid pattern: '{0}'")]
    InvalidPattern(String),

    /// The textual description of a function could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The exhaustive cover search would enumerate too many candidates
    #[error("{candidates} candidate implicants exceed the search limit of {limit}")]
    SearchLimit { candidates: usize, limit: usize },

    /// The prime implicants can not reconstruct the required values
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl QmError {
    /// Return whether this error was caused by an invalid problem definition.
    pub fn is_config_error(&self) -> bool {
        matches!(self, QmError::InvalidConfig(_))
    }
}
