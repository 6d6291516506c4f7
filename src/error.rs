use thiserror::Error;

use crate::registry::ParamKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument had the right kind but an unacceptable shape, e.g. a unit where none is allowed.
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Undefined function: {0}")]
    UndefinedFunction(String),
    #[error("{name} expects {expected} argument(s), but {given} were passed")]
    WrongArity {
        name: String,
        expected: usize,
        given: usize,
    },
    #[error("{function}: ${param} must be a {expected}, got a {found}")]
    WrongType {
        function: String,
        param: &'static str,
        expected: ParamKind,
        found: &'static str,
    },
}

impl Error {
    pub fn not_unitless() -> Self {
        Error::InvalidArgument("Value is not a unitless number".to_string())
    }
}
