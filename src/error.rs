// Umbrella error for the string-level entry points

use thiserror::Error;

use crate::expr::{EvalError, ParseError};
use crate::minimize::MinimizeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Minimize(#[from] MinimizeError),
}
