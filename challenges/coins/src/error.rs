use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, solving and reporting coin problems.
///
/// Running out of search time is not an error: it is reported as
/// [`Outcome::BudgetExceeded`](crate::solver::Outcome::BudgetExceeded).
#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: malformed problem: {reason}")]
    MalformedProblem { line: usize, reason: String },

    #[error("invalid denominations: {0}")]
    InvalidDenominations(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Stream(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
