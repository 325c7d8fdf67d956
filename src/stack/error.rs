use core::fmt;

use thiserror::Error;

/// The read that was attempted against an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Top,
    Min,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Top => f.write_str("top"),
            Query::Min => f.write_str("minimum"),
        }
    }
}

/// Returned by `top` and `get_min` when the stack holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot read the {query} of an empty stack")]
pub struct EmptyStackError {
    pub query: Query,
}

impl EmptyStackError {
    pub const fn new(query: Query) -> Self {
        Self { query }
    }
}

pub type Result<T> = core::result::Result<T, EmptyStackError>;
