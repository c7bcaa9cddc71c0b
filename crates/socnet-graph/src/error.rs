use thiserror::Error;

/// Errors surfaced by the graph engine.
///
/// None of these are fatal: a failed query leaves the graph untouched and
/// the caller may keep issuing queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node not found: {0}")]
    NotFound(String),

    #[error("no path between {from} and {to}")]
    NoPath { from: String, to: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
