use thiserror::Error;

use rc_core::{CoreError, EdgeKey};

/// Failure of traffic synthesis.  The previous traffic state, if any, is
/// left untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrafficError {
    #[error("invalid traffic configuration: {0}")]
    InvalidConfig(#[from] CoreError),

    #[error("volume for edge {edge} is not a finite number ({value})")]
    NonFiniteVolume { edge: EdgeKey, value: f64 },
}

pub type TrafficResult<T> = Result<T, TrafficError>;

/// Why edge betweenness could not be computed.  Never surfaced to callers of
/// the synthesizer: it switches to a uniform score instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CentralityError {
    #[error("network has {0} node(s); betweenness needs at least 2")]
    TooFewNodes(usize),

    #[error("sample size must be at least 1")]
    EmptySample,
}
