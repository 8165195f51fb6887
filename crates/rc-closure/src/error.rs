use rc_core::SessionId;
use rc_network::NetworkError;
use rc_traffic::TrafficError;
use thiserror::Error;

/// Failures that abort a session operation.  The session state is left
/// exactly as it was before the call.
///
/// Closing an already-closed edge or losing displaced traffic to a
/// disconnected network are *not* errors; see
/// [`ClosureStatus`](crate::ClosureStatus).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("no network loaded for session {0}")]
    SessionNotFound(SessionId),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("traffic generation error: {0}")]
    Traffic(#[from] TrafficError),
}

pub type SessionResult<T> = Result<T, SessionError>;
