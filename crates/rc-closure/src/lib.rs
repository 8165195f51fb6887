//! `rc-closure`: road closures, traffic redistribution, and sessions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`engine`]   | `ClosureEngine`: `close_edge`, `reset`                 |
//! | [`report`]   | `ClosureReport`, `ClosureStatus`                        |
//! | [`session`]  | `Session`, `SessionBuilder`                             |
//! | [`registry`] | `SessionRegistry`: id → session, one lock per session  |
//! | [`error`]    | `SessionError`, `SessionResult<T>`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rc_closure::{ClosureStatus, SessionBuilder};
//! use rc_network::{GridSpec, synthetic_grid};
//!
//! let network = synthetic_grid(&GridSpec::default())?;
//! let mut session = SessionBuilder::from_network(network).build()?;
//! let report = session.close_edge(edge)?;
//! if let ClosureStatus::NoSubstitutePath { discarded } = report.status {
//!     eprintln!("{discarded} vehicles had nowhere to go");
//! }
//! session.reset()?;
//! ```

pub mod engine;
pub mod error;
pub mod registry;
pub mod report;
pub mod session;

#[cfg(test)]
mod tests;

pub use engine::{ClosureEngine, ClosureOutcome};
pub use error::{SessionError, SessionResult};
pub use registry::{SessionRegistry, SharedSession};
pub use report::{ClosureReport, ClosureStatus};
pub use session::{Session, SessionBuilder};
