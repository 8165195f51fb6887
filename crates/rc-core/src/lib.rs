//! `rc-core`: foundational types for the road-closure traffic simulator.
//!
//! This crate is a dependency of every other `rc-*` crate.  It intentionally
//! has no `rc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `SessionId`, `EdgeKey`                            |
//! | [`geo`]    | `GeoPoint` (lon/lat, display only), `PlanarPoint` (x/y)     |
//! | [`rng`]    | `SimRng` (injectable, seedable)                             |
//! | [`config`] | `TrafficConfig` and its inclusive `VolumeRange`/`FactorRange` |
//! | [`error`]  | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FactorRange, TrafficConfig, VolumeRange};
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, PlanarPoint};
pub use ids::{EdgeKey, NodeId, SessionId};
pub use rng::SimRng;
