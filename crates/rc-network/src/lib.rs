//! `rc-network`: road network model and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`raw`]       | `RawGraph`, `RawNode`, `RawEdge`: input from map data    |
//! | [`network`]   | `RoadNetwork`, `Node`, `Edge`, `RoadNetworkBuilder`       |
//! | [`router`]    | `Router` trait, `Path`, `DijkstraRouter`                  |
//! | [`synthetic`] | `GridSpec`, `synthetic_grid`: demo/test lattice          |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the raw input types.    |

pub mod error;
pub mod network;
pub mod raw;
pub mod router;
pub mod synthetic;


pub use error::{NetworkError, NetworkResult};
pub use network::{Edge, Node, RoadNetwork, RoadNetworkBuilder};
pub use raw::{RawEdge, RawGraph, RawNode};
pub use router::{DijkstraRouter, Path, Router};
pub use synthetic::{GridSpec, synthetic_grid};
