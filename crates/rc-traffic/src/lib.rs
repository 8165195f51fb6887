//! `rc-traffic`: per-edge traffic volumes and their synthetic generation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`assignment`] | `TrafficAssignment`: edge → volume map                  |
//! | [`class`]      | `RoadClass`: classification factor per `highway` label  |
//! | [`centrality`] | sampled edge betweenness (`edge_betweenness`)            |
//! | [`synth`]      | `TrafficSynthesizer`, `Synthesis`                        |
//! | [`error`]      | `TrafficError`, `CentralityError`                        |
//!
//! # Volume model
//!
//! ```text
//! volume = trunc(clamp(base × class_factor × jitter, clamp.min, clamp.max))
//!   base   ~ U{base_volume.min ..= base_volume.max}
//!   jitter ~ U[jitter.min, jitter.max]
//! ```
//!
//! Edge betweenness is computed alongside (and falls back to a uniform score
//! if it cannot be computed) but is not part of the volume formula.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs centrality source passes on Rayon's thread pool.  |

pub mod assignment;
pub mod centrality;
pub mod class;
pub mod error;
pub mod synth;


pub use assignment::TrafficAssignment;
pub use centrality::{EdgeCentrality, edge_betweenness, uniform_centrality};
pub use class::RoadClass;
pub use error::{CentralityError, TrafficError, TrafficResult};
pub use synth::{Synthesis, TrafficSynthesizer};
