//! `rc-export`: render-ready snapshots of a network and its traffic.
//!
//! [`export`] is a pure projection: one [`EdgeRecord`] per edge (a two-point
//! line in the nodes' original lon/lat) and optionally one [`NodeRecord`] per
//! node.  No graph logic happens here.
//!
//! Two file backends implement [`SnapshotWriter`]:
//!
//! | Writer          | Files created                     |
//! |-----------------|-----------------------------------|
//! | `CsvWriter`     | `edges.csv`, `nodes.csv`          |
//! | `GeoJsonWriter` | `network.geojson`                 |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rc_export::{export, ExportOptions, GeoJsonWriter, SnapshotWriter};
//!
//! let snapshot = export(&network, &traffic, &ExportOptions::default());
//! let mut w = GeoJsonWriter::new(Path::new("./output"))?;
//! w.write_snapshot(&snapshot)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod options;
pub mod record;
pub mod snapshot;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use crate::geojson::GeoJsonWriter;
pub use error::{ExportError, ExportResult};
pub use options::ExportOptions;
pub use record::{EdgeRecord, NodeRecord};
pub use snapshot::{Snapshot, display_width, export};
pub use writer::SnapshotWriter;
