//! The `SnapshotWriter` trait implemented by all file backends.

use crate::{ExportResult, Snapshot};

/// Trait implemented by the CSV and GeoJSON writers.
pub trait SnapshotWriter {
    /// Write one snapshot.
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> ExportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> ExportResult<()>;
}
