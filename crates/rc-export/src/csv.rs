//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `edges.csv`
//! - `nodes.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::SnapshotWriter;
use crate::{EdgeRecord, ExportResult, NodeRecord, Snapshot};

/// Writes snapshots to two CSV files.  Successive snapshots are appended.
pub struct CsvWriter {
    edges:    Writer<File>,
    nodes:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> ExportResult<Self> {
        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["u", "v", "key", "traffic", "width", "highway", "name"])?;

        let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
        nodes.write_record(["id", "lon", "lat"])?;

        Ok(Self { edges, nodes, finished: false })
    }

    fn write_edges(&mut self, rows: &[EdgeRecord]) -> ExportResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.u.to_string(),
                row.v.to_string(),
                row.key.to_string(),
                row.traffic.to_string(),
                format!("{:.4}", row.width),
                row.highway.clone().unwrap_or_default(),
                row.name.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_nodes(&mut self, rows: &[NodeRecord]) -> ExportResult<()> {
        for row in rows {
            self.nodes.write_record(&[
                row.id.to_string(),
                row.coordinates[0].to_string(),
                row.coordinates[1].to_string(),
            ])?;
        }
        Ok(())
    }
}

impl SnapshotWriter for CsvWriter {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> ExportResult<()> {
        self.write_edges(&snapshot.edges)?;
        self.write_nodes(&snapshot.nodes)
    }

    fn finish(&mut self) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.edges.flush()?;
        self.nodes.flush()?;
        Ok(())
    }
}
