//! GeoJSON conversion and file backend.
//!
//! Each edge becomes a `LineString` feature with properties
//! `u, v, key, traffic, width, highway, name`; each node (if exported) a
//! `Point` feature with properties `id, type = "node"`.  Positions are
//! `[lon, lat]`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use tracing::debug;

use crate::writer::SnapshotWriter;
use crate::{EdgeRecord, ExportResult, NodeRecord, Snapshot};

impl EdgeRecord {
    pub fn to_feature(&self) -> Feature {
        let coordinates = self.coordinates.iter().map(|c| c.to_vec()).collect();
        let mut properties = JsonObject::new();
        properties.insert("u".to_owned(), json!(self.u));
        properties.insert("v".to_owned(), json!(self.v));
        properties.insert("key".to_owned(), json!(self.key));
        properties.insert("traffic".to_owned(), json!(self.traffic));
        properties.insert("width".to_owned(), json!(self.width));
        properties.insert("highway".to_owned(), json!(self.highway));
        properties.insert("name".to_owned(), json!(self.name));

        Feature {
            bbox:            None,
            geometry:        Some(Geometry::new(Value::LineString(coordinates))),
            id:              None,
            properties:      Some(properties),
            foreign_members: None,
        }
    }
}

impl NodeRecord {
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("id".to_owned(), json!(self.id));
        properties.insert("type".to_owned(), json!("node"));

        Feature {
            bbox:            None,
            geometry:        Some(Geometry::new(Value::Point(self.coordinates.to_vec()))),
            id:              None,
            properties:      Some(properties),
            foreign_members: None,
        }
    }
}

impl Snapshot {
    /// Edges first, then nodes.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .edges
            .iter()
            .map(EdgeRecord::to_feature)
            .chain(self.nodes.iter().map(NodeRecord::to_feature))
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> ExportResult<String> {
        Ok(serde_json::to_string(&self.to_geojson())?)
    }
}

/// Writes the latest snapshot to `network.geojson`.
///
/// A FeatureCollection is a single document, so each `write_snapshot`
/// replaces the file contents rather than appending.
pub struct GeoJsonWriter {
    path: PathBuf,
}

impl GeoJsonWriter {
    /// Create `network.geojson` in `dir` (empty until the first snapshot).
    pub fn new(dir: &Path) -> ExportResult<Self> {
        let path = dir.join("network.geojson");
        File::create(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotWriter for GeoJsonWriter {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> ExportResult<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut out, &snapshot.to_geojson())?;
        out.flush()?;
        debug!(path = %self.path.display(), features = snapshot.edges.len() + snapshot.nodes.len(), "geojson written");
        Ok(())
    }

    /// Every write already flushes; nothing is buffered between calls.
    fn finish(&mut self) -> ExportResult<()> {
        Ok(())
    }
}
