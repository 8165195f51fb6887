//! Display settings for exported snapshots.

/// How traffic is turned into display attributes.
///
/// `Default` reproduces the reference renderer: width `1.5 + traffic / 150`,
/// placeholder `"Unnamed Road"`, node points included.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    /// Width of an edge with no traffic.
    pub base_width: f64,
    /// Vehicles per additional unit of width.  Anything but a positive finite
    /// value disables scaling: all edges get `base_width`.
    pub width_divisor: f64,
    /// Name exported for edges without one.
    pub unnamed_placeholder: String,
    /// Emit one point record per node.
    pub include_nodes: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            base_width:          1.5,
            width_divisor:       150.0,
            unnamed_placeholder: "Unnamed Road".to_owned(),
            include_nodes:       true,
        }
    }
}

impl ExportOptions {
    pub fn without_nodes(mut self) -> Self {
        self.include_nodes = false;
        self
    }
}
