//! Road classification factors.

/// Capacity class derived from an OSM-style `highway` label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoadClass {
    /// `motorway`, `trunk`, `primary` and their `_link` variants.
    High,
    /// `secondary`, `tertiary` and their `_link` variants.
    Medium,
    /// Everything else, including a missing label.
    Other,
}

impl RoadClass {
    /// Classify a label.  Surrounding whitespace is ignored; matching is
    /// otherwise exact.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return RoadClass::Other;
        };
        let base = label.trim();
        let base = base.strip_suffix("_link").unwrap_or(base);
        match base {
            "motorway" | "trunk" | "primary" => RoadClass::High,
            "secondary" | "tertiary"         => RoadClass::Medium,
            _                                => RoadClass::Other,
        }
    }

    /// Multiplier applied to the base volume.
    pub fn factor(self) -> f64 {
        match self {
            RoadClass::High   => 3.0,
            RoadClass::Medium => 2.0,
            RoadClass::Other  => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoadClass::High   => "high",
            RoadClass::Medium => "medium",
            RoadClass::Other  => "other",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
