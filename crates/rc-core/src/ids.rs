//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Node ids are opaque: they come from
//! the map-data source (e.g. OSM node ids) and are never reinterpreted as
//! indices.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw identifier value.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Opaque identifier of a road-network node, stable for the lifetime of
    /// the network it was built into.
    pub struct NodeId(u64);
}

typed_id! {
    /// Handle of one simulation session in a session registry.
    pub struct SessionId(u64);
}

// ── EdgeKey ───────────────────────────────────────────────────────────────────

/// Identity of a directed edge: its endpoints plus a key that tells parallel
/// edges between the same two nodes apart.
///
/// Ordering is `(from, to, key)`, which is also the order edges are stored
/// and iterated in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    pub from: NodeId,
    pub to:   NodeId,
    pub key:  u32,
}

impl EdgeKey {
    #[inline]
    pub fn new(from: NodeId, to: NodeId, key: u32) -> Self {
        Self { from, to, key }
    }

    /// The same road in the opposite direction, with the same key.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { from: self.to, to: self.from, key: self.key }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}#{}", self.from.0, self.to.0, self.key)
    }
}
