//! Edge → volume map.
//!
//! Invariant maintained by the closure engine: an assignment paired with a
//! network holds exactly one entry per edge present in that network, and no
//! entry for any other edge.  An absent entry is *not* the same as zero; use
//! [`covers`](TrafficAssignment::covers) to check the pairing.

use std::collections::BTreeMap;

use rc_core::EdgeKey;
use rc_network::RoadNetwork;

/// Non-negative integer traffic volume per edge, in edge-key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrafficAssignment(BTreeMap<EdgeKey, u64>);

impl TrafficAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, edge: EdgeKey) -> Option<u64> {
        self.0.get(&edge).copied()
    }

    /// Volume of `edge`, treating an absent entry as zero.
    pub fn volume(&self, edge: EdgeKey) -> u64 {
        self.get(edge).unwrap_or(0)
    }

    pub fn contains(&self, edge: EdgeKey) -> bool {
        self.0.contains_key(&edge)
    }

    /// Set the volume of `edge`, returning the previous entry.
    pub fn insert(&mut self, edge: EdgeKey, volume: u64) -> Option<u64> {
        self.0.insert(edge, volume)
    }

    /// Drop the entry of `edge`, returning it.
    pub fn remove(&mut self, edge: EdgeKey) -> Option<u64> {
        self.0.remove(&edge)
    }

    /// Add `volume` to `edge`, creating the entry if it was absent.
    /// Saturates at `u64::MAX`.
    pub fn add(&mut self, edge: EdgeKey, volume: u64) -> u64 {
        let entry = self.0.entry(edge).or_insert(0);
        *entry = entry.saturating_add(volume);
        *entry
    }

    /// Sum of all volumes (saturating).
    pub fn total(&self) -> u64 {
        self.0.values().fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, u64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// `true` if the entries are exactly the edges of `network`.
    pub fn covers(&self, network: &RoadNetwork) -> bool {
        self.0.len() == network.edge_count() && self.0.keys().copied().eq(network.edge_keys())
    }
}

impl FromIterator<(EdgeKey, u64)> for TrafficAssignment {
    fn from_iter<I: IntoIterator<Item = (EdgeKey, u64)>>(iter: I) -> Self {
        TrafficAssignment(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TrafficAssignment {
    type Item = (&'a EdgeKey, &'a u64);
    type IntoIter = std::collections::btree_map::Iter<'a, EdgeKey, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
