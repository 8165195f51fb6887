//! Traffic synthesis configuration.
//!
//! `Default` reproduces the reference constants:
//!
//! | Field               | Default        |
//! |---------------------|----------------|
//! | `base_volume`       | `50..=200`     |
//! | `jitter`            | `[0.8, 1.2]`   |
//! | `volume_clamp`      | `[10, 1000]`   |
//! | `centrality_sample` | `100`          |
//! | `seed`              | `42`           |
//!
//! With the `serde` feature every field is optional in a config file; missing
//! fields take their default.

use crate::{CoreError, CoreResult};

/// Inclusive integer range of vehicle volumes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeRange {
    pub min: u64,
    pub max: u64,
}

impl VolumeRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: u64) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// Inclusive range of a multiplicative factor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorRange {
    pub min: f64,
    pub max: f64,
}

impl FactorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Constants of the synthetic traffic model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrafficConfig {
    /// Range the per-edge base volume is drawn from (uniform, inclusive).
    pub base_volume: VolumeRange,

    /// Range the per-edge random multiplier is drawn from (uniform).
    pub jitter: FactorRange,

    /// Final volumes are clamped into this range, then truncated.
    pub volume_clamp: VolumeRange,

    /// Upper bound on source nodes sampled for edge betweenness.  Caps the
    /// centrality cost independently of network size.
    pub centrality_sample: usize,

    /// Seed for the session RNG.  The same seed always produces identical
    /// traffic on the same network.
    pub seed: u64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            base_volume:       VolumeRange::new(50, 200),
            jitter:            FactorRange::new(0.8, 1.2),
            volume_clamp:      VolumeRange::new(10, 1000),
            centrality_sample: 100,
            seed:              42,
        }
    }
}

impl TrafficConfig {
    /// Reject configurations the synthesizer cannot draw from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_volume.min > self.base_volume.max {
            return Err(CoreError::Config(format!(
                "base_volume min {} exceeds max {}",
                self.base_volume.min, self.base_volume.max
            )));
        }
        if self.volume_clamp.min > self.volume_clamp.max {
            return Err(CoreError::Config(format!(
                "volume_clamp min {} exceeds max {}",
                self.volume_clamp.min, self.volume_clamp.max
            )));
        }
        let FactorRange { min, max } = self.jitter;
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(CoreError::Config(format!(
                "jitter range [{min}, {max}] must be finite, non-negative and ordered"
            )));
        }
        if self.centrality_sample == 0 {
            return Err(CoreError::Config("centrality_sample must be at least 1".into()));
        }
        Ok(())
    }
}
