//! Ring count and ring membership.
//!
//! # Modes
//!
//! With the default bounds (`core 6..=8`, `inner 12..=16`, `outer 18..=24`):
//!
//! | Nodes     | Rings | Split                                            |
//! |-----------|-------|--------------------------------------------------|
//! | 36..=48   | 3     | 15% core, 35% inner, rest outer, within bounds    |
//! | 18..36    | 2     | 40% core (at most 10), rest inner                 |
//! | 6..18     | 1     | all in core (at most 20)                          |
//! | 1..6      | 1     | best-effort core (at most 12)                     |
//! | 0         | 0     |                                                  |
//!
//! Mode thresholds are the sums of ring minimums: three rings need
//! `core.min + inner.min + outer.min` nodes, two need `core.min + inner.min`.
//!
//! # Totality
//!
//! For a validated configuration the split always sums to the node count:
//! three-ring proportional counts that overflow or underflow the outer ring
//! are rebalanced through the inner ring first, then the core. When raised
//! minimums push core and inner past the node count, the excess comes back
//! out of inner, then core. A ring left with no members is omitted.

use crate::error::{ConfigError, Result};

const THREE_RING_CORE_SHARE: f64 = 0.15;
const THREE_RING_INNER_SHARE: f64 = 0.35;
const TWO_RING_CORE_SHARE: f64 = 0.40;

/// Position of a ring, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RingKind {
    Core,
    Inner,
    Outer,
}

impl RingKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Inner => "inner",
            Self::Outer => "outer",
        }
    }

    /// Node size at global scale 1.0.
    pub const fn base_size(&self) -> f64 {
        match self {
            Self::Core => 36.0,
            Self::Inner => 30.0,
            Self::Outer => 24.0,
        }
    }
}

impl std::fmt::Display for RingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum and cap for one ring in three-ring mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingBounds {
    pub min: usize,
    pub cap: usize,
}

impl RingBounds {
    pub const fn new(min: usize, cap: usize) -> Self {
        Self { min, cap }
    }

    fn clamp(&self, count: usize) -> usize {
        count.clamp(self.min, self.cap)
    }
}

/// Ring thresholds and capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RadialConfig {
    /// Most nodes a layout places; longer inputs are truncated
    pub max_nodes: usize,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "bounds::core"))]
    pub core: RingBounds,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "bounds::inner"))]
    pub inner: RingBounds,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "bounds::outer"))]
    pub outer: RingBounds,
    /// Core cap in two-ring mode
    pub two_ring_core_cap: usize,
    /// Cap of the single ring
    pub single_ring_cap: usize,
    /// Cap of the best-effort ring below `core.min`
    pub sparse_ring_cap: usize,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            max_nodes: 48,
            core: RingBounds::new(6, 8),
            inner: RingBounds::new(12, 16),
            outer: RingBounds::new(18, 24),
            two_ring_core_cap: 10,
            single_ring_cap: 20,
            sparse_ring_cap: 12,
        }
    }
}

impl RadialConfig {
    /// Fewest nodes that get two rings.
    pub const fn two_ring_threshold(&self) -> usize {
        self.core.min + self.inner.min
    }

    /// Fewest nodes that get three rings.
    pub const fn three_ring_threshold(&self) -> usize {
        self.core.min + self.inner.min + self.outer.min
    }

    /// Check that every mode can hold every count that selects it.
    pub fn validate(&self) -> Result<()> {
        for (ring, bounds) in [
            (RingKind::Core, self.core),
            (RingKind::Inner, self.inner),
            (RingKind::Outer, self.outer),
        ] {
            if bounds.min > bounds.cap {
                return Err(ConfigError::MinimumExceedsCap {
                    ring,
                    min: bounds.min,
                    cap: bounds.cap,
                });
            }
        }

        let three_ring_capacity = self.core.cap + self.inner.cap + self.outer.cap;
        if self.max_nodes > three_ring_capacity {
            return Err(ConfigError::CapacityTooSmall {
                mode: "three-ring",
                capacity: three_ring_capacity,
                required: self.max_nodes,
            });
        }
        if self.single_ring_cap + 1 < self.two_ring_threshold() {
            return Err(ConfigError::CapacityTooSmall {
                mode: "single-ring",
                capacity: self.single_ring_cap,
                required: self.two_ring_threshold() - 1,
            });
        }
        if self.sparse_ring_cap + 1 < self.core.min {
            return Err(ConfigError::CapacityTooSmall {
                mode: "best-effort",
                capacity: self.sparse_ring_cap,
                required: self.core.min - 1,
            });
        }
        Ok(())
    }

    /// Member count and capacity per ring for `count` nodes, innermost first.
    ///
    /// `count` above `max_nodes` is treated as `max_nodes`.
    pub fn split(&self, count: usize) -> Vec<RingShare> {
        let n = count.min(self.max_nodes);

        if n == 0 {
            Vec::new()
        } else if n >= self.three_ring_threshold() {
            let [core, inner, outer] = self.three_ring_counts(n);
            // rings with a zero minimum may end up empty; leave them out
            [
                RingShare::new(RingKind::Core, core, self.core.cap),
                RingShare::new(RingKind::Inner, inner, self.inner.cap),
                RingShare::new(RingKind::Outer, outer, self.outer.cap),
            ]
            .into_iter()
            .filter(|s| s.count > 0)
            .collect()
        } else if n >= self.two_ring_threshold() {
            let core = share(n, TWO_RING_CORE_SHARE).min(self.two_ring_core_cap).min(n);
            // the inner ring takes whatever is left before three rings kick in
            let inner_capacity = (self.three_ring_threshold() - 1).saturating_sub(core);
            vec![
                RingShare::new(RingKind::Core, core, self.two_ring_core_cap),
                RingShare::new(RingKind::Inner, n - core, inner_capacity.max(n - core)),
            ]
        } else if n >= self.core.min {
            vec![RingShare::new(RingKind::Core, n.min(self.single_ring_cap), self.single_ring_cap)]
        } else {
            vec![RingShare::new(RingKind::Core, n.min(self.sparse_ring_cap), self.sparse_ring_cap)]
        }
    }

    fn three_ring_counts(&self, n: usize) -> [usize; 3] {
        let mut core = self.core.clamp(share(n, THREE_RING_CORE_SHARE));
        let mut inner = self.inner.clamp(share(n, THREE_RING_INNER_SHARE));

        // raised minimums can overshoot n; give back from inner, then core
        let mut excess = (core + inner).saturating_sub(n);
        for (count, bounds) in [(&mut inner, self.inner), (&mut core, self.core)] {
            let moved = excess.min(*count - bounds.min);
            *count -= moved;
            excess -= moved;
        }

        let mut outer = n - (core + inner);

        if outer > self.outer.cap {
            let mut spill = outer - self.outer.cap;
            outer = self.outer.cap;
            for (count, bounds) in [(&mut inner, self.inner), (&mut core, self.core)] {
                let moved = spill.min(bounds.cap - *count);
                *count += moved;
                spill -= moved;
            }
        } else if outer < self.outer.min {
            let mut need = self.outer.min - outer;
            for (count, bounds) in [(&mut inner, self.inner), (&mut core, self.core)] {
                let moved = need.min(*count - bounds.min);
                *count -= moved;
                outer += moved;
                need -= moved;
            }
        }

        [core, inner, outer]
    }
}

/// Ring bounds that may name only `min` or only `cap`; the other half
/// keeps that ring's default.
#[cfg(feature = "serde")]
mod bounds {
    use serde::{Deserialize, Deserializer};

    use super::{RadialConfig, RingBounds};

    #[derive(Deserialize)]
    struct Partial {
        min: Option<usize>,
        cap: Option<usize>,
    }

    fn merge<'de, D: Deserializer<'de>>(deserializer: D, fallback: RingBounds) -> Result<RingBounds, D::Error> {
        let partial = Partial::deserialize(deserializer)?;
        Ok(RingBounds::new(
            partial.min.unwrap_or(fallback.min),
            partial.cap.unwrap_or(fallback.cap),
        ))
    }

    pub(super) fn core<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RingBounds, D::Error> {
        merge(deserializer, RadialConfig::default().core)
    }

    pub(super) fn inner<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RingBounds, D::Error> {
        merge(deserializer, RadialConfig::default().inner)
    }

    pub(super) fn outer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RingBounds, D::Error> {
        merge(deserializer, RadialConfig::default().outer)
    }
}

/// Rounded proportional share of `n`.
fn share(n: usize, fraction: f64) -> usize {
    (n as f64 * fraction).round() as usize
}

/// How many nodes one ring receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingShare {
    pub kind: RingKind,
    pub count: usize,
    pub capacity: usize,
}

impl RingShare {
    const fn new(kind: RingKind, count: usize, capacity: usize) -> Self {
        Self { kind, count, capacity }
    }
}
