//! Canvas geometry: ring radii, angular placement and node sizing.
//!
//! All lengths are in canvas units (pixels for a raster renderer). The
//! outermost ring touches 45% of the smaller canvas extent so the layout
//! keeps a margin on every side regardless of aspect ratio.

use std::f64::consts::TAU;
use std::ops::Add;

use crate::RingKind;

/// Outer ring radius as a fraction of the smaller canvas extent.
pub const OUTER_RADIUS_RATIO: f64 = 0.45;

/// Inner ring radius as a fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f64 = 0.75;

/// Core ring radius as a fraction of the outer radius.
pub const CORE_RADIUS_RATIO: f64 = 0.45;

/// Canvas extent at which nodes render at their base size.
pub const REFERENCE_EXTENT: f64 = 600.0;

/// Bounds on the canvas-wide scale factor.
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 1.2;

/// Share of the per-node arc a node may occupy.
pub const ARC_FILL: f64 = 0.7;

/// Smallest size a node is clipped to, relative to its scaled base size.
pub const MIN_SIZE_RATIO: f64 = 0.5;

/// Target drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square canvas.
    pub const fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }

    /// The smaller of width and height.
    pub fn min_extent(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Radius of the outermost ring.
    pub fn outer_radius(&self) -> f64 {
        OUTER_RADIUS_RATIO * self.min_extent()
    }

    /// Radius for a ring kind.
    pub fn radius(&self, kind: RingKind) -> f64 {
        let outer = self.outer_radius();
        match kind {
            RingKind::Core => CORE_RADIUS_RATIO * outer,
            RingKind::Inner => INNER_RADIUS_RATIO * outer,
            RingKind::Outer => outer,
        }
    }

    /// Canvas-wide node scale: `clamp(min_extent / 600, 0.5, 1.2)`.
    pub fn global_scale(&self) -> f64 {
        (self.min_extent() / REFERENCE_EXTENT).clamp(MIN_SCALE, MAX_SCALE)
    }
}

/// A position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset by `radius` along `angle` (radians, 0 = +x).
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Angle of slot `index` on a ring of `ring_size` evenly spaced slots.
pub fn slot_angle(index: usize, ring_size: usize) -> f64 {
    if ring_size == 0 {
        return 0.0;
    }
    index as f64 / ring_size as f64 * TAU
}

/// Node size on a ring, clipped so neighbours cannot overlap.
///
/// `min(base, arc × 0.7)` floored at half of `base`, where `arc` is the ring
/// circumference divided by the member count.
pub fn node_size(base: f64, radius: f64, ring_size: usize) -> f64 {
    if ring_size == 0 {
        return base;
    }
    let arc = TAU * radius / ring_size as f64;
    base.min(arc * ARC_FILL).max(base * MIN_SIZE_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_follow_min_extent() {
        let canvas = Canvas::new(800, 600);
        assert_eq!(canvas.outer_radius(), 270.0);
        assert_eq!(canvas.radius(RingKind::Inner), 202.5);
        assert!((canvas.radius(RingKind::Core) - 121.5).abs() < 1e-9);
    }

    #[test]
    fn global_scale_is_clamped() {
        assert_eq!(Canvas::square(600).global_scale(), 1.0);
        assert_eq!(Canvas::square(100).global_scale(), 0.5);
        assert_eq!(Canvas::square(2000).global_scale(), 1.2);
        assert_eq!(Canvas::new(1200, 450).global_scale(), 0.75);
    }

    #[test]
    fn angles_spread_evenly() {
        assert_eq!(slot_angle(0, 4), 0.0);
        assert!((slot_angle(1, 4) - TAU / 4.0).abs() < 1e-12);
        assert!((slot_angle(3, 4) - 3.0 * TAU / 4.0).abs() < 1e-12);
        assert_eq!(slot_angle(0, 0), 0.0);
    }

    #[test]
    fn roomy_ring_keeps_base_size() {
        // circumference ≈ 1696, 4 nodes → arc ≈ 424
        assert_eq!(node_size(36.0, 270.0, 4), 36.0);
    }

    #[test]
    fn crowded_ring_is_clipped() {
        // arc = 2π·100/20 ≈ 31.4, × 0.7 ≈ 22.0
        let size = node_size(36.0, 100.0, 20);
        assert!((size - TAU * 100.0 / 20.0 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn clipping_floors_at_half_base() {
        assert_eq!(node_size(36.0, 10.0, 24), 18.0);
        assert_eq!(node_size(36.0, 0.0, 1), 18.0);
    }

    #[test]
    fn polar_offsets() {
        let p = Canvas::square(200).center() + Point::polar(50.0, 0.0);
        assert_eq!(p, Point::new(150.0, 100.0));
        assert!((p.distance(&Point::new(100.0, 100.0)) - 50.0).abs() < 1e-12);
    }
}
