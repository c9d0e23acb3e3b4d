//! Kinship Layout
//!
//! Concentric ring layout for a ranked list of counterparts.
//!
//! # Geometry
//!
//! ```text
//! outer radius = 0.45 × min(width, height)
//! inner radius = 0.75 × outer
//! core radius  = 0.45 × outer
//! ```
//!
//! Members of a ring sit at even angular spacing starting from angle 0.
//! Node sizes shrink on crowded rings so neighbours never overlap, down to
//! half their base size.
//!
//! # Determinism
//!
//! The same ranked list, canvas and configuration always produce the same
//! ring assignment, radii, angles and sizes, so layouts can be snapshot
//! tested.

mod error;
mod geometry;
mod partition;
mod radial;

pub use error::{ConfigError, Result};
pub use geometry::{node_size, slot_angle, Canvas, Point};
pub use partition::{RadialConfig, RingBounds, RingKind, RingShare};
pub use radial::{PlacedNode, RadialLayout, RadialPartitioner, Ring};

/// Canvas-independent constants, re-exported for renderers.
pub mod consts {
    pub use crate::geometry::{
        ARC_FILL, CORE_RADIUS_RATIO, INNER_RADIUS_RATIO, MAX_SCALE, MIN_SCALE, MIN_SIZE_RATIO,
        OUTER_RADIUS_RATIO, REFERENCE_EXTENT,
    };
}
