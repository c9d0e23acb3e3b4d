//! Radial layout: ranked nodes placed on concentric rings.

use kinship_rank::RankedNode;

use crate::error::Result;
use crate::geometry::{node_size, slot_angle, Canvas, Point};
use crate::partition::{RadialConfig, RingKind};

/// A ranked node with its slot on a ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlacedNode {
    pub node: RankedNode,
    /// Radians from +x, counter-clockwise in canvas math coordinates
    pub angle: f64,
    /// Absolute canvas position
    pub position: Point,
}

/// One concentric ring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ring {
    pub kind: RingKind,
    pub radius: f64,
    pub capacity: usize,
    /// Diameter of every node on this ring
    pub node_size: f64,
    /// Members in rank order
    pub members: Vec<PlacedNode>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Complete ring layout for one canvas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RadialLayout {
    pub canvas: Canvas,
    /// Where the analyzed account is drawn
    pub center: Point,
    pub global_scale: f64,
    /// Innermost first
    pub rings: Vec<Ring>,
}

impl RadialLayout {
    /// Total nodes across all rings.
    pub fn node_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }

    pub fn ring(&self, kind: RingKind) -> Option<&Ring> {
        self.rings.iter().find(|r| r.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// Places ranked lists on rings with a validated configuration.
#[derive(Debug, Clone)]
pub struct RadialPartitioner {
    config: RadialConfig,
}

impl Default for RadialPartitioner {
    fn default() -> Self {
        Self {
            config: RadialConfig::default(),
        }
    }
}

impl RadialPartitioner {
    /// Validate `config` and build a partitioner around it.
    pub fn new(config: RadialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RadialConfig {
        &self.config
    }

    /// Partition `ranked` onto rings sized for `canvas`.
    ///
    /// The best-ranked nodes take the core ring, the next the inner ring and
    /// the rest the outer ring. Nodes past `max_nodes` are dropped; callers
    /// normally pass an already capped list.
    pub fn partition(&self, ranked: &[RankedNode], canvas: Canvas) -> RadialLayout {
        if ranked.len() > self.config.max_nodes {
            tracing::warn!(
                given = ranked.len(),
                max = self.config.max_nodes,
                "radial input exceeds max nodes, truncating"
            );
        }

        let center = canvas.center();
        let global_scale = canvas.global_scale();
        let mut remaining = ranked.iter().take(self.config.max_nodes);

        let rings: Vec<Ring> = self
            .config
            .split(ranked.len())
            .into_iter()
            .map(|share| {
                let radius = canvas.radius(share.kind);
                let members: Vec<PlacedNode> = remaining
                    .by_ref()
                    .take(share.count)
                    .enumerate()
                    .map(|(i, node)| {
                        let angle = slot_angle(i, share.count);
                        PlacedNode {
                            node: node.clone(),
                            angle,
                            position: center + Point::polar(radius, angle),
                        }
                    })
                    .collect();
                Ring {
                    kind: share.kind,
                    radius,
                    capacity: share.capacity,
                    node_size: node_size(share.kind.base_size() * global_scale, radius, members.len()),
                    members,
                }
            })
            .collect();

        tracing::debug!(
            nodes = ranked.len().min(self.config.max_nodes),
            rings = rings.len(),
            split = ?rings.iter().map(Ring::len).collect::<Vec<_>>(),
            "partitioned radial layout"
        );

        RadialLayout {
            canvas,
            center,
            global_scale,
            rings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_core::{Profile, RelationClass};

    fn ranked(n: usize) -> Vec<RankedNode> {
        (0..n)
            .map(|i| RankedNode {
                profile: Profile::new(format!("did:{i}"), format!("u{i}.test")),
                relation: RelationClass::FollowerOnly,
                score: 100.0 - i as f64,
                weight: 0.0,
                last_interaction: None,
                interactions: 0,
                rank: i,
            })
            .collect()
    }

    #[test]
    fn forty_nodes_three_rings() {
        let layout = RadialPartitioner::default().partition(&ranked(40), Canvas::square(600));

        assert_eq!(layout.rings.len(), 3);
        assert_eq!(layout.node_count(), 40);
        assert_eq!(layout.ring(RingKind::Core).unwrap().len(), 6);
        assert_eq!(layout.ring(RingKind::Outer).unwrap().radius, 270.0);
    }

    #[test]
    fn ten_nodes_one_ring() {
        let layout = RadialPartitioner::default().partition(&ranked(10), Canvas::square(600));

        assert_eq!(layout.rings.len(), 1);
        let core = &layout.rings[0];
        assert_eq!(core.kind, RingKind::Core);
        assert_eq!(core.capacity, 20);
        assert_eq!(core.len(), 10);
    }

    #[test]
    fn zero_nodes_no_rings() {
        let layout = RadialPartitioner::default().partition(&[], Canvas::square(600));
        assert!(layout.is_empty());
        assert_eq!(layout.node_count(), 0);
    }

    #[test]
    fn best_ranked_take_the_core() {
        let layout = RadialPartitioner::default().partition(&ranked(20), Canvas::square(600));
        let core = layout.ring(RingKind::Core).unwrap();
        let ranks: Vec<usize> = core.members.iter().map(|m| m.node.rank).collect();
        assert_eq!(ranks, (0..core.len()).collect::<Vec<_>>());
        let inner = layout.ring(RingKind::Inner).unwrap();
        assert_eq!(inner.members[0].node.rank, core.len());
    }

    #[test]
    fn first_member_sits_at_angle_zero() {
        let canvas = Canvas::new(800, 600);
        let layout = RadialPartitioner::default().partition(&ranked(4), canvas);
        let ring = &layout.rings[0];
        let first = &ring.members[0];

        assert_eq!(first.angle, 0.0);
        assert_eq!(first.position, Point::new(400.0 + ring.radius, 300.0));
        for member in &ring.members {
            assert!((member.position.distance(&layout.center) - ring.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn neighbours_never_overlap() {
        for n in [6, 17, 18, 35, 36, 48] {
            let layout = RadialPartitioner::default().partition(&ranked(n), Canvas::square(600));
            for ring in &layout.rings {
                if ring.len() < 2 {
                    continue;
                }
                let gap = ring.members[0].position.distance(&ring.members[1].position);
                let unclipped = ring.kind.base_size() * layout.global_scale;
                // either clear of the neighbour or already at the size floor
                assert!(ring.node_size <= gap || ring.node_size == unclipped * 0.5, "n={n} {:?}", ring.kind);
            }
        }
    }

    #[test]
    fn truncates_past_max() {
        let layout = RadialPartitioner::default().partition(&ranked(60), Canvas::square(600));
        assert_eq!(layout.node_count(), 48);
    }

    #[test]
    fn identical_inputs_identical_layouts() {
        let nodes = ranked(33);
        let a = RadialPartitioner::default().partition(&nodes, Canvas::new(1024, 768));
        let b = RadialPartitioner::default().partition(&nodes, Canvas::new(1024, 768));
        assert_eq!(a, b);
    }
}
