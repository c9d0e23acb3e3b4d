//! Fixed-slot layering for the tree ("family") view.
//!
//! ```text
//!   parents   following-only top 2      omitted when empty
//!   centre    the account + mutual top 1 always present
//!   children  follower-only top 2       omitted when empty
//! ```
//!
//! Slots are filled from the ranking in tie-break order. A slot with fewer
//! candidates than its capacity is filled partially and never padded.

use kinship_core::{Profile, RelationClass};

use crate::RankedNode;

/// Slot capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FamilySlots {
    /// Following-only counterparts above the account
    pub parents: usize,
    /// Mutual counterparts beside the account
    pub partner: usize,
    /// Follower-only counterparts below the account
    pub children: usize,
}

impl Default for FamilySlots {
    fn default() -> Self {
        Self {
            parents: 2,
            partner: 1,
            children: 2,
        }
    }
}

/// Which layer of the family view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayerKind {
    Parents,
    Center,
    Children,
}

/// A node in a family layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "role", rename_all = "snake_case"))]
pub enum FamilyMember {
    /// The analyzed account itself
    Account { profile: Profile },
    /// A ranked counterpart
    Ranked { node: RankedNode },
}

impl FamilyMember {
    pub fn profile(&self) -> &Profile {
        match self {
            Self::Account { profile } => profile,
            Self::Ranked { node } => &node.profile,
        }
    }
}

/// One horizontal layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layer {
    pub kind: LayerKind,
    pub members: Vec<FamilyMember>,
}

/// The family view: parents, centre, children, top to bottom.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FamilyTree {
    layers: Vec<Layer>,
}

impl FamilyTree {
    /// Fill the slots from `ranked`, which must already be in tie-break order.
    pub fn build(account: &Profile, ranked: &[RankedNode], slots: &FamilySlots) -> Self {
        let top = |class: RelationClass, capacity: usize| -> Vec<FamilyMember> {
            ranked
                .iter()
                .filter(|n| n.relation == class && n.id() != &account.id)
                .take(capacity)
                .map(|n| FamilyMember::Ranked { node: n.clone() })
                .collect()
        };

        let parents = top(RelationClass::FollowingOnly, slots.parents);
        let children = top(RelationClass::FollowerOnly, slots.children);

        let mut center = vec![FamilyMember::Account {
            profile: account.clone(),
        }];
        center.extend(top(RelationClass::Mutual, slots.partner));

        let mut layers = Vec::with_capacity(3);
        if !parents.is_empty() {
            layers.push(Layer {
                kind: LayerKind::Parents,
                members: parents,
            });
        }
        layers.push(Layer {
            kind: LayerKind::Center,
            members: center,
        });
        if !children.is_empty() {
            layers.push(Layer {
                kind: LayerKind::Children,
                members: children,
            });
        }

        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Top mutual counterpart, if any.
    pub fn partner(&self) -> Option<&RankedNode> {
        self.layer(LayerKind::Center)?.members.iter().find_map(|m| match m {
            FamilyMember::Ranked { node } => Some(node),
            FamilyMember::Account { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tie_break;

    fn account() -> Profile {
        Profile::new("did:me", "me.test")
    }

    fn node(name: &str, relation: RelationClass, score: f64) -> RankedNode {
        RankedNode {
            profile: Profile::new(format!("did:{name}"), format!("{name}.test")),
            relation,
            score,
            weight: 0.0,
            last_interaction: None,
            interactions: 0,
            rank: 0,
        }
    }

    fn ids(layer: &Layer) -> Vec<&str> {
        layer.members.iter().map(|m| m.profile().id.as_str()).collect()
    }

    #[test]
    fn five_following_only_fill_two_parents() {
        let mut ranked: Vec<_> = (0..5)
            .map(|i| node(&format!("f{i}"), RelationClass::FollowingOnly, 100.0 + f64::from(i)))
            .collect();
        ranked.sort_by(tie_break);

        let tree = FamilyTree::build(&account(), &ranked, &FamilySlots::default());

        let parents = tree.layer(LayerKind::Parents).unwrap();
        assert_eq!(ids(parents), ["did:f4", "did:f3"]);
        assert!(tree.layer(LayerKind::Children).is_none());
        assert_eq!(tree.layers().len(), 2);
    }

    #[test]
    fn centre_always_present() {
        let tree = FamilyTree::build(&account(), &[], &FamilySlots::default());

        assert_eq!(tree.layers().len(), 1);
        let center = tree.layer(LayerKind::Center).unwrap();
        assert_eq!(ids(center), ["did:me"]);
        assert!(tree.partner().is_none());
    }

    #[test]
    fn partner_joins_centre() {
        let ranked = vec![
            node("m1", RelationClass::Mutual, 160.0),
            node("m2", RelationClass::Mutual, 155.0),
            node("c1", RelationClass::FollowerOnly, 51.0),
        ];
        let tree = FamilyTree::build(&account(), &ranked, &FamilySlots::default());

        assert_eq!(ids(tree.layer(LayerKind::Center).unwrap()), ["did:me", "did:m1"]);
        assert_eq!(tree.partner().unwrap().id().as_str(), "did:m1");
        assert_eq!(ids(tree.layer(LayerKind::Children).unwrap()), ["did:c1"]);
        assert_eq!(
            tree.layers().iter().map(|l| l.kind).collect::<Vec<_>>(),
            [LayerKind::Center, LayerKind::Children]
        );
    }

    #[test]
    fn strangers_never_fill_slots() {
        let ranked = vec![node("s1", RelationClass::None, 40.0)];
        let tree = FamilyTree::build(&account(), &ranked, &FamilySlots::default());
        assert_eq!(tree.layers().len(), 1);
    }
}
