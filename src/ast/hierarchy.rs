//! Skeletal hierarchy from BVH files.
//!
//! A [`HierarchyNode`] owns its children outright, so a parsed skeleton is a strict tree.
//! Channel and child lists keep the order they were declared in.

use super::math::Vector3;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One animatable degree of freedom of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChannelType {
    Xposition,
    Yposition,
    Zposition,
    Zrotation,
    Yrotation,
    Xrotation,
}

static CHANNEL_LITERALS: Lazy<HashMap<&'static str, ChannelType>> = Lazy::new(|| {
    ChannelType::ALL
        .iter()
        .map(|channel| (channel.as_str(), *channel))
        .collect()
});

impl ChannelType {
    pub const ALL: [ChannelType; 6] = [
        ChannelType::Xposition,
        ChannelType::Yposition,
        ChannelType::Zposition,
        ChannelType::Zrotation,
        ChannelType::Yrotation,
        ChannelType::Xrotation,
    ];

    /// Look up the variant spelled exactly as `literal` (case sensitive).
    pub fn from_literal(literal: &str) -> Option<ChannelType> {
        CHANNEL_LITERALS.get(literal).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Xposition => "Xposition",
            ChannelType::Yposition => "Yposition",
            ChannelType::Zposition => "Zposition",
            ChannelType::Zrotation => "Zrotation",
            ChannelType::Yrotation => "Yrotation",
            ChannelType::Xrotation => "Xrotation",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One joint of a skeleton, or an `End Site` leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyNode {
    name: String,
    offset: Vector3,
    channels: Vec<ChannelType>,
    children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Name given to nodes built from an `End Site` block.
    pub const END_SITE_NAME: &'static str = "End Site";

    pub fn new(
        name: impl Into<String>,
        offset: Vector3,
        channels: Vec<ChannelType>,
        children: Vec<HierarchyNode>,
    ) -> Self {
        Self {
            name: name.into(),
            offset,
            channels,
            children,
        }
    }

    pub fn end_site(offset: Vector3) -> Self {
        Self::new(Self::END_SITE_NAME, offset, Vec::new(), Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> Vector3 {
        self.offset
    }

    pub fn channels(&self) -> &[ChannelType] {
        &self.channels
    }

    pub fn children(&self) -> &[HierarchyNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Visit this node and all descendants in pre-order, passing each node's depth
    /// (this node is depth 0).
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&HierarchyNode, usize),
    {
        self.walk_at(visit, 0);
    }

    fn walk_at<F>(&self, visit: &mut F, depth: usize)
    where
        F: FnMut(&HierarchyNode, usize),
    {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(visit, depth + 1);
        }
    }

    /// Pre-order iterator over `(depth, node)` pairs.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, self)],
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Total channel count across the subtree, i.e. the width of one motion frame.
    pub fn channel_count(&self) -> usize {
        self.iter().map(|(_, node)| node.channels.len()).sum()
    }

    /// First node in pre-order with the given name.
    pub fn find(&self, name: &str) -> Option<&HierarchyNode> {
        self.iter()
            .map(|(_, node)| node)
            .find(|node| node.name == name)
    }
}

impl fmt::Display for HierarchyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}, {}, {}]",
            self.name, self.offset.x, self.offset.y, self.offset.z
        )?;
        for channel in &self.channels {
            f.write_str(channel.as_str())?;
        }
        Ok(())
    }
}

pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a HierarchyNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a HierarchyNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the first child comes off the stack first.
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_tree() -> HierarchyNode {
        HierarchyNode::new(
            "Hips",
            Vector3::ZERO,
            vec![ChannelType::Xposition, ChannelType::Zrotation],
            vec![
                HierarchyNode::new(
                    "Spine",
                    Vector3::new(0.0, 5.0, 0.0),
                    vec![ChannelType::Zrotation],
                    vec![HierarchyNode::end_site(Vector3::new(0.0, 3.0, 0.0))],
                ),
                HierarchyNode::new("LeftLeg", Vector3::new(1.0, -1.0, 0.0), vec![], vec![]),
            ],
        )
    }

    #[rstest]
    #[case("Xposition", Some(ChannelType::Xposition))]
    #[case("Yposition", Some(ChannelType::Yposition))]
    #[case("Zposition", Some(ChannelType::Zposition))]
    #[case("Zrotation", Some(ChannelType::Zrotation))]
    #[case("Yrotation", Some(ChannelType::Yrotation))]
    #[case("Xrotation", Some(ChannelType::Xrotation))]
    #[case("xposition", None)]
    #[case("Wrotation", None)]
    #[case("", None)]
    fn test_channel_lookup(#[case] literal: &str, #[case] expected: Option<ChannelType>) {
        assert_eq!(ChannelType::from_literal(literal), expected);
    }

    #[test]
    fn test_walk_is_pre_order_with_depth() {
        let mut visited = Vec::new();
        sample_tree().walk(&mut |node, depth| visited.push((node.name().to_string(), depth)));
        assert_eq!(
            visited,
            vec![
                ("Hips".to_string(), 0),
                ("Spine".to_string(), 1),
                ("End Site".to_string(), 2),
                ("LeftLeg".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_iter_matches_walk() {
        let tree = sample_tree();
        let mut walked = Vec::new();
        tree.walk(&mut |node, depth| walked.push((depth, node.name().to_string())));
        let iterated: Vec<_> = tree
            .iter()
            .map(|(depth, node)| (depth, node.name().to_string()))
            .collect();
        assert_eq!(walked, iterated);
    }

    #[test]
    fn test_counts_and_find() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.channel_count(), 3);
        assert_eq!(
            tree.find("Spine").map(|n| n.offset()),
            Some(Vector3::new(0.0, 5.0, 0.0))
        );
        assert!(tree.find("Head").is_none());
    }

    #[test]
    fn test_node_display_concatenates_channels() {
        let tree = sample_tree();
        assert_eq!(tree.to_string(), "Hips[0, 0, 0]XpositionZrotation");
        assert_eq!(tree.children()[1].to_string(), "LeftLeg[1, -1, 0]");
    }

    #[test]
    fn test_end_site_is_childless_leaf() {
        let end = HierarchyNode::end_site(Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(end.name(), "End Site");
        assert!(end.channels().is_empty());
        assert!(end.is_leaf());
    }
}
