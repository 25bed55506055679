//! Data model shared by the hierarchy (BVH) and pose (VPD) parsers.
//!
//! Every node is built once by a parser and never mutated afterwards, so fields are private
//! and exposed through accessors.

pub mod hierarchy;
pub mod location;
pub mod math;
pub mod pose;

pub use hierarchy::{ChannelType, HierarchyNode, PreOrder};
pub use location::{Position, SourceLocation};
pub use math::{Quaternion, Vector3};
pub use pose::PoseNode;
