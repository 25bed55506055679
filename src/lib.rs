//! # mocap-text
//!
//! Parsers for two motion-capture text formats:
//!
//! - BVH skeletal hierarchies: a tree of joints with offsets and animation channels, parsed by
//!   [parse_hierarchy] into a [HierarchyNode].
//! - VPD pose data: a header declaring a bone count followed by that many bone records with a
//!   translation and a rotation, parsed by [parse_pose_data] into a list of [PoseNode].
//!
//! Parsing is synchronous and works on text already held in memory. Choosing the text encoding
//! (VPD files are usually Shift_JIS) is the caller's job; the `mocap` binary does it with
//! `encoding_rs`.

pub mod ast;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;

pub use ast::{ChannelType, HierarchyNode, PoseNode, Position, Quaternion, Vector3};
pub use error::ParseError;
pub use parsing::{
    parse_hierarchy, parse_pose_data, parse_pose_data_with, OwnerFileRule, ParseOptions,
};
