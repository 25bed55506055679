//! Parsers for the two file formats
//!
//! Each format has a public entry point that takes the whole file as text and either returns the
//! complete result or a [`ParseError`](crate::error::ParseError):
//!
//!     [parse_pose_data] / [parse_pose_data_with]: VPD header plus exactly the declared number of
//!     bone records.
//!
//!     [parse_hierarchy]: the `HIERARCHY` keyword and the joint tree under the root joint.
//!
//! The combinators that make up each grammar are public as well, so callers can reuse pieces
//! (a single pose record, a single joint) directly.

pub mod hierarchy;
pub mod options;
pub mod pose;

pub use hierarchy::{hierarchy_file, joint, parse_hierarchy};
pub use options::{OwnerFileRule, ParseOptions};
pub use pose::{parse_pose_data, parse_pose_data_with, pose_file, pose_header, pose_record};
