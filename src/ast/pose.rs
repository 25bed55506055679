//! Pose records from VPD files.

use super::math::{Quaternion, Vector3};
use serde::Serialize;
use std::fmt;

/// One bone's translation and rotation snapshot.
///
/// The `Bone<N>` index that precedes each record in the file is positional only and is not
/// kept; the bone is identified by its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseNode {
    name: String,
    translation: Vector3,
    rotation: Quaternion,
}

impl PoseNode {
    pub fn new(name: impl Into<String>, translation: Vector3, rotation: Quaternion) -> Self {
        Self {
            name: name.into(),
            translation,
            rotation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn translation(&self) -> Vector3 {
        self.translation
    }

    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }
}

impl fmt::Display for PoseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}: pos{}, rot{}>",
            self.name, self.translation, self.rotation
        )
    }
}
