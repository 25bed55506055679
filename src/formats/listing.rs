use crate::ast::PoseNode;

pub fn to_listing_str(poses: &[PoseNode]) -> String {
    let mut result = String::new();
    for pose in poses {
        result.push_str(&pose.to_string());
        result.push('\n');
    }
    result
}
