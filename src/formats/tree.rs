//! Indented hierarchy tree
//!
//! One line per node in pre-order, indented two spaces per level of nesting:
//!
//! ```text
//! Hips[0, 0, 0]XpositionYpositionZposition
//!   Chest[0, 5.21, 0]ZrotationXrotationYrotation
//!     End Site[0, 7, 0]
//! ```

use crate::ast::HierarchyNode;

const INDENT: &str = "  ";

pub fn to_tree_str(root: &HierarchyNode) -> String {
    let mut result = String::new();
    root.walk(&mut |node, depth| {
        result.push_str(&INDENT.repeat(depth));
        result.push_str(&node.to_string());
        result.push('\n');
    });
    result
}
