//! Output formats for parsed files
//!
//! These are display formats for inspecting parse results; neither writes BVH or VPD back.
//!
//!     listing: one `<Name: pos[X, Y, Z], rot(X, Y, Z, W)>` line per pose record.
//!     tree: pre-order walk of a hierarchy, two spaces of indentation per depth level.
//!     json: pretty-printed serde_json of either result.

pub mod listing;
pub mod tree;

pub use listing::to_listing_str;
pub use tree::to_tree_str;

use serde::Serialize;

/// Output format names accepted by the CLI.
pub const FORMATS: &[&str] = &["text", "json"];

pub fn to_json_str<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
