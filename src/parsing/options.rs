//! Parser configuration.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static OSM_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+\.osm$").expect("owner file pattern is valid"));

/// Which owner-file references a pose header may carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnerFileRule {
    /// Only this exact file name.
    Exact(String),
    /// Any file name ending in `.osm`.
    AnyOsm,
}

impl OwnerFileRule {
    pub const DEFAULT_OWNER: &'static str = "miku.osm";

    pub fn accepts(&self, file_name: &str) -> bool {
        match self {
            OwnerFileRule::Exact(expected) => file_name == expected,
            OwnerFileRule::AnyOsm => OSM_FILE_NAME.is_match(file_name),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OwnerFileRule::Exact(expected) => format!("'{}'", expected),
            OwnerFileRule::AnyOsm => "a '.osm' file name".to_string(),
        }
    }
}

impl Default for OwnerFileRule {
    fn default() -> Self {
        OwnerFileRule::Exact(Self::DEFAULT_OWNER.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub owner_file: OwnerFileRule,
}

impl ParseOptions {
    pub fn with_owner_file(mut self, rule: OwnerFileRule) -> Self {
        self.owner_file = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_only_miku() {
        let rule = OwnerFileRule::default();
        assert!(rule.accepts("miku.osm"));
        assert!(!rule.accepts("luka.osm"));
        assert!(!rule.accepts("miku.osm;"));
    }

    #[test]
    fn test_any_osm() {
        let rule = OwnerFileRule::AnyOsm;
        assert!(rule.accepts("miku.osm"));
        assert!(rule.accepts("初音ミク.osm"));
        assert!(!rule.accepts(".osm"));
        assert!(!rule.accepts("model.pmd"));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());

        let options: ParseOptions = serde_json::from_str(r#"{"owner_file": "any-osm"}"#).unwrap();
        assert_eq!(options.owner_file, OwnerFileRule::AnyOsm);

        let options: ParseOptions =
            serde_json::from_str(r#"{"owner_file": {"exact": "luka.osm"}}"#).unwrap();
        assert!(options.owner_file.accepts("luka.osm"));
    }
}
