//! The raw resolver report: what a build tool hands over before any
//! graph modeling happens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the resolver reports the full dependency tree.
pub const ROOT_KEY: &str = "root";

/// The raw resolver output: a mapping from configuration name (or
/// [`ROOT_KEY`]) to the dependency description reported for it.
///
/// Only the `"root"` entry is consumed when building the graph; resolvers
/// may emit redundant per-configuration entries alongside it and they are
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyReport {
    pub entries: BTreeMap<String, RawDependency>,
}

impl DependencyReport {
    /// The `"root"` entry, if the resolver supplied one.
    pub fn root(&self) -> Option<&RawDependency> {
        self.entries.get(ROOT_KEY)
    }

    pub fn insert(&mut self, key: &str, dependency: RawDependency) {
        self.entries.insert(key.to_string(), dependency);
    }
}

/// One dependency description as reported by the resolver: a display label,
/// the conflict-loser flag, and children in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDependency {
    pub label: String,
    #[serde(default)]
    pub omitted: bool,
    #[serde(default)]
    pub children: Vec<RawDependency>,
}

impl RawDependency {
    /// A dependency with the given label, not omitted, no children yet.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            omitted: false,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_lookup() {
        let mut report = DependencyReport::default();
        assert!(report.root().is_none());

        report.insert(ROOT_KEY, RawDependency::new("root"));
        assert_eq!(report.root().unwrap().label, "root");
    }

    #[test]
    fn omitted_and_children_default_off() {
        let dep: RawDependency = serde_json::from_str(r#"{"label": "org.a:a:1.0"}"#).unwrap();
        assert_eq!(dep.label, "org.a:a:1.0");
        assert!(!dep.omitted);
        assert!(dep.children.is_empty());
    }

    #[test]
    fn report_is_a_transparent_mapping() {
        let json = r#"{
            "root": {"label": "root", "children": [
                {"label": "compile", "children": [
                    {"label": "org.a:a:1.0", "omitted": true}
                ]}
            ]},
            "compile": {"label": "compile"}
        }"#;
        let report: DependencyReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.entries.len(), 2);
        let root = report.root().unwrap();
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].children[0].omitted);
    }
}
