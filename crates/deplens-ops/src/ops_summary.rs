//! Operation: per-configuration totals and version conflicts.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use console::style;

use deplens_core::coordinate::Coordinate;
use deplens_view::views::ViewNode;

use crate::load_views;

/// A `group:artifact` that appears at more than one version within a
/// configuration's subtree (conflict losers included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub configuration: String,
    pub key: String,
    pub versions: Vec<String>,
}

/// Print occurrence/unique/omitted counts per configuration, then every
/// version conflict found in the raw graph.
pub fn summary(report: &Path) -> miette::Result<()> {
    let views = load_views(report)?;

    println!("{}", style("Configurations").bold());
    for configuration in &views.stats.configurations {
        println!(
            "  {}: {} occurrences, {} unique, {} omitted",
            configuration.name, configuration.occurrences, configuration.unique,
            configuration.omitted
        );
    }

    let conflicts = find_conflicts(&views.hierarchical);
    println!();
    if conflicts.is_empty() {
        println!("No version conflicts.");
    } else {
        println!("{}", style("Version conflicts").bold());
        for conflict in &conflicts {
            println!(
                "  {} ({}): {}",
                conflict.key,
                conflict.configuration,
                conflict.versions.join(", ")
            );
        }
    }
    Ok(())
}

/// Scan the hierarchical view for artifacts resolved at several versions
/// within one configuration. Labels that are not `group:artifact:version`
/// coordinates are skipped.
pub fn find_conflicts(hierarchical: &ViewNode) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for configuration in &hierarchical.children {
        let mut versions: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        let mut stack: Vec<&ViewNode> = configuration.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if let Some(coordinate) = Coordinate::parse(&node.label) {
                versions
                    .entry(coordinate.key())
                    .or_default()
                    .insert(coordinate.version);
            }
            stack.extend(node.children.iter().rev());
        }

        for (key, found) in versions {
            if found.len() > 1 {
                conflicts.push(Conflict {
                    configuration: configuration.label.clone(),
                    key,
                    versions: found.into_iter().collect(),
                });
            }
        }
    }
    conflicts
}
