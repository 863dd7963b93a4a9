//! Parser for Gradle `dependencies` task console output.
//!
//! The report is the text Gradle already printed, not the result of running
//! anything here. Sections look like:
//!
//! ```text
//! compileClasspath - Compile classpath for source set 'main'.
//! +--- org.slf4j:slf4j-api:1.7.5
//! \--- com.google.guava:guava:14.0.1
//!      \--- com.google.code.findbugs:jsr305:1.3.9 -> 2.0.1
//! ```
//!
//! Tree prefixes come in five-column segments (`+--- `, `\--- `, `|    `,
//! five spaces); the segment count is the node's depth. A `-> version`
//! suffix marks a conflict loser: the occurrence keeps its requested
//! coordinates as the label and is flagged omitted. A trailing `(*)`
//! (subtree shown earlier) is repetition, not a conflict, and is left to
//! the view layer's deduplication.

use deplens_core::report::{DependencyReport, RawDependency, ROOT_KEY};
use deplens_util::errors::{DeplensError, DeplensResult};

/// Parse a Gradle dependency report into the raw mapping, synthesizing the
/// `"root"` entry whose children are the configurations (in report order)
/// alongside one entry per configuration.
pub fn parse_report(content: &str) -> DeplensResult<DependencyReport> {
    let mut configurations: Vec<RawDependency> = Vec::new();
    let mut last_depth = 0usize;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        if is_dependency_line(line) {
            let Some(configuration) = configurations.last_mut() else {
                return Err(report_error(
                    line_no,
                    "dependency line before any configuration header",
                ));
            };
            let (depth, entry) = split_prefix(line)
                .ok_or_else(|| report_error(line_no, "malformed tree prefix"))?;
            if depth > last_depth + 1 {
                return Err(report_error(
                    line_no,
                    &format!("depth jumps from {last_depth} to {depth}"),
                ));
            }
            let (label, omitted) = parse_entry(entry);
            attach(configuration, depth, RawDependency { label, omitted, children: Vec::new() })
                .ok_or_else(|| report_error(line_no, "dependency has no parent at this depth"))?;
            last_depth = depth;
            continue;
        }

        if let Some(name) = header_name(line) {
            configurations.push(RawDependency::new(name));
            last_depth = 0;
        }
        // Anything else unindented (banners, separators, the `(*)` legend,
        // `No dependencies`) carries no graph content.
    }

    if configurations.is_empty() {
        return Err(DeplensError::Report {
            message: "no configuration sections found in Gradle report".to_string(),
        }
        .into());
    }

    tracing::debug!(configurations = configurations.len(), "parsed Gradle report");

    let mut report = DependencyReport::default();
    let mut root = RawDependency::new("root");
    for configuration in &configurations {
        report.insert(&configuration.label, configuration.clone());
    }
    root.children = configurations;
    report.insert(ROOT_KEY, root);
    Ok(report)
}

fn report_error(line_no: usize, message: &str) -> miette::Report {
    DeplensError::Report {
        message: format!("line {line_no}: {message}"),
    }
    .into()
}

fn is_dependency_line(line: &str) -> bool {
    line.starts_with("+--- ")
        || line.starts_with("\\--- ")
        || line.starts_with('|')
        || line.starts_with("     ")
}

/// Strip the five-column tree prefix, returning (depth, entry text).
fn split_prefix(line: &str) -> Option<(usize, &str)> {
    let mut rest = line;
    let mut depth = 1;
    loop {
        if let Some(r) = rest.strip_prefix("+--- ").or_else(|| rest.strip_prefix("\\--- ")) {
            return Some((depth, r));
        }
        if let Some(r) = rest.strip_prefix("|    ").or_else(|| rest.strip_prefix("     ")) {
            depth += 1;
            rest = r;
            continue;
        }
        return None;
    }
}

/// A configuration section header: an unindented `name` or
/// `name - description` line. Banner lines (separators, task markers, the
/// repetition legend, build status) are not headers.
fn header_name(line: &str) -> Option<&str> {
    let trimmed = line.trim_end();
    if trimmed.chars().all(|c| c == '-') {
        return None;
    }
    if trimmed.starts_with('>') || trimmed.starts_with('(') {
        return None;
    }
    if trimmed == "No dependencies"
        || trimmed.starts_with("Root project")
        || trimmed.starts_with("BUILD ")
    {
        return None;
    }
    let name = match trimmed.split_once(" - ") {
        Some((name, _description)) => name,
        None => trimmed,
    };
    let name = name.trim();
    if name.is_empty() || name.contains(' ') {
        return None;
    }
    Some(name)
}

/// Interpret one entry: strip trailing state markers, then decode a
/// `-> version` conflict.
///
/// `group:artifact:requested -> resolved` is a loser occurrence: the label
/// stays at the requested coordinates and `omitted` is set. A versionless
/// `group:artifact -> resolved` is not a conflict, just Gradle printing the
/// selected version, so the two halves are joined into a full label.
fn parse_entry(entry: &str) -> (String, bool) {
    let mut label = entry.trim();
    for marker in [" (*)", " (c)", " (n)"] {
        if let Some(stripped) = label.strip_suffix(marker) {
            label = stripped.trim_end();
        }
    }
    if let Some((left, right)) = label.split_once(" -> ") {
        let left = left.trim();
        let right = right.trim();
        if left.split(':').count() >= 3 {
            return (left.to_string(), true);
        }
        return (format!("{left}:{right}"), false);
    }
    (label.to_string(), false)
}

/// Attach a node at `depth` below the configuration by walking the
/// last-child chain. Report lines arrive in pre-order, so the parent is
/// always the most recently attached node one level up.
fn attach(configuration: &mut RawDependency, depth: usize, node: RawDependency) -> Option<()> {
    let mut parent = configuration;
    for _ in 1..depth {
        parent = parent.children.last_mut()?;
    }
    parent.children.push(node);
    Some(())
}
