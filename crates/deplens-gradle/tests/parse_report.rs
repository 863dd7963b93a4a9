//! Full-report parsing through the file source, both formats.

use std::io::Write;

use deplens_core::source::DependencySource;
use deplens_gradle::source::FileSource;
use deplens_gradle::text;

const GRADLE_REPORT: &str = "\
------------------------------------------------------------
Root project 'shop'
------------------------------------------------------------

compileClasspath - Compile classpath for source set 'main'.
+--- org.springframework:spring-core:4.0.5.RELEASE
|    \\--- commons-logging:commons-logging:1.1.3
+--- org.springframework:spring-web:4.0.5.RELEASE
|    +--- org.springframework:spring-core:4.0.5.RELEASE (*)
|    \\--- commons-logging:commons-logging:1.1.1 -> 1.1.3
\\--- com.google.guava:guava:14.0.1

runtimeClasspath - Runtime classpath for source set 'main'.
\\--- org.postgresql:postgresql:42.2.5

(*) - dependencies omitted (listed previously)
";

#[test]
fn gradle_report_parses_into_the_raw_mapping() {
    let report = text::parse_report(GRADLE_REPORT).unwrap();
    let root = report.root().unwrap();
    assert_eq!(root.children.len(), 2);

    let compile = &root.children[0];
    assert_eq!(compile.label, "compileClasspath");
    assert_eq!(compile.children.len(), 3);

    let spring_web = &compile.children[1];
    assert_eq!(spring_web.children.len(), 2);
    // The (*)-marked repeat is a plain occurrence.
    assert!(!spring_web.children[0].omitted);
    // The -> line is a conflict loser at its requested version.
    let logging = &spring_web.children[1];
    assert_eq!(logging.label, "commons-logging:commons-logging:1.1.1");
    assert!(logging.omitted);
}

#[test]
fn file_source_loads_gradle_text() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(GRADLE_REPORT.as_bytes()).unwrap();

    let source = FileSource::new(file.path());
    let report = source.load().unwrap();
    assert_eq!(report.root().unwrap().children.len(), 2);
}

#[test]
fn file_source_loads_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(
        br#"{"root": {"label": "root", "children": [{"label": "compile", "children": [
            {"label": "org.a:a:1.0"}
        ]}]}}"#,
    )
    .unwrap();

    let source = FileSource::new(file.path());
    let report = source.load().unwrap();
    let root = report.root().unwrap();
    assert_eq!(root.children[0].children[0].label, "org.a:a:1.0");
}

#[test]
fn describe_names_the_file() {
    let source = FileSource::new(std::path::Path::new("deps.txt"));
    assert_eq!(source.describe(), "deps.txt");
}
