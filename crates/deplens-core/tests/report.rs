use deplens_core::report::{DependencyReport, RawDependency, ROOT_KEY};

fn sample_report() -> DependencyReport {
    let mut report = DependencyReport::default();
    let mut compile = RawDependency::new("compile");
    compile.children.push(RawDependency {
        label: "org.slf4j:slf4j-api:1.7.5".to_string(),
        omitted: false,
        children: vec![],
    });
    let mut root = RawDependency::new("root");
    root.children.push(compile.clone());
    report.insert(ROOT_KEY, root);
    report.insert("compile", compile);
    report
}

#[test]
fn round_trip_serialize_deserialize() {
    let report = sample_report();
    let serialized = serde_json::to_string_pretty(&report).unwrap();
    let deserialized: DependencyReport = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, report);
}

#[test]
fn serialized_form_is_a_bare_object() {
    let report = sample_report();
    let value: serde_json::Value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();
    // The mapping itself is the document: no wrapper field.
    assert!(object.contains_key("root"));
    assert!(object.contains_key("compile"));
}

#[test]
fn false_omitted_flags_are_not_required_on_input() {
    let json = r#"{"root": {"label": "root", "children": [{"label": "runtime"}]}}"#;
    let report: DependencyReport = serde_json::from_str(json).unwrap();
    let root = report.root().unwrap();
    assert_eq!(root.children[0].label, "runtime");
    assert!(!root.children[0].omitted);
}

#[test]
fn entries_beyond_root_are_preserved() {
    let report = sample_report();
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries.get("compile").unwrap().label, "compile");
}
