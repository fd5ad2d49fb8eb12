//! End-to-end: build a content tree on disk, load it, validate it.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use ccx_content::{validate_content, ContentLoader, Group, LoadedContent};

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// `external/ns1/ruleA` with one error key `EKEY1` tagged `[perf, perf]`.
fn scenario_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(&root.join("config.yaml"), "impact:\n  Performance Impact: 2\n");
    fs::create_dir_all(root.join("internal")).unwrap();

    let rule = root.join("external").join("ns1").join("ruleA");
    write(&rule.join("plugin.yaml"), "name: RuleA\nnode_id: \"1\"\nproduct_code: OCP\npython_module: rules.rule_a\n");
    for file in ["summary.md", "reason.md", "resolution.md", "more_info.md"] {
        write(&rule.join(file), &format!("{file}\n"));
    }
    write(&rule.join("EKEY1").join("generic.md"), "Generic\n");
    write(
        &rule.join("EKEY1").join("metadata.yaml"),
        "condition: c\ndescription: d\nimpact: Performance Impact\nlikelihood: 1\npublish_date: \"2020-01-01\"\nstatus: active\ntags: [perf, perf]\n",
    );
    dir
}

fn load(dir: &TempDir) -> LoadedContent {
    ContentLoader::new(dir.path()).load().unwrap()
}

#[test]
fn duplicate_tag_with_owning_group() {
    let dir = scenario_tree();
    let loaded = load(&dir);

    let rule = &loaded.content.rules["ruleA"];
    assert_eq!(rule.plugin.name, "RuleA");
    assert!(rule.error_keys.contains_key("EKEY1"));

    let report = validate_content(&loaded, &[Group::new("Performance", ["perf"])]);
    assert_eq!(report.tags.duplicates().count(), 1);
    assert_eq!(report.tags.orphans().count(), 0);
    assert_eq!(report.tags.groups_for("ruleA", "EKEY1").unwrap()["perf"], "Performance");
    assert!(report.warnings.is_empty());
}

#[test]
fn duplicate_tag_without_groups() {
    let dir = scenario_tree();
    let loaded = load(&dir);

    let report = validate_content(&loaded, &[]);
    let orphans: Vec<_> = report.tags.orphans().map(|d| d.tag.as_str()).collect();
    assert_eq!(orphans, vec!["perf"]);
    assert_eq!(report.tags.duplicates().count(), 1);
    assert!(report.tags.groups_for("ruleA", "EKEY1").unwrap().is_empty());
    assert_eq!(report.defect_count(), 2);
}
