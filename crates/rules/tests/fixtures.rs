//! Integration tests that load the sample content tree in `data/content/`
//! and validate it against `data/groups_config.yaml`.

use std::path::PathBuf;

use ccx_content::validation::TagDefectKind;
use ccx_content::{parse_group_config_file, validate_content, ContentLoader};

/// Integration tests run from the crate directory, so we go up two levels.
fn data_dir() -> PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../data")
}

#[test]
fn sample_content_loads() {
    let loaded = ContentLoader::new(data_dir().join("content")).load().unwrap();
    let content = &loaded.content;

    assert!(loaded.collisions.is_empty());
    assert_eq!(
        content.rules.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["cluster_wide_proxy", "image_registry_storage", "node_kubelet_version"]
    );
    assert_eq!(content.error_key_count(), 4);
    assert_eq!(content.config.impact_weight("Data Loss"), Some(4));

    let proxy = &content.rules["cluster_wide_proxy"];
    assert_eq!(proxy.plugin.node_id, "1002");
    assert_eq!(proxy.summary, "The cluster-wide proxy configuration is incomplete.\n");
    let ekey = &proxy.error_keys["AUTH_OPERATOR_PROXY_ERROR"];
    assert_eq!(ekey.metadata.impact, "Application Hang");
    assert_eq!(ekey.metadata.likelihood, 3);
    assert_eq!(ekey.metadata.tags, vec!["networking", "perf"]);
}

#[test]
fn sample_content_validates() {
    let groups = parse_group_config_file(data_dir().join("groups_config.yaml")).unwrap();
    assert_eq!(groups.len(), 4);

    let loaded = ContentLoader::new(data_dir().join("content")).load().unwrap();
    let report = validate_content(&loaded, &groups);

    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(report.tags.error_keys.len(), 4);
    assert_eq!(report.tags.defects.len(), 1);
    let orphan = &report.tags.defects[0];
    assert_eq!(orphan.kind, TagDefectKind::OrphanTag);
    assert_eq!(orphan.rule_id, "image_registry_storage");
    assert_eq!(orphan.tag, "registry");

    let resolved = report
        .tags
        .groups_for("node_kubelet_version", "NODE_KUBELET_VERSION")
        .unwrap();
    assert_eq!(resolved["node"], "Nodes");
    assert_eq!(resolved["fault_tolerance"], "Fault Tolerance");
}
