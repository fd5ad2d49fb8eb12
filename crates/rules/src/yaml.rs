//! YAML metadata deserialization.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ContentError, Result};

/// Decode a YAML buffer into a metadata record.
///
/// An empty or whitespace-only document yields `T::default()`. Format
/// errors are tagged with the logical file name and path supplied by the
/// caller.
pub fn from_yaml_bytes<T>(bytes: &[u8], file: &str, path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_yaml::from_slice(bytes).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ErrorKeyMetadata, GlobalRuleConfig, RulePluginInfo};

    #[test]
    fn decodes_plugin_info() {
        let yaml = b"name: Node Degraded\nnode_id: \"1234\"\nproduct_code: OCP\npython_module: ccx_rules_ocp.external.rules.nodes\n";
        let plugin: RulePluginInfo =
            from_yaml_bytes(yaml, "plugin.yaml", Path::new("rule/plugin.yaml")).unwrap();
        assert_eq!(plugin.name, "Node Degraded");
        assert_eq!(plugin.node_id, "1234");
        assert_eq!(plugin.python_module, "ccx_rules_ocp.external.rules.nodes");
    }

    #[test]
    fn empty_document_is_default() {
        let meta: ErrorKeyMetadata =
            from_yaml_bytes(b"  \n", "metadata.yaml", Path::new("k/metadata.yaml")).unwrap();
        assert_eq!(meta, ErrorKeyMetadata::default());
    }

    #[test]
    fn malformed_document_names_file() {
        let err = from_yaml_bytes::<GlobalRuleConfig>(
            b"impact: [unclosed",
            "config.yaml",
            Path::new("/content/config.yaml"),
        )
        .unwrap_err();
        assert_eq!(err.file(), Some("config.yaml"));
        assert!(err.to_string().contains("/content/config.yaml"));
        assert!(matches!(err, ContentError::Parse { .. }));
    }
}
