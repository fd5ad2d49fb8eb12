//! Records deserialized from the YAML descriptors of a content tree.
//!
//! Unknown fields are ignored and missing fields take zero values, so a
//! sparse descriptor still loads; blank values are reported later by the
//! completeness checks rather than rejected here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata applicable to all rule content (`config.yaml` at the content root).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalRuleConfig {
    /// Impact name to numeric weight.
    pub impact: BTreeMap<String, i64>,
}

impl GlobalRuleConfig {
    /// Weight of a named impact, if declared.
    pub fn impact_weight(&self, impact: &str) -> Option<i64> {
        self.impact.get(impact).copied()
    }
}

/// Identity of a rule within its ecosystem (`plugin.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulePluginInfo {
    pub name: String,
    pub node_id: String,
    pub product_code: String,
    pub python_module: String,
}

/// Metadata of one error key (`metadata.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorKeyMetadata {
    pub condition: String,
    pub description: String,
    /// Expected to name a key of [`GlobalRuleConfig::impact`].
    pub impact: String,
    /// Opaque integer; no range is enforced.
    pub likelihood: i64,
    pub publish_date: String,
    pub status: String,
    /// Declaration order is preserved; duplicates are a validation defect.
    pub tags: Vec<String>,
}
