//! Assembled content records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metadata::{ErrorKeyMetadata, GlobalRuleConfig, RulePluginInfo};

/// Content of a single error key directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleErrorKeyContent {
    /// Raw text of `generic.md`.
    pub generic: String,
    pub metadata: ErrorKeyMetadata,
}

/// All content available for one rule directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleContent {
    pub summary: String,
    pub reason: String,
    pub resolution: String,
    pub more_info: String,
    pub plugin: RulePluginInfo,
    /// Keyed by error-key subdirectory name.
    pub error_keys: BTreeMap<String, RuleErrorKeyContent>,
}

/// Content for every rule found under a content root.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleContentDirectory {
    pub config: GlobalRuleConfig,
    /// Keyed by rule directory name.
    pub rules: BTreeMap<String, RuleContent>,
}

impl RuleContentDirectory {
    pub fn rule(&self, rule_id: &str) -> Option<&RuleContent> {
        self.rules.get(rule_id)
    }

    /// Iterate over every `(rule id, error key id, error key)` triple in key order.
    pub fn error_keys(&self) -> impl Iterator<Item = (&str, &str, &RuleErrorKeyContent)> {
        self.rules.iter().flat_map(|(rule_id, rule)| {
            rule.error_keys
                .iter()
                .map(move |(key, content)| (rule_id.as_str(), key.as_str(), content))
        })
    }

    pub fn error_key_count(&self) -> usize {
        self.rules.values().map(|r| r.error_keys.len()).sum()
    }
}
