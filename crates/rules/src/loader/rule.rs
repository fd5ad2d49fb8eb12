//! Parsing of a single rule directory and its error key subdirectories.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::files::{read_files_bytes, read_files_string, take};
use crate::schema::{ErrorKeyMetadata, RuleContent, RuleErrorKeyContent, RulePluginInfo};
use crate::yaml::from_yaml_bytes;

use super::walk::list_subdirectories;
use super::{GENERIC_FILE, METADATA_FILE, PLUGIN_FILE, RULE_TEXT_FILES};

/// Parse every subdirectory of `rule_dir` as an error key.
///
/// Each subdirectory must hold `generic.md` and `metadata.yaml`; the first
/// one that does not fails the whole call. Plain files are ignored.
pub fn parse_error_keys(rule_dir: &Path) -> Result<BTreeMap<String, RuleErrorKeyContent>> {
    let mut error_keys = BTreeMap::new();
    for (name, key_dir) in list_subdirectories(rule_dir)? {
        let content = parse_error_key(&key_dir).map_err(|e| e.in_error_key(&name))?;
        error_keys.insert(name, content);
    }
    Ok(error_keys)
}

fn parse_error_key(key_dir: &Path) -> Result<RuleErrorKeyContent> {
    let mut texts = read_files_string(key_dir, &[GENERIC_FILE])?;
    let mut yamls = read_files_bytes(key_dir, &[METADATA_FILE])?;

    let metadata: ErrorKeyMetadata = from_yaml_bytes(
        &take(&mut yamls, METADATA_FILE),
        METADATA_FILE,
        &key_dir.join(METADATA_FILE),
    )?;

    Ok(RuleErrorKeyContent {
        generic: take(&mut texts, GENERIC_FILE),
        metadata,
    })
}

/// Parse all content of a rule directory.
///
/// The directory is expected to hold `plugin.yaml`; any missing or malformed
/// file, at rule or error key level, fails the parse with the rule path
/// attached.
pub fn parse_rule_content(rule_dir: &Path) -> Result<RuleContent> {
    parse_rule_inner(rule_dir).map_err(|e| e.in_rule(rule_dir))
}

fn parse_rule_inner(rule_dir: &Path) -> Result<RuleContent> {
    let error_keys = parse_error_keys(rule_dir)?;

    let mut texts = read_files_string(rule_dir, &RULE_TEXT_FILES)?;
    let mut yamls = read_files_bytes(rule_dir, &[PLUGIN_FILE])?;

    let plugin: RulePluginInfo = from_yaml_bytes(
        &take(&mut yamls, PLUGIN_FILE),
        PLUGIN_FILE,
        &rule_dir.join(PLUGIN_FILE),
    )?;

    let [summary, reason, resolution, more_info] = RULE_TEXT_FILES;
    Ok(RuleContent {
        summary: take(&mut texts, summary),
        reason: take(&mut texts, reason),
        resolution: take(&mut texts, resolution),
        more_info: take(&mut texts, more_info),
        plugin,
        error_keys,
    })
}
