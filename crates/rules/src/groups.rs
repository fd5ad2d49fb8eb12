//! Group configuration: named sets of tags used to categorize error keys.
//!
//! Groups are kept in file order because tag resolution is first-match.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::yaml::from_yaml_bytes;

/// Default file name of the group configuration.
pub const GROUPS_CONFIG_FILE: &str = "groups_config.yaml";

/// A named collection of tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Group {
    pub name: String,
    pub description: String,
    pub tags: BTreeSet<String>,
}

impl Group {
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: String::new(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// On-disk shape of `groups_config.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct GroupConfigFile {
    groups: Vec<Group>,
}

/// Parse a group configuration file, preserving group order.
pub fn parse_group_config_file(path: impl AsRef<Path>) -> Result<Vec<Group>> {
    let path = path.as_ref();
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| GROUPS_CONFIG_FILE.to_string());

    let bytes = fs::read(path).map_err(|source| ContentError::Read {
        file: file.clone(),
        path: path.to_path_buf(),
        source,
    })?;
    let config: GroupConfigFile = from_yaml_bytes(&bytes, &file, path)?;

    tracing::info!(path = %path.display(), groups = config.groups.len(), "loaded group config");
    Ok(config.groups)
}

/// Tags claimed by more than one group, with the claiming group names in order.
///
/// Only the first group is ever used for resolution; the others are dead
/// declarations.
pub fn shared_tags(groups: &[Group]) -> BTreeMap<String, Vec<String>> {
    let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for group in groups {
        for tag in &group.tags {
            owners.entry(tag.clone()).or_default().push(group.name.clone());
        }
    }
    owners.retain(|_, names| names.len() > 1);
    owners
}
