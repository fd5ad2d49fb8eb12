//! Core [`ContentLoader`]: loads a whole content directory in one pass.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{ContentError, Result};
use crate::schema::{GlobalRuleConfig, RuleContent, RuleContentDirectory};
use crate::yaml::from_yaml_bytes;

use super::walk::{walk_rules, DiscoveredRule};
use super::{CONTENT_ROOTS, GLOBAL_CONFIG_FILE};

/// Two rule directories that share a name.
///
/// Rules are keyed by directory name, so the later one in walk order
/// replaces the earlier one. Collisions are reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCollision {
    pub rule_id: String,
    /// Directory whose content is kept.
    pub kept: PathBuf,
    /// Directory whose content was overwritten.
    pub replaced: PathBuf,
}

/// Result of a full content load.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub content: RuleContentDirectory,
    pub collisions: Vec<RuleCollision>,
}

/// Filesystem-backed content loader.
///
/// Loads `config.yaml` from the content directory, then walks each content
/// root in order. Every call to [`load`](Self::load) re-reads the whole tree.
pub struct ContentLoader {
    /// Directory holding `config.yaml` and the content roots.
    content_dir: PathBuf,
    /// Root subdirectories to walk, in merge order.
    roots: Vec<String>,
}

impl ContentLoader {
    /// Create a loader walking the default `external` and `internal` roots.
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            roots: CONTENT_ROOTS.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Replace the list of roots to walk. Later roots win name collisions.
    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Read the global configuration descriptor.
    pub fn load_global_config(&self) -> Result<GlobalRuleConfig> {
        let path = self.content_dir.join(GLOBAL_CONFIG_FILE);
        let bytes = fs::read(&path).map_err(|source| ContentError::Read {
            file: GLOBAL_CONFIG_FILE.to_string(),
            path: path.clone(),
            source,
        })?;
        from_yaml_bytes(&bytes, GLOBAL_CONFIG_FILE, &path)
    }

    /// Load the global config and every rule under every root.
    ///
    /// A failure in any root aborts the load; no partial tree is returned.
    pub fn load(&self) -> Result<LoadedContent> {
        let config = self.load_global_config()?;

        let mut assembler = Assembler::default();
        for root in &self.roots {
            let root_dir = self.content_dir.join(root);
            let discovered = walk_rules(&root_dir).map_err(|e| {
                error!(root = %root, error = %e, "cannot parse content of {} rules", root);
                e.in_root(root)
            })?;
            info!(
                root = %root,
                path = %root_dir.display(),
                rules = discovered.len(),
                "parsed content root"
            );
            for rule in discovered {
                assembler.insert(rule);
            }
        }

        let (rules, collisions) = assembler.finish();
        info!(
            path = %self.content_dir.display(),
            rules = rules.len(),
            collisions = collisions.len(),
            "loaded rule content"
        );

        Ok(LoadedContent {
            content: RuleContentDirectory { config, rules },
            collisions,
        })
    }
}

/// Find and parse all rule content in a content directory.
///
/// Name collisions are logged and resolved last-writer-wins; use
/// [`ContentLoader::load`] to inspect them.
pub fn parse_rule_content_dir(content_dir: impl AsRef<Path>) -> Result<RuleContentDirectory> {
    ContentLoader::new(content_dir.as_ref())
        .load()
        .map(|loaded| loaded.content)
}

/// Merges discovered rules into one map in insertion order.
#[derive(Default)]
struct Assembler {
    rules: BTreeMap<String, RuleContent>,
    origins: BTreeMap<String, PathBuf>,
    collisions: Vec<RuleCollision>,
}

impl Assembler {
    fn insert(&mut self, rule: DiscoveredRule) {
        if let Some(previous) = self.origins.insert(rule.id.clone(), rule.path.clone()) {
            warn!(
                rule_id = %rule.id,
                kept = %rule.path.display(),
                replaced = %previous.display(),
                "duplicate rule name, earlier content replaced"
            );
            self.collisions.push(RuleCollision {
                rule_id: rule.id.clone(),
                kept: rule.path,
                replaced: previous,
            });
        }
        self.rules.insert(rule.id, rule.content);
    }

    fn finish(self) -> (BTreeMap<String, RuleContent>, Vec<RuleCollision>) {
        (self.rules, self.collisions)
    }
}
