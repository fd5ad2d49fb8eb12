//! Directory classification and the recursive rule walk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ContentError, Result};
use crate::schema::RuleContent;

use super::rule::parse_rule_content;
use super::PLUGIN_FILE;

/// What a directory inside a content root represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    /// Directly holds a plugin descriptor; parsed as a rule.
    Rule,
    /// Anything else; walked for nested rules.
    Namespace,
}

/// Classify a directory by probing for a regular `plugin.yaml` file.
///
/// The descriptor may be a symlink to a regular file. A directory named
/// `plugin.yaml` does not count.
pub fn classify_directory(dir: &Path) -> DirectoryKind {
    match fs::metadata(dir.join(PLUGIN_FILE)) {
        Ok(meta) if meta.is_file() => DirectoryKind::Rule,
        _ => DirectoryKind::Namespace,
    }
}

/// A parsed rule together with where it was found.
#[derive(Debug, Clone)]
pub struct DiscoveredRule {
    /// Rule id, i.e. the rule directory's name.
    pub id: String,
    pub path: PathBuf,
    pub content: RuleContent,
}

/// Recursively collect every rule below `dir`.
///
/// Subdirectories are visited in name order, depth first, and the returned
/// list keeps that order. The first rule that fails to parse aborts the walk.
pub fn walk_rules(dir: &Path) -> Result<Vec<DiscoveredRule>> {
    let mut found = Vec::new();
    for (name, path) in list_subdirectories(dir)? {
        match classify_directory(&path) {
            DirectoryKind::Rule => {
                let content = parse_rule_content(&path)?;
                debug!(
                    rule_id = %name,
                    path = %path.display(),
                    error_keys = content.error_keys.len(),
                    "parsed rule"
                );
                found.push(DiscoveredRule {
                    id: name,
                    path,
                    content,
                });
            }
            DirectoryKind::Namespace => {
                debug!(path = %path.display(), "descending into namespace");
                found.extend(walk_rules(&path)?);
            }
        }
    }
    Ok(found)
}

/// Immediate subdirectories of `dir` as `(name, path)`, sorted by name.
///
/// Symlinks are not followed, so a symlinked directory is never descended
/// into and the walk cannot loop.
pub(crate) fn list_subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let read_dir_err = |source| ContentError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if entry.file_type().map_err(read_dir_err)?.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            subdirs.push((name, entry.path()));
        }
    }
    subdirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(subdirs)
}
