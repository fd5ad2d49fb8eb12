//! Cross-validation of rule content against group configuration.
//!
//! Nothing here fails: every finding is collected into a report.
//! - Tag checks: every error-key tag must resolve to a group, once
//! - Completeness checks: blank documentation/attributes, unknown impacts
//! - Name collisions recorded by the loader
//!
//! Defects (duplicate/orphan tags, collisions) mark content as unclean;
//! warnings are advisory.

mod completeness_checks;
mod tag_checks;


use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::groups::Group;
use crate::loader::{LoadedContent, RuleCollision};

pub use tag_checks::{check_tags, resolve_tag};

// ── Result types ────────────────────────────────────────────────────

/// Kind of structural tag defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagDefectKind {
    /// Tag listed more than once in one error key.
    DuplicateTag,
    /// Tag owned by no group.
    OrphanTag,
}

/// A tag defect located at one error key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDefect {
    pub kind: TagDefectKind,
    pub rule_id: String,
    pub error_key: String,
    pub tag: String,
}

/// Resolved tag → group name associations of one error key.
///
/// Orphan tags are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorKeyGroups {
    pub rule_id: String,
    pub error_key: String,
    pub groups: BTreeMap<String, String>,
}

/// Output of [`check_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagReport {
    /// One entry per error key, in rule/error-key order.
    pub error_keys: Vec<ErrorKeyGroups>,
    pub defects: Vec<TagDefect>,
}

impl TagReport {
    pub fn duplicates(&self) -> impl Iterator<Item = &TagDefect> {
        self.defects_of(TagDefectKind::DuplicateTag)
    }

    pub fn orphans(&self) -> impl Iterator<Item = &TagDefect> {
        self.defects_of(TagDefectKind::OrphanTag)
    }

    fn defects_of(&self, kind: TagDefectKind) -> impl Iterator<Item = &TagDefect> {
        self.defects.iter().filter(move |d| d.kind == kind)
    }

    /// Associations resolved for one error key.
    pub fn groups_for(&self, rule_id: &str, error_key: &str) -> Option<&BTreeMap<String, String>> {
        self.error_keys
            .iter()
            .find(|e| e.rule_id == rule_id && e.error_key == error_key)
            .map(|e| &e.groups)
    }
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentWarning {
    /// `rule` or `rule|error_key`; empty for group-level findings.
    pub location: String,
    pub message: String,
}

/// Everything found while validating a loaded content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentReport {
    pub tags: TagReport,
    pub collisions: Vec<RuleCollision>,
    pub warnings: Vec<ContentWarning>,
}

impl ContentReport {
    pub(crate) fn warn(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ContentWarning {
            location: location.into(),
            message: message.into(),
        });
    }

    /// Number of defects (tag defects plus name collisions).
    pub fn defect_count(&self) -> usize {
        self.tags.defects.len() + self.collisions.len()
    }

    /// True when there are no defects. Warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.defect_count() == 0
    }

    /// Emit every finding through `tracing`.
    pub fn log(&self) {
        for c in &self.collisions {
            error!(
                rule_id = %c.rule_id,
                kept = %c.kept.display(),
                replaced = %c.replaced.display(),
                "duplicate rule name"
            );
        }
        for d in &self.tags.defects {
            match d.kind {
                TagDefectKind::DuplicateTag => error!(
                    "duplicate tag '{}' in content of '{}|{}'",
                    d.tag, d.rule_id, d.error_key
                ),
                TagDefectKind::OrphanTag => error!(
                    "invalid tag '{}' in content of '{}|{}'",
                    d.tag, d.rule_id, d.error_key
                ),
            }
        }
        for w in &self.warnings {
            if w.location.is_empty() {
                warn!("{}", w.message);
            } else {
                warn!("{}: {}", w.location, w.message);
            }
        }
        for e in &self.tags.error_keys {
            info!("{}|{}: {:?}", e.rule_id, e.error_key, e.groups);
        }
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a loaded content tree against an ordered group list.
pub fn validate_content(loaded: &LoadedContent, groups: &[Group]) -> ContentReport {
    let mut report = ContentReport {
        tags: check_tags(&loaded.content, groups),
        collisions: loaded.collisions.clone(),
        warnings: Vec::new(),
    };
    completeness_checks::check_content(&loaded.content, &mut report);
    completeness_checks::check_groups(groups, &mut report);
    report
}
