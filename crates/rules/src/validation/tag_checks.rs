//! Tag → group resolution for every error key.

use std::collections::{BTreeMap, BTreeSet};

use crate::groups::Group;
use crate::schema::RuleContentDirectory;

use super::{ErrorKeyGroups, TagDefect, TagDefectKind, TagReport};

/// First group, in list order, that owns `tag`.
pub fn resolve_tag<'a>(tag: &str, groups: &'a [Group]) -> Option<&'a Group> {
    groups.iter().find(|g| g.has_tag(tag))
}

/// Resolve every error-key tag against `groups`.
///
/// Tags are processed in declaration order. A repeated tag is reported once
/// as a duplicate and not resolved again; a tag no group owns is reported
/// as an orphan and left out of the associations.
pub fn check_tags(content: &RuleContentDirectory, groups: &[Group]) -> TagReport {
    let mut report = TagReport::default();

    for (rule_id, error_key, key_content) in content.error_keys() {
        let defect = |kind, tag: &str| TagDefect {
            kind,
            rule_id: rule_id.to_string(),
            error_key: error_key.to_string(),
            tag: tag.to_string(),
        };

        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        let mut resolved = BTreeMap::new();

        for tag in &key_content.metadata.tags {
            if !seen.insert(tag.as_str()) {
                if duplicates.insert(tag.as_str()) {
                    report.defects.push(defect(TagDefectKind::DuplicateTag, tag));
                }
                continue;
            }

            match resolve_tag(tag, groups) {
                Some(group) => {
                    resolved.insert(tag.clone(), group.name.clone());
                }
                None => report.defects.push(defect(TagDefectKind::OrphanTag, tag)),
            }
        }

        report.error_keys.push(ErrorKeyGroups {
            rule_id: rule_id.to_string(),
            error_key: error_key.to_string(),
            groups: resolved,
        });
    }

    report
}
