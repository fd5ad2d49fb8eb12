//! Advisory checks: blank content, unknown impacts, tags shared by groups.

use crate::groups::{shared_tags, Group};
use crate::schema::{GlobalRuleConfig, RuleContent, RuleContentDirectory, RuleErrorKeyContent};

use super::ContentReport;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(super) fn check_content(content: &RuleContentDirectory, report: &mut ContentReport) {
    for (rule_id, rule) in &content.rules {
        check_rule(rule_id, rule, report);
        for (error_key, key_content) in &rule.error_keys {
            check_error_key(rule_id, error_key, key_content, &content.config, report);
        }
    }
}

fn check_rule(rule_id: &str, rule: &RuleContent, report: &mut ContentReport) {
    let plugin = &rule.plugin;
    let attributes = [
        ("name", &plugin.name),
        ("node_id", &plugin.node_id),
        ("product_code", &plugin.product_code),
        ("python_module", &plugin.python_module),
    ];
    for (attribute, value) in attributes {
        if is_blank(value) {
            report.warn(rule_id, format!("attribute '{attribute}' is empty"));
        }
    }

    let files = [
        ("summary.md", &rule.summary),
        ("reason.md", &rule.reason),
        ("resolution.md", &rule.resolution),
        ("more_info.md", &rule.more_info),
    ];
    for (file, value) in files {
        if is_blank(value) {
            report.warn(rule_id, format!("content file '{file}' is empty"));
        }
    }
}

fn check_error_key(
    rule_id: &str,
    error_key: &str,
    key_content: &RuleErrorKeyContent,
    config: &GlobalRuleConfig,
    report: &mut ContentReport,
) {
    let location = format!("{rule_id}|{error_key}");
    let meta = &key_content.metadata;

    if is_blank(&key_content.generic) {
        report.warn(&location, "content file 'generic.md' is empty");
    }

    let attributes = [
        ("condition", &meta.condition),
        ("description", &meta.description),
        ("impact", &meta.impact),
        ("publish_date", &meta.publish_date),
        ("status", &meta.status),
    ];
    for (attribute, value) in attributes {
        if is_blank(value) {
            report.warn(&location, format!("attribute '{attribute}' is empty"));
        }
    }

    if !is_blank(&meta.impact) && config.impact_weight(&meta.impact).is_none() {
        report.warn(
            &location,
            format!("impact '{}' is not defined in the global config", meta.impact),
        );
    }
}

pub(super) fn check_groups(groups: &[Group], report: &mut ContentReport) {
    for (tag, owners) in shared_tags(groups) {
        report.warn(
            "",
            format!(
                "tag '{tag}' is declared by groups {}; '{}' wins",
                owners.join(", "),
                owners[0]
            ),
        );
    }
}
