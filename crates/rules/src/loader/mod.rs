//! Filesystem content loader.
//!
//! Walks the `external` and `internal` roots of a content directory,
//! classifying every directory as either a rule (it holds `plugin.yaml`) or a
//! namespace (descend further). Rule directories are parsed into
//! [`RuleContent`](crate::schema::RuleContent) and merged into one flat map
//! keyed by directory name.

mod core;
mod rule;
mod walk;


pub use self::core::{parse_rule_content_dir, ContentLoader, LoadedContent, RuleCollision};
pub use self::rule::{parse_error_keys, parse_rule_content};
pub use self::walk::{classify_directory, walk_rules, DirectoryKind, DiscoveredRule};

/// Global configuration descriptor directly under the content root.
pub const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// Plugin descriptor; its presence marks a rule directory.
pub const PLUGIN_FILE: &str = "plugin.yaml";

/// Documentation files every rule directory must hold.
pub const RULE_TEXT_FILES: [&str; 4] = ["summary.md", "reason.md", "resolution.md", "more_info.md"];

/// Free-text explanation inside an error key directory.
pub const GENERIC_FILE: &str = "generic.md";

/// Structured metadata inside an error key directory.
pub const METADATA_FILE: &str = "metadata.yaml";

/// Content roots walked by default, in merge order.
pub const CONTENT_ROOTS: [&str; 2] = ["external", "internal"];
