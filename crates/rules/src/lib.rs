//! Rule content ingestion and group tag validation.
//!
//! This crate provides:
//! - Typed model of a rule content tree (rules, error keys, plugin info)
//! - File-set loading and YAML metadata deserialization
//! - Recursive tree walker classifying rule vs namespace directories
//! - Group configuration loading and tag cross-validation
//! - Completeness checks for blank content and unknown impacts

pub mod error;
pub mod files;
pub mod groups;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod yaml;

pub use error::{ContentError, Result};
pub use groups::{parse_group_config_file, Group};
pub use loader::{parse_rule_content_dir, ContentLoader, LoadedContent, RuleCollision};
pub use schema::*;
pub use validation::{check_tags, validate_content, ContentReport, TagReport};
