//! Typed model of a rule content tree.
//!
//! - `metadata`: YAML-backed records (`config.yaml`, `plugin.yaml`, `metadata.yaml`)
//! - `content`: assembled rule, error key and directory records
//!
//! Field names serialize as snake_case so a serving layer can republish the
//! tree as JSON unchanged.

mod content;
mod metadata;

pub use content::*;
pub use metadata::*;
