use std::path::PathBuf;

use clap::Parser;

use ccx_core::Config;

/// Consistency checker for rule content.
///
/// Parses the rule content tree and the group configuration, then reports
/// duplicate tags, tags owned by no group, rule name collisions and blank
/// content. Settings default to the environment (`CONTENT_DIR`,
/// `GROUPS_CONFIG`, `CONTENT_STRICT`, optionally profiled via `CCX_PROFILE`).
#[derive(Parser, Debug)]
#[command(name = "content-checker", version, about)]
pub struct CliArgs {
    /// Rule content directory holding config.yaml, external/ and internal/
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Group configuration file
    #[arg(long)]
    pub groups_config: Option<PathBuf>,

    /// Exit with an error when any defect is found
    #[arg(long)]
    pub strict: bool,

    /// Write the parsed content and the report as JSON ("-" for stdout)
    #[arg(long, value_name = "PATH")]
    pub dump_json: Option<String>,
}

impl CliArgs {
    /// Overlay command-line values onto the environment config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.content_dir {
            config.content.content_dir = dir.clone();
        }
        if let Some(path) = &self.groups_config {
            config.content.groups_config = path.clone();
        }
        if self.strict {
            config.content.strict = true;
        }
    }
}
