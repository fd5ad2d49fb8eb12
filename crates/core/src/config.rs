use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Env var naming the active profile.
pub const PROFILE_VAR: &str = "CCX_PROFILE";

/// Profile-aware view over a key/value source (the process env in production).
struct Profiled<'a, F> {
    profile: &'a str,
    lookup: F,
}

impl<F> Profiled<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn opt(&self, key: &str) -> Option<String> {
        let get = |k: &str| (self.lookup)(k).filter(|s| !s.is_empty());
        if !self.profile.is_empty() {
            if let Some(v) = get(&format!("{}_{}", self.profile, key)) {
                return Some(v);
            }
        }
        get(key)
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.opt(key).unwrap_or_else(|| default.to_string())
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.opt(key) {
            Some(v) => matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
            None => default,
        }
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub content: ContentConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `CCX_PROFILE`. When set (e.g. `PROD`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup(PROFILE_VAR).unwrap_or_default().to_uppercase();
        let source = Profiled {
            profile: &profile,
            lookup,
        };
        Self {
            content: ContentConfig::from_source(&source),
            profile: profile.clone(),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  content:     dir={}", self.content.content_dir.display());
        tracing::info!("  groups:      config={}", self.content.groups_config.display());
        tracing::info!("  strict:      {}", self.content.strict);
    }

    /// Summary safe to embed in JSON output.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "content_dir": self.content.content_dir,
            "groups_config": self.content.groups_config,
            "strict": self.content.strict,
        })
    }
}

// ── Content ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Root of the rule content tree (holds `config.yaml`, `external/`, `internal/`).
    pub content_dir: PathBuf,
    /// Path to the group configuration file.
    pub groups_config: PathBuf,
    /// Fail the run when structural defects are found.
    pub strict: bool,
}

impl ContentConfig {
    fn from_source<F>(p: &Profiled<'_, F>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            content_dir: PathBuf::from(p.or("CONTENT_DIR", "content")),
            groups_config: PathBuf::from(p.or("GROUPS_CONFIG", "groups_config.yaml")),
            strict: p.flag("CONTENT_STRICT", false),
        }
    }
}
