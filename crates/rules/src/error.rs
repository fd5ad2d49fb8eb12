//! Error types for content loading.
//!
//! Every variant carries enough context (root, rule path, error key, logical
//! file name) for an operator to find the broken file.

use std::path::PathBuf;

/// Errors that can occur while loading rule content or group configuration.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A directory could not be listed.
    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A named file could not be opened or read.
    #[error("cannot read '{file}' at {}: {source}", .path.display())]
    Read {
        /// Logical file name, e.g. `summary.md`.
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML deserialization failed.
    #[error("cannot parse '{file}' at {}: {source}", .path.display())]
    Parse {
        file: String,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failure inside one error-key subdirectory.
    #[error("error key '{error_key}': {source}")]
    ErrorKey {
        error_key: String,
        #[source]
        source: Box<ContentError>,
    },

    /// Failure while parsing one rule directory.
    #[error("rule {}: {source}", .path.display())]
    Rule {
        path: PathBuf,
        #[source]
        source: Box<ContentError>,
    },

    /// Failure while walking one content root (`external` or `internal`).
    #[error("cannot parse content of {root} rules: {source}")]
    Root {
        root: String,
        #[source]
        source: Box<ContentError>,
    },
}

/// Result alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

impl ContentError {
    pub(crate) fn in_error_key(self, error_key: impl Into<String>) -> Self {
        ContentError::ErrorKey {
            error_key: error_key.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_rule(self, path: impl Into<PathBuf>) -> Self {
        ContentError::Rule {
            path: path.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn in_root(self, root: impl Into<String>) -> Self {
        ContentError::Root {
            root: root.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping the context wrappers.
    pub fn root_cause(&self) -> &ContentError {
        match self {
            ContentError::ErrorKey { source, .. }
            | ContentError::Rule { source, .. }
            | ContentError::Root { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Logical name of the file that failed, if the failure was a file read or parse.
    pub fn file(&self) -> Option<&str> {
        match self.root_cause() {
            ContentError::Read { file, .. } | ContentError::Parse { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Error key the failure occurred in, if any.
    pub fn error_key(&self) -> Option<&str> {
        match self {
            ContentError::ErrorKey { error_key, .. } => Some(error_key),
            ContentError::Rule { source, .. } | ContentError::Root { source, .. } => {
                source.error_key()
            }
            _ => None,
        }
    }

    /// Content root (`external` / `internal`) the failure occurred in, if any.
    pub fn root(&self) -> Option<&str> {
        match self {
            ContentError::Root { root, .. } => Some(root),
            _ => None,
        }
    }

    /// Rule directory the failure occurred in, if any.
    pub fn rule_path(&self) -> Option<&std::path::Path> {
        match self {
            ContentError::Rule { path, .. } => Some(path),
            ContentError::Root { source, .. } => source.rule_path(),
            _ => None,
        }
    }
}
