//! Error types for roledoc-core

use std::path::PathBuf;

/// Result type for roledoc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating documentation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a valid single YAML document of the expected shape
    #[error("Invalid policy document {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The policy has no top-level `rules` key
    #[error("Policy document has no top-level `rules` key")]
    MissingRules,

    /// A rule lacks one of `apiGroups`, `resources` or `verbs`
    #[error("rules[{rule}] is missing required field `{field}`")]
    MissingField { field: &'static str, rule: usize },

    /// Template compilation or rendering failed
    #[error("Failed to render documentation: {0}")]
    Render(#[from] tera::Error),

    /// The destination's markers could not be used
    #[error("Cannot update {path}: {source}")]
    Splice {
        path: PathBuf,
        #[source]
        source: roledoc_blocks::Error,
    },

    /// Check mode found the destination out of date
    #[error("{path} is out of date")]
    Stale { path: PathBuf, diff: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from roledoc-fs
    #[error(transparent)]
    Fs(#[from] roledoc_fs::Error),
}
