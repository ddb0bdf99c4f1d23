//! CLI-level errors: the I/O, parsing, and configuration failures that can
//! occur while turning a scenario path into a validated [`Scenario`].
//!
//! [`Scenario`]: boundchess_core::Scenario

use std::path::PathBuf;

/// Errors raised while loading and validating one scenario file (§7's
/// "malformed scenario JSON" and "I/O error" kinds, plus the configuration
/// errors [`boundchess_core::ScenarioError`] already names).
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Failed to read the scenario file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The scenario path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The scenario file was not valid JSON, or not a JSON object.
    #[error("malformed scenario JSON in {}: {source}", path.display())]
    Json {
        /// The scenario path that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The scenario parsed but failed configuration validation.
    #[error("invalid scenario in {}: {source}", path.display())]
    Config {
        /// The scenario path with the invalid configuration.
        path: PathBuf,
        /// The underlying configuration error.
        #[source]
        source: boundchess_core::ScenarioError,
    },
}

impl CliError {
    /// The path this error is attached to, for per-scenario `warn!` logging.
    pub fn path(&self) -> &PathBuf {
        match self {
            CliError::Io { path, .. } => path,
            CliError::Json { path, .. } => path,
            CliError::Config { path, .. } => path,
        }
    }
}
