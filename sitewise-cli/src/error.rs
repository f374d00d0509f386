//! Error types emitted by the Sitewise CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sitewise_data::DatasetLoadError;
use sitewise_scorer::ParseMethodError;
use thiserror::Error;

/// Errors emitted by the Sitewise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// No dataset source remained after configuration merging.
    #[error("missing {field} (pass a path, use --database, or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Both a JSON dataset and a database were supplied.
    #[error("choose either a {first} path or --{second}, not both")]
    ConflictingSources {
        /// Option that was set first.
        first: &'static str,
        /// Option that conflicts with it.
        second: &'static str,
    },
    /// The requested ranking method is not recognised.
    #[error("invalid --method: {0}")]
    InvalidMethod(#[from] ParseMethodError),
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that must be enabled.
        feature: &'static str,
        /// Operation that was attempted.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading or validating the dataset failed.
    #[error("failed to load dataset: {0}")]
    LoadDataset(#[from] DatasetLoadError),
    /// Serialising the ranking failed.
    #[error("failed to serialise ranking: {0}")]
    SerialiseRanking(#[source] serde_json::Error),
    /// Writing the ranking failed.
    #[error("failed to write ranking: {0}")]
    WriteOutput(#[source] std::io::Error),
}
