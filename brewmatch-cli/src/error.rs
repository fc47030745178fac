//! Error types emitted by the Brewmatch CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use brewmatch_core::{ParseLanguageError, RequestValidationError};
use brewmatch_scorer::{ParseDecisionError, SwipeError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Brewmatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Long flag name of the option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Long flag name of the option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name of the option.
        field: &'static str,
        /// Path that was looked up.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the catalogue file failed.
    #[error("failed to read catalogue at {path:?}: {source}")]
    ReadCatalog {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Catalogue JSON could not be decoded.
    #[error("failed to parse catalogue JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Catalogue path.
        path: Utf8PathBuf,
        /// Decoder failure, including duplicate drink identifiers.
        #[source]
        source: serde_json::Error,
    },
    /// A swipe decision was neither `like` nor `pass`.
    #[error(transparent)]
    InvalidDecision(#[from] ParseDecisionError),
    /// The swipe session rejected the decisions supplied.
    #[error("swipe session failed: {0}")]
    Swipe(#[from] SwipeError),
    /// The hour of day was outside `0..=23`.
    #[error("hour {hour} is outside 0..=23")]
    InvalidHour {
        /// Hour supplied.
        hour: u8,
    },
    /// The recommendation request failed validation.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RequestValidationError),
    /// The display language was not recognised.
    #[error(transparent)]
    InvalidLanguage(#[from] ParseLanguageError),
    /// Installing the log subscriber failed.
    #[error("failed to install log subscriber: {0}")]
    InitLogging(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
