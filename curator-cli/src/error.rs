//! Error types emitted by the curator CLI.
//!
//! The scoring pipelines themselves never fail; everything here concerns
//! the boundary the CLI owns: argument parsing, configuration layering,
//! request loading, and parameter validation.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the curator CLI.
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
        /// Name of the absent option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The request path does not exist on disk.
    #[error("request path {path:?} does not exist")]
    MissingRequestFile {
        /// Requested path.
        path: Utf8PathBuf,
    },
    /// The request path exists but is not a file.
    #[error("request path {path:?} exists but is not a file")]
    RequestPathNotFile {
        /// Requested path.
        path: Utf8PathBuf,
    },
    /// The request path could not be inspected due to an IO error.
    #[error("failed to inspect request path {path:?}: {source}")]
    InspectRequestPath {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Opening the request file failed.
    #[error("failed to open request file {path:?}: {source}")]
    OpenRequest {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The request file contained invalid JSON.
    #[error("failed to parse request file {path:?}: {source}")]
    ParseRequest {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A request parameter was outside its declared range.
    #[error("invalid {field}: {detail}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// Human-readable constraint description.
        detail: String,
    },
    /// Serialising the response to JSON failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response to the output stream failed.
    #[error("failed to write response: {0}")]
    WriteResponse(#[source] std::io::Error),
}
