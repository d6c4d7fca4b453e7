//! Command-line interface for the curator scoring pipelines.
//!
//! Each subcommand reads a JSON request file, runs the matching pipeline
//! with the default keyword backends, and prints the JSON response on
//! standard output. Request paths can come from CLI flags, configuration
//! files, or `CURATOR_*` environment variables.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use curator_core::{
    EntityCategory, FilterRequest, MAX_QUALITY_SCORE, MAX_RECOMMENDATION_LIMIT, MAX_TOP_K,
    ModelRegistry, RecommendationRequest, SimilarityRequest,
};
use curator_scorer::{
    HybridRecommender, JaccardRanker, KeywordEntityExtractor, KeywordQualityScorer,
    extract_entities, filter_content, rank_documents, recommend,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod error;
#[cfg(test)]
mod tests;

pub use error::CliError;

const ARG_REQUEST: &str = "request";
const ENV_FILTER_REQUEST: &str = "CURATOR_CMDS_FILTER_REQUEST";
const ENV_ENTITIES_REQUEST: &str = "CURATOR_CMDS_ENTITIES_REQUEST";
const ENV_SIMILARITY_REQUEST: &str = "CURATOR_CMDS_SIMILARITY_REQUEST";
const ENV_RECOMMEND_REQUEST: &str = "CURATOR_CMDS_RECOMMEND_REQUEST";

/// Run the curator CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

/// Dispatch a parsed command, bracketing it with the model lifecycle.
fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    let mut registry = ModelRegistry::new();
    registry.start();
    let outcome = match command {
        Command::Filter(args) => run_filter_with(args, writer),
        Command::Entities(args) => run_entities_with(args, writer),
        Command::Similarity(args) => run_similarity_with(args, writer),
        Command::Recommend(args) => run_recommend_with(args, writer),
    };
    registry.stop();
    outcome
}

#[derive(Debug, Parser)]
#[command(
    name = "curator",
    about = "Content scoring and ranking pipelines for curated feeds",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a content batch for quality and drop low-value items.
    Filter(FilterArgs),
    /// Extract people, organisations, and topics from text.
    Entities(EntityArgs),
    /// Rank documents by lexical similarity to a query.
    Similarity(SimilarityArgs),
    /// Produce personalised recommendations from reading history.
    Recommend(RecommendArgs),
}

/// CLI arguments for the `filter` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Filter a content batch by quality score")]
#[ortho_config(prefix = "CURATOR")]
struct FilterArgs {
    /// Path to a JSON file containing a filter request.
    #[arg(value_name = "path")]
    #[serde(default)]
    request_path: Option<Utf8PathBuf>,
}

/// CLI arguments for the `entities` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Extract entities from a piece of text")]
#[ortho_config(prefix = "CURATOR")]
struct EntityArgs {
    /// Path to a JSON file containing an extraction request.
    #[arg(value_name = "path")]
    #[serde(default)]
    request_path: Option<Utf8PathBuf>,
}

/// CLI arguments for the `similarity` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Rank documents against a query")]
#[ortho_config(prefix = "CURATOR")]
struct SimilarityArgs {
    /// Path to a JSON file containing a similarity request.
    #[arg(value_name = "path")]
    #[serde(default)]
    request_path: Option<Utf8PathBuf>,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Recommend content from a reading history")]
#[ortho_config(prefix = "CURATOR")]
struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    request_path: Option<Utf8PathBuf>,
}

impl FilterArgs {
    fn into_request_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        resolve_request_path(merged.request_path, ENV_FILTER_REQUEST)
    }
}

impl EntityArgs {
    fn into_request_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        resolve_request_path(merged.request_path, ENV_ENTITIES_REQUEST)
    }
}

impl SimilarityArgs {
    fn into_request_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        resolve_request_path(merged.request_path, ENV_SIMILARITY_REQUEST)
    }
}

impl RecommendArgs {
    fn into_request_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        resolve_request_path(merged.request_path, ENV_RECOMMEND_REQUEST)
    }
}

/// Resolve the merged request path, insisting it names an existing file.
fn resolve_request_path(
    path: Option<Utf8PathBuf>,
    env: &'static str,
) -> Result<Utf8PathBuf, CliError> {
    let path = path.ok_or(CliError::MissingArgument {
        field: ARG_REQUEST,
        env,
    })?;
    require_existing(&path)?;
    Ok(path)
}

fn run_filter_with(args: FilterArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args.into_request_path()?;
    let request: FilterRequest = load_request(&path)?;
    validate_filter_strength(request.filter_strength)?;
    let result = filter_content(
        &request.items,
        request.filter_strength,
        &KeywordQualityScorer::default(),
    );
    write_response(writer, &result)
}

fn run_entities_with(args: EntityArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args.into_request_path()?;
    let request: EntityRequestWire = load_request(&path)?;
    let categories = resolve_categories(&request.extract_types);
    let result = extract_entities(&request.text, &categories, &KeywordEntityExtractor::default());
    write_response(writer, &result)
}

fn run_similarity_with(args: SimilarityArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args.into_request_path()?;
    let request: SimilarityRequest = load_request(&path)?;
    validate_limit("top_k", request.top_k, MAX_TOP_K)?;
    let result = rank_documents(
        &request.query,
        &request.documents,
        request.top_k,
        &JaccardRanker,
    );
    write_response(writer, &result)
}

fn run_recommend_with(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let path = args.into_request_path()?;
    let request: RecommendationRequest = load_request(&path)?;
    validate_limit(
        "max_recommendations",
        request.max_recommendations,
        MAX_RECOMMENDATION_LIMIT,
    )?;
    let result = recommend(
        &request.user_id,
        &request.content_history,
        &request.candidate_items,
        request.max_recommendations,
        &HybridRecommender,
    );
    write_response(writer, &result)
}

/// Wire form of an extraction request.
///
/// Categories arrive as free-form strings; unsupported names are dropped
/// with a warning rather than rejecting the whole request.
#[derive(Debug, Clone, Deserialize)]
struct EntityRequestWire {
    text: String,
    #[serde(default = "default_extract_types")]
    extract_types: Vec<String>,
}

fn default_extract_types() -> Vec<String> {
    EntityCategory::ALL
        .iter()
        .map(|category| category.as_str().to_owned())
        .collect()
}

/// Parse requested category names, keeping only supported ones.
fn resolve_categories(names: &[String]) -> Vec<EntityCategory> {
    let mut categories = Vec::new();
    for name in names {
        match name.parse::<EntityCategory>() {
            Ok(category) => {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
            Err(err) => log::warn!("ignoring {err}"),
        }
    }
    categories
}

fn validate_filter_strength(strength: f32) -> Result<(), CliError> {
    if (0.0..=MAX_QUALITY_SCORE).contains(&strength) {
        Ok(())
    } else {
        Err(CliError::InvalidParameter {
            field: "filter_strength",
            detail: format!("{strength} is outside 0..=100"),
        })
    }
}

fn validate_limit(field: &'static str, value: usize, maximum: usize) -> Result<(), CliError> {
    if (1..=maximum).contains(&value) {
        Ok(())
    } else {
        Err(CliError::InvalidParameter {
            field,
            detail: format!("{value} is outside 1..={maximum}"),
        })
    }
}

fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
    match std::fs::metadata(path.as_std_path()) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(CliError::RequestPathNotFile {
            path: path.to_owned(),
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(CliError::MissingRequestFile {
            path: path.to_owned(),
        }),
        Err(err) => Err(CliError::InspectRequestPath {
            path: path.to_owned(),
            source: err,
        }),
    }
}

fn load_request<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = File::open(path.as_std_path()).map_err(|source| CliError::OpenRequest {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_owned(),
        source,
    })
}

fn write_response<T: Serialize>(writer: &mut dyn Write, response: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writeln!(writer, "{payload}").map_err(CliError::WriteResponse)
}
