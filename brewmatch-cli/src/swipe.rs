//! Swipe command implementation for the Brewmatch CLI.

use brewmatch_core::{Catalog, Category};
use brewmatch_scorer::{Decision, SwipeOutcome, SwipeSession};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_CATALOG, ARG_DECISIONS, CliError, ENV_DECISIONS, write_json};

/// CLI arguments for the `swipe` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "swipe",
    long_about = "Replay a swipe session. Decisions are applied to the \
                  catalogue in order and the top-scoring category's first \
                  drink is printed as JSON. The catalogue defaults to the \
                  built-in menu; pass --catalog to load a JSON array of \
                  drinks instead.",
    about = "Replay like/pass decisions and print the match"
)]
#[ortho_config(prefix = "BREWMATCH")]
pub(crate) struct SwipeArgs {
    /// Comma-separated decisions, one per drink (e.g. "like,pass,like").
    #[arg(long = ARG_DECISIONS, value_name = "like|pass,...")]
    #[serde(default)]
    pub(crate) decisions: Option<String>,
    /// Path to a JSON catalogue replacing the built-in menu.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl SwipeArgs {
    pub(crate) fn into_config(self) -> Result<SwipeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SwipeConfig::try_from(merged)
    }
}

/// Resolved `swipe` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwipeConfig {
    /// Decisions in catalogue order.
    pub(crate) decisions: Vec<Decision>,
    /// Optional catalogue override.
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl SwipeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.catalog
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_CATALOG))
    }

    pub(crate) fn load_catalog(&self) -> Result<Catalog, CliError> {
        let Some(path) = self.catalog.as_deref() else {
            return Ok(Catalog::demo());
        };
        let contents =
            brewmatch_fs::read_utf8_to_string(path).map_err(|source| CliError::ReadCatalog {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog: Catalog =
            serde_json::from_str(&contents).map_err(|source| CliError::ParseCatalog {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("loaded {} drinks from {path}", catalog.len());
        Ok(catalog)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    let inspect = |source| CliError::InspectSourcePath {
        field,
        path: path.to_path_buf(),
        source,
    };
    if brewmatch_fs::file_is_file(path).map_err(inspect)? {
        return Ok(());
    }
    if brewmatch_fs::path_exists(path).map_err(inspect)? {
        Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        })
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

impl TryFrom<SwipeArgs> for SwipeConfig {
    type Error = CliError;

    fn try_from(args: SwipeArgs) -> Result<Self, Self::Error> {
        let raw = args.decisions.ok_or(CliError::MissingArgument {
            field: ARG_DECISIONS,
            env: ENV_DECISIONS,
        })?;
        let decisions = parse_decisions(&raw)?;
        Ok(Self {
            decisions,
            catalog: args.catalog,
        })
    }
}

/// Split a comma-separated decision list, ignoring empty entries.
pub(crate) fn parse_decisions(raw: &str) -> Result<Vec<Decision>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.parse::<Decision>().map_err(CliError::from))
        .collect()
}

/// JSON document printed by the `swipe` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SwipeReport {
    pub(crate) outcome: SwipeOutcome,
    pub(crate) explanation: String,
    pub(crate) scores: Vec<CategoryScore>,
}

/// One category's final score.
#[derive(Debug, Serialize)]
pub(crate) struct CategoryScore {
    pub(crate) category: Category,
    pub(crate) score: f32,
}

pub(crate) fn run_swipe(args: SwipeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = execute_swipe(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_swipe(config: &SwipeConfig) -> Result<SwipeReport, CliError> {
    let catalog = config.load_catalog()?;
    let mut session = SwipeSession::new(&catalog);
    session.run(config.decisions.iter().copied())?;
    let outcome = session.result()?;
    let scores = session
        .scores()
        .iter()
        .map(|(category, score)| CategoryScore {
            category: category.clone(),
            score,
        })
        .collect();
    Ok(SwipeReport {
        explanation: outcome.explanation(),
        outcome,
        scores,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SwipeConfig, CliError> {
    let merged = SwipeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SwipeConfig::try_from(merged)
}
