//! Rank command implementation for the Sitewise CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitewise_data::JsonDatasetSource;
use sitewise_scorer::{Method, Ranking, rank_from};

use crate::{ARG_DATABASE, ARG_DATASET, ARG_METHOD, CliError, ENV_DATASET};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every location in a dataset with Simple Additive \
                 Weighting or Weighted Product and print the ranking as \
                 JSON, best first. The dataset is either a JSON snapshot or \
                 an existing SQLite database opened read-only.",
    about = "Rank locations against weighted criteria"
)]
#[ortho_config(prefix = "SITEWISE")]
pub(crate) struct RankArgs {
    /// Path to a JSON dataset with `locations` and `criteria` arrays.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to a SQLite database holding locations and criteria.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Ranking method: `saw` (default) or `wp`.
    #[arg(long = ARG_METHOD, value_name = "method")]
    #[serde(default)]
    pub(crate) method: Option<String>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Where the dataset snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SnapshotSource {
    /// JSON document on disk.
    Json(Utf8PathBuf),
    /// Read-only SQLite database.
    Sqlite(Utf8PathBuf),
}

impl SnapshotSource {
    pub(crate) fn path(&self) -> &Utf8Path {
        match self {
            Self::Json(path) | Self::Sqlite(path) => path,
        }
    }

    pub(crate) const fn field(&self) -> &'static str {
        match self {
            Self::Json(_) => ARG_DATASET,
            Self::Sqlite(_) => ARG_DATABASE,
        }
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) source: SnapshotSource,
    pub(crate) method: Method,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let field = self.source.field();
        let path = self.source.path();
        match sitewise_data::fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let source = match (args.dataset, args.database) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingSources {
                    first: ARG_DATASET,
                    second: ARG_DATABASE,
                });
            }
            (Some(path), None) => SnapshotSource::Json(path),
            (None, Some(path)) => SnapshotSource::Sqlite(path),
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_DATASET,
                    env: ENV_DATASET,
                });
            }
        };
        let method = args
            .method
            .as_deref()
            .map(str::parse::<Method>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self { source, method })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let ranking = execute_rank(&config)?;
    write_ranking(writer, &ranking)
}

fn execute_rank(config: &RankConfig) -> Result<Ranking, CliError> {
    debug!("ranking {} with {}", config.source.path(), config.method);
    match &config.source {
        SnapshotSource::Json(path) => {
            let source = JsonDatasetSource::new(path.clone());
            Ok(rank_from(&source, config.method)?)
        }
        SnapshotSource::Sqlite(path) => rank_sqlite(path, config.method),
    }
}

#[cfg(feature = "store-sqlite")]
fn rank_sqlite(path: &Utf8Path, method: Method) -> Result<Ranking, CliError> {
    let source = sitewise_data::SqliteDatasetSource::new(path.to_path_buf());
    Ok(rank_from(&source, method)?)
}

#[cfg(not(feature = "store-sqlite"))]
fn rank_sqlite(_path: &Utf8Path, _method: Method) -> Result<Ranking, CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "reading --database",
    })
}

fn write_ranking(writer: &mut dyn Write, ranking: &Ranking) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranking).map_err(CliError::SerialiseRanking)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
