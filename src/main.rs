//! site-ranker command line
//!
//! Ranks candidate sites from pairwise judgments (AHP) or direct weights
//! (WSM) and stores user submissions. Results are printed to stdout as JSON;
//! logs go to stderr.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use site_ranker::adapters::{FileSubmissionStore, GeoJsonSiteSource};
use site_ranker::application::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    RankSitesCommand, RankSitesError, RankSitesHandler, SaveSubmissionCommand,
    SaveSubmissionError, SaveSubmissionHandler,
};
use site_ranker::config::{AppConfig, ConfigError, LoggingConfig};
use site_ranker::domain::ahp::JudgmentSet;
use site_ranker::domain::foundation::SubmissionId;
use site_ranker::ports::{SubmissionRepository, SubmissionStoreError};

#[derive(Parser, Debug)]
#[command(
    name = "site-ranker",
    version,
    about = "Rank candidate sites with AHP or direct linear weighting"
)]
struct Cli {
    /// Config file (defaults to ./site_ranker.{toml,yaml,json} when present)
    #[arg(long, global = true, env = "SITE_RANKER_CONFIG")]
    config: Option<PathBuf>,

    /// Candidate site GeoJSON, overrides `data.sites_path`
    #[arg(long, global = true)]
    sites: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank sites from pairwise judgments
    Ahp {
        /// JSON object mapping "<A>__vs__<B>" to a judgment label
        #[arg(long)]
        judgments: PathBuf,
    },
    /// Rank sites from direct weights keyed by data column
    Wsm {
        /// JSON object of weights, bare or under a "weights" key
        #[arg(long)]
        weights: PathBuf,
    },
    /// Rank sites with all criteria equally important
    Default,
    /// Save a ranking together with submitter details
    Save {
        /// JSON submission document
        #[arg(long)]
        submission: PathBuf,
    },
    /// Print one saved submission
    Show {
        /// Submission id
        id: SubmissionId,
    },
    /// Print the most recent saved submissions
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    ParseInput {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rank(#[from] RankSitesError),

    #[error(transparent)]
    Save(#[from] SaveSubmissionError),

    #[error(transparent)]
    Store(#[from] SubmissionStoreError),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Direct weights as a bare map or wrapped in `{"weights": {...}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WeightsDocument {
    Wrapped { weights: HashMap<String, f64> },
    Bare(HashMap<String, f64>),
}

impl WeightsDocument {
    fn into_weights(self) -> HashMap<String, f64> {
        match self {
            WeightsDocument::Wrapped { weights } | WeightsDocument::Bare(weights) => weights,
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // a subscriber may already be installed; keep it
    if logging.json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.compact().try_init();
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli, config: AppConfig) -> Result<(), CliError> {
    let criteria = config.criteria.criteria_set().map_err(ConfigError::from)?;
    let sites_path = cli.sites.unwrap_or(config.data.sites_path);
    let store: Arc<dyn SubmissionRepository> =
        Arc::new(FileSubmissionStore::new(&config.storage.submissions_dir));

    let rank = |cmd: RankSitesCommand| {
        let handler = RankSitesHandler::new(
            Arc::new(GeoJsonSiteSource::new(&sites_path)),
            criteria.clone(),
            config.ranking.clone(),
        );
        async move { handler.handle(cmd).await }
    };

    match cli.command {
        Command::Ahp { judgments } => {
            let judgments: JudgmentSet = read_json(&judgments)?;
            debug!(judgments = judgments.len(), "Read pairwise judgments");
            print_json(&rank(RankSitesCommand::Ahp { judgments }).await?)
        }
        Command::Wsm { weights } => {
            let weights = read_json::<WeightsDocument>(&weights)?.into_weights();
            print_json(&rank(RankSitesCommand::Wsm { weights }).await?)
        }
        Command::Default => print_json(&rank(RankSitesCommand::Default).await?),
        Command::Save { submission } => {
            let cmd: SaveSubmissionCommand = read_json(&submission)?;
            let result = SaveSubmissionHandler::new(store).handle(cmd).await?;
            print_json(&result.submission)
        }
        Command::Show { id } => {
            let submission = GetSubmissionHandler::new(store)
                .handle(GetSubmissionQuery { submission_id: id })
                .await?;
            print_json(&submission)
        }
        Command::List { limit } => {
            let submissions = ListSubmissionsHandler::new(store)
                .handle(ListSubmissionsQuery { limit })
                .await?;
            print_json(&submissions)
        }
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_from(cli.config.as_deref()).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("site-ranker: {e}");
            return std::process::ExitCode::from(2);
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("site-ranker: {e}");
        return std::process::ExitCode::from(2);
    }

    match run(cli, config).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("site-ranker: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
