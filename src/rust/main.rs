use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use intent_classifier::artifact::{ArtifactManager, ArtifactStatus};
use intent_classifier::config::{self, ServerConfig, DEFAULT_HOST, DEFAULT_INTENTS_PATH, DEFAULT_PORT};
use intent_classifier::server::{self, AppState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (the default when no subcommand is given)
    Serve(ServeArgs),
    /// Classify a single text and print the result as JSON
    Classify {
        #[command(flatten)]
        table: TableArgs,
        /// Text to classify
        text: String,
    },
    /// Create the placeholder model artifact used by deployments
    InitArtifact {
        #[arg(long, env = "INTENT_CLASSIFIER_ARTIFACT_DIR")]
        artifact_dir: Option<PathBuf>,
        /// Replace any existing artifact
        #[arg(short, long)]
        fresh: bool,
    },
}

#[derive(Args, Clone)]
struct TableArgs {
    /// JSON file mapping intent names to example phrases
    #[arg(long = "intents", env = "INTENTS_PATH", default_value = DEFAULT_INTENTS_PATH)]
    intents_path: PathBuf,

    /// Seed for reproducible confidences and fallbacks
    #[arg(long, env = "CLASSIFIER_SEED")]
    seed: Option<u64>,
}

#[derive(Args, Clone)]
struct ServeArgs {
    #[arg(long, env = "SERVER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    #[command(flatten)]
    table: TableArgs,

    /// Directory checked for the model artifact
    #[arg(long, env = "INTENT_CLASSIFIER_ARTIFACT_DIR")]
    artifact_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host,
            port: self.port,
            intents_path: self.table.intents_path,
            artifacts_dir: self.artifact_dir.unwrap_or(defaults.artifacts_dir),
            seed: self.table.seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    intent_classifier::init_logger();
    let cli = Cli::parse();

    match cli.command {
        None => serve(cli.serve.into_config()).await,
        Some(Command::Serve(args)) => serve(args.into_config()).await,
        Some(Command::Classify { table, text }) => classify_once(table, &text),
        Some(Command::InitArtifact { artifact_dir, fresh }) => init_artifact(artifact_dir, fresh),
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    info!("=== Starting Intent Classifier API ===");

    let classifier = config
        .build_classifier()
        .with_context(|| format!("Failed to load intent table from {:?}", config.intents_path))?;

    let artifact = check_artifact(&config.artifact_manager());
    let state = AppState::new(classifier, artifact);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    server::run(listener, state, server::shutdown_signal())
        .await
        .context("Server error")?;

    info!("=== Server stopped ===");
    Ok(())
}

fn check_artifact(manager: &ArtifactManager) -> ArtifactStatus {
    let path = manager.get_artifact_path();
    match manager.status() {
        Ok(ArtifactStatus::Missing) => {
            warn!("Model artifact not found at {:?}. Inference is fully simulated.", path);
            ArtifactStatus::Missing
        }
        Ok(status) => {
            info!("Model artifact found at {:?} ({:?})", path, status);
            status
        }
        Err(e) => {
            warn!("Could not inspect model artifact at {:?}: {}", path, e);
            ArtifactStatus::Missing
        }
    }
}

fn classify_once(table: TableArgs, text: &str) -> anyhow::Result<()> {
    let classifier = config::build_classifier(&table.intents_path, table.seed)
        .with_context(|| format!("Failed to load intent table from {:?}", table.intents_path))?;

    let result = classifier.classify(text);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn init_artifact(artifact_dir: Option<PathBuf>, fresh: bool) -> anyhow::Result<()> {
    let manager = match artifact_dir {
        Some(dir) => ArtifactManager::new(dir),
        None => ArtifactManager::new_default(),
    };

    if manager.init_placeholder(fresh)? {
        println!("Placeholder artifact created at {}", manager.get_artifact_path().display());
    } else {
        println!("Artifact already present at {}", manager.get_artifact_path().display());
    }
    Ok(())
}
