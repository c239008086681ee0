use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use artifact_finder::config::{FinderConfig, log_path};
use artifact_finder::finder::{ArtifactFinder, Downloader, find_local};
use artifact_finder::version::backend::BackendKind;
use artifact_finder::version::fetch::build_client;
use artifact_finder::version::types::{ArtifactKind, Credentials};

#[derive(Parser)]
#[command(name = "artifact-finder")]
#[command(version, about = "Locate versioned Python artifacts in remote repositories")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to the default log file in the data directory
    #[arg(long, global = true)]
    log: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Find the artifact satisfying a requirement and print its URL
    Resolve(ResolveArgs),
}

#[derive(Args)]
struct ResolveArgs {
    /// Module name with optional constraints, e.g. "foo>=1.2<2.0"
    requirement: String,

    /// Repository URL
    url: String,

    /// Substring every candidate URL must contain when several match
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    #[arg(long, default_value = "")]
    login: String,

    #[arg(long, default_value = "")]
    password: String,

    /// "structured" (Artifactory storage API) or "crawl" (HTML pages)
    #[arg(long)]
    backend: Option<String>,

    #[arg(long)]
    max_nesting_level: Option<usize>,

    #[arg(long)]
    max_workers: Option<usize>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Download the winning file into this directory
    #[arg(long)]
    download: Option<PathBuf>,

    /// Use a matching .py file from this directory instead of the network
    #[arg(long)]
    local_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = cli.log_file.or_else(|| cli.log.then(log_path));
    let _guard = artifact_finder::logging::init(cli.verbose, log_file.as_deref())?;

    match cli.command {
        Command::Resolve(args) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(resolve(args)),
    }
}

async fn resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => FinderConfig::load(path)?,
        None => FinderConfig::default(),
    };
    if let Some(level) = args.max_nesting_level {
        config.crawl.max_nesting_level = level;
    }
    if let Some(workers) = args.max_workers {
        config.crawl.max_workers = workers;
    }

    let backend_kind = args
        .backend
        .as_deref()
        .map(BackendKind::from_name_or_default)
        .unwrap_or(config.default_backend);
    let credentials = Credentials::new(args.login, args.password);
    let finder = ArtifactFinder::from_config(&config)?;

    if let Some(dir) = &args.local_dir {
        let requirement = finder.parse_requirement(&args.requirement)?;
        if let Some(selection) = find_local(finder.resolver(), &requirement, dir)? {
            println!("{}", selection.candidate.locator);
            return Ok(());
        }
    }

    let resolution = finder
        .resolve(
            &args.requirement,
            &args.url,
            &args.tags,
            &credentials,
            backend_kind,
        )
        .await?;

    if let Some(collision) = &resolution.collision {
        warn!("Picked the last match out of: {}", collision.locators.join(", "));
    }
    println!("{}", resolution.candidate.locator);
    if resolution.candidate.kind() == Some(ArtifactKind::Wheel) {
        info!(
            "{} is a wheel; install it with pip before importing",
            resolution.candidate.display_name
        );
    }

    if let Some(dir) = &args.download {
        let downloader = Downloader::new(build_client(&config.http)?);
        let path = downloader
            .download(&resolution.candidate, dir, &credentials)
            .await?;
        println!("{}", path.display());
    }

    Ok(())
}
