use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use gofetch::config::{Config, Overrides};
use gofetch::download::fetch_tarball;
use gofetch::error::IndexError;
use gofetch::index::{DlPageIndex, discover_latest};

#[derive(Parser)]
#[command(name = "gofetch")]
#[command(version, about = "Fetches the latest Go release source tarball")]
struct Cli {
    /// Config file (default is ~/.gofetch.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Version of Go to build: "stable" or "unstable"
    #[arg(short, long)]
    build: Option<String>,

    /// Download directory for tarballs
    #[arg(short, long)]
    download: Option<PathBuf>,

    /// Patch directory
    #[arg(short, long)]
    patch: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(
        cli.config.as_deref(),
        Overrides {
            build: cli.build,
            download: cli.download,
            patch: cli.patch,
        },
    )?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let index = match config.listing_url.as_deref() {
        Some(url) => DlPageIndex::new(url),
        None => DlPageIndex::default(),
    };

    let latest = discover_latest(&index).await?;
    let version = latest.for_channel(config.build).ok_or(IndexError::NoMatch {
        channel: config.build,
    })?;

    info!("latest {} release is {}", config.build, version);

    let client = reqwest::Client::new();
    let path = fetch_tarball(&client, &version.source_url, &config.download_dir).await?;
    info!("tarball available at {}", path.display());

    Ok(())
}
