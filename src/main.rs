use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docker_latest_tag::config::{Config, FETCH_TIMEOUT_MS, default_repository};
use docker_latest_tag::tag::finder::{LatestTagFinder, PushOrder};
use docker_latest_tag::tag::registries::DockerHubRegistry;
use docker_latest_tag::tag::registries::docker_hub::DEFAULT_BASE_URL;
use docker_latest_tag::tag::types::RepositoryRef;

#[derive(Parser)]
#[command(name = "docker-latest-tag")]
#[command(version, about = "Print the most recently pushed tag of a Docker Hub repository")]
struct Cli {
    /// Repository to inspect (`namespace/name`, or `name` for official images)
    #[arg(default_value_t = default_repository())]
    repository: RepositoryRef,

    /// Base URL of the registry API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    registry_url: String,

    /// How push timestamps are compared
    #[arg(long, value_enum, default_value_t = PushOrder::Lexicographic)]
    order: PushOrder,

    /// Request timeout in milliseconds
    #[arg(
        long,
        default_value_t = FETCH_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_ms: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            repository: cli.repository,
            registry_url: cli.registry_url,
            order: cli.order,
            timeout: Duration::from_millis(cli.timeout_ms),
        }
    }
}

async fn run(config: Config) -> anyhow::Result<String> {
    let registry = DockerHubRegistry::new(&config.registry_url, config.timeout)
        .context("failed to create HTTP client")?;
    let finder = LatestTagFinder::new(Arc::new(registry), config.order);

    finder
        .find_latest_tag(&config.repository)
        .await
        .with_context(|| format!("failed to find latest tag of {}", config.repository))
}

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the tag name
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Cli::parse());

    let latest = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(config))?;

    println!("{latest}");

    Ok(())
}
