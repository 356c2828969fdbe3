use std::time::Duration;

use crate::tag::finder::PushOrder;
use crate::tag::registries::docker_hub::DEFAULT_BASE_URL;
use crate::tag::types::RepositoryRef;

/// Namespace of the repository queried when none is given on the command line
pub const DEFAULT_NAMESPACE: &str = "kylecotton";

/// Name of the repository queried when none is given on the command line
pub const DEFAULT_NAME: &str = "sdp-backend";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every registry request
pub const USER_AGENT: &str = concat!("docker-latest-tag/", env!("CARGO_PKG_VERSION"));

pub fn default_repository() -> RepositoryRef {
    RepositoryRef::new(DEFAULT_NAMESPACE, DEFAULT_NAME)
}

/// Settings for a single lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repository: RepositoryRef,
    pub registry_url: String,
    pub order: PushOrder,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            registry_url: DEFAULT_BASE_URL.to_string(),
            order: PushOrder::default(),
            timeout: Duration::from_millis(FETCH_TIMEOUT_MS),
        }
    }
}
