//! Docker Hub repository API implementation

use std::time::Duration;

use crate::config::USER_AGENT;
use crate::tag::error::RegistryError;
use crate::tag::registry::TagRegistry;
use crate::tag::types::{RepositoryRef, TagListResponse};
use tracing::{debug, warn};

/// Default base URL for Docker Hub
pub const DEFAULT_BASE_URL: &str = "https://registry.hub.docker.com";

/// Registry implementation for the Docker Hub repositories API
pub struct DockerHubRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl DockerHubRegistry {
    /// Creates a new DockerHubRegistry with a custom base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn tags_url(&self, repository: &RepositoryRef) -> String {
        format!(
            "{}/v2/repositories/{}/{}/tags",
            self.base_url, repository.namespace, repository.name
        )
    }
}

#[async_trait::async_trait]
impl TagRegistry for DockerHubRegistry {
    async fn fetch_tags(
        &self,
        repository: &RepositoryRef,
    ) -> Result<TagListResponse, RegistryError> {
        let url = self.tags_url(repository);
        debug!("Fetching tags: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if status != reqwest::StatusCode::OK {
            warn!("Docker Hub returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;

        let tags: TagListResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse Docker Hub tags response: {}", e);
            RegistryError::Parse(e.to_string())
        })?;

        if tags.has_more_pages() {
            debug!(
                "{} has more tags than the first page ({:?} total), only the first page is used",
                repository, tags.count
            );
        }

        Ok(tags)
    }
}
