//! Registry trait for fetching repository tag lists

#[cfg(test)]
use mockall::automock;

use crate::tag::error::RegistryError;
use crate::tag::types::{RepositoryRef, TagListResponse};

/// Trait for fetching the tags of a repository from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches the first page of tags for a repository
    ///
    /// # Arguments
    /// * `repository` - The repository to list (e.g., `kylecotton/sdp-backend`)
    ///
    /// # Returns
    /// * `Ok(TagListResponse)` - Tags in the order the registry returned them
    /// * `Err(RegistryError)` - If the fetch or the decoding fails
    async fn fetch_tags(&self, repository: &RepositoryRef)
    -> Result<TagListResponse, RegistryError>;
}
