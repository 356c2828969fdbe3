//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use docker_latest_tag::tag::error::RegistryError;
use docker_latest_tag::tag::registry::TagRegistry;
use docker_latest_tag::tag::types::{RepositoryRef, TagEntry, TagListResponse};

/// In-memory registry for testing
#[derive(Default)]
pub struct MockRegistry {
    tags: HashMap<String, Vec<TagEntry>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, repository: &str, tags: Vec<(&str, &str)>) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.into_iter()
                .map(|(name, pushed)| TagEntry::new(name, pushed))
                .collect(),
        );
        self
    }
}

#[async_trait]
impl TagRegistry for MockRegistry {
    async fn fetch_tags(
        &self,
        repository: &RepositoryRef,
    ) -> Result<TagListResponse, RegistryError> {
        match self.tags.get(&repository.to_string()) {
            Some(tags) => Ok(TagListResponse::new(tags.clone())),
            None => Err(RegistryError::NotFound(repository.to_string())),
        }
    }
}

/// Docker Hub style tag list body
pub fn tag_list_body(tags: &[(&str, &str)]) -> String {
    let results: Vec<serde_json::Value> = tags
        .iter()
        .map(|(name, pushed)| {
            serde_json::json!({
                "creator": 1,
                "id": 1,
                "last_updated": pushed,
                "name": name,
                "repository": 1,
                "tag_status": "active",
                "tag_last_pulled": null,
                "tag_last_pushed": pushed,
            })
        })
        .collect();

    serde_json::json!({
        "count": tags.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}
