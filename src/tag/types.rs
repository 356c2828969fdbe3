//! Common types for tag lookups

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::warn;

use crate::tag::error::ReferenceError;

/// Namespace used by Docker Hub for official images (`nginx` -> `library/nginx`)
pub const OFFICIAL_NAMESPACE: &str = "library";

/// A single tag as reported by the registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagEntry {
    pub name: String,
    /// ISO-8601 push timestamp, `None` when the registry reports `null`
    #[serde(default)]
    pub tag_last_pushed: Option<String>,
}

impl TagEntry {
    pub fn new(name: &str, tag_last_pushed: &str) -> Self {
        Self {
            name: name.to_string(),
            tag_last_pushed: Some(tag_last_pushed.to_string()),
        }
    }

    /// Push timestamp as a string, empty when unknown
    pub fn pushed_at(&self) -> &str {
        self.tag_last_pushed.as_deref().unwrap_or_default()
    }
}

/// One page of the repository tag list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagListResponse {
    /// Total number of tags in the repository
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the following page; never followed
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<TagEntry>,
}

impl TagListResponse {
    pub fn new(results: Vec<TagEntry>) -> Self {
        Self {
            count: None,
            next: None,
            results,
        }
    }

    pub fn has_more_pages(&self) -> bool {
        self.next.is_some()
    }
}

/// Docker Hub repository reference (`namespace/name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub namespace: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

impl FromStr for RepositoryRef {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ReferenceError::Empty);
        }

        let is_valid_namespace = |part: &str| {
            part.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'))
        };
        // Names may also contain dots, but never start with one
        let is_valid_name = |part: &str| {
            part.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit())
                && part.chars().all(|c| {
                    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
                })
        };

        let (namespace, name) = match s.split_once('/') {
            Some((namespace, name)) => (namespace, name),
            None => {
                warn!("No namespace in {}, assuming official image", s);
                (OFFICIAL_NAMESPACE, s)
            }
        };

        if !is_valid_namespace(namespace) || !is_valid_name(name) {
            return Err(ReferenceError::Invalid(s.to_string()));
        }

        Ok(Self::new(namespace, name))
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
