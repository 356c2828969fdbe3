//! Selection of the most recently pushed tag

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::tag::error::RegistryError;
use crate::tag::registry::TagRegistry;
use crate::tag::types::{RepositoryRef, TagEntry};

/// How push timestamps are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PushOrder {
    /// Compare the raw timestamp strings
    #[default]
    Lexicographic,
    /// Parse timestamps as RFC 3339 and compare the instants
    Chronological,
}

impl fmt::Display for PushOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushOrder::Lexicographic => f.write_str("lexicographic"),
            PushOrder::Chronological => f.write_str("chronological"),
        }
    }
}

/// Returns the name of the most recently pushed tag, comparing timestamps as strings.
///
/// An entry only replaces the current best when its timestamp is strictly
/// greater, so the earliest entry wins a tie. Returns `""` for an empty list.
pub fn find_latest_tag(entries: &[TagEntry]) -> &str {
    let mut latest_tag = "";
    let mut latest_pushed = "";

    for entry in entries {
        let pushed = entry.pushed_at();
        if pushed > latest_pushed {
            latest_pushed = pushed;
            latest_tag = entry.name.as_str();
        }
    }

    latest_tag
}

/// Same as [`find_latest_tag`], with timestamps compared as parsed instants.
///
/// Entries whose timestamp is missing or not RFC 3339 are skipped.
pub fn find_latest_tag_chronological(entries: &[TagEntry]) -> &str {
    let mut latest: Option<(&str, DateTime<FixedOffset>)> = None;

    for entry in entries {
        let Ok(pushed) = DateTime::parse_from_rfc3339(entry.pushed_at()) else {
            if entry.tag_last_pushed.is_some() {
                warn!(
                    "Skipping tag {} with unparsable push time {:?}",
                    entry.name,
                    entry.pushed_at()
                );
            }
            continue;
        };

        if latest.is_none_or(|(_, best)| pushed > best) {
            latest = Some((entry.name.as_str(), pushed));
        }
    }

    latest.map(|(name, _)| name).unwrap_or_default()
}

/// Looks up the latest tag of a repository through a registry
pub struct LatestTagFinder {
    registry: Arc<dyn TagRegistry>,
    order: PushOrder,
}

impl LatestTagFinder {
    pub fn new(registry: Arc<dyn TagRegistry>, order: PushOrder) -> Self {
        Self { registry, order }
    }

    pub fn order(&self) -> PushOrder {
        self.order
    }

    /// Fetches the first page of tags and returns the most recently pushed one.
    ///
    /// Returns an empty string when the repository has no tags.
    pub async fn find_latest_tag(
        &self,
        repository: &RepositoryRef,
    ) -> Result<String, RegistryError> {
        let tags = self.registry.fetch_tags(repository).await?;

        let latest = match self.order {
            PushOrder::Lexicographic => find_latest_tag(&tags.results),
            PushOrder::Chronological => find_latest_tag_chronological(&tags.results),
        };

        debug!(
            "Latest tag of {} among {} entries ({}): {:?}",
            repository,
            tags.results.len(),
            self.order,
            latest
        );

        Ok(latest.to_string())
    }
}
