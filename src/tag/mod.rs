//! Tag lookup layer
//!
//! This module fetches the tag list of a Docker Hub repository and picks the
//! most recently pushed tag.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐
//! │ TagRegistry │────▶│ LatestTagFinder │────▶ tag name
//! │   (fetch)   │     │    (select)     │
//! └─────────────┘     └─────────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Docker Hub  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching tag lists
//! - [`registries`]: Concrete registry implementations (Docker Hub)
//! - [`finder`]: Latest-tag selection and the `LatestTagFinder`
//! - [`error`]: Error types for registry access and reference parsing
//! - [`types`]: `TagEntry`, `TagListResponse` and `RepositoryRef`

pub mod error;
pub mod finder;
pub mod registries;
pub mod registry;
pub mod types;
