//! Registry implementations for fetching tag lists

pub mod docker_hub;

pub use docker_hub::DockerHubRegistry;
