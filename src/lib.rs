pub mod config;
pub mod tag;
