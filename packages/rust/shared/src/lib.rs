//! Shared types, error model, and configuration for Post Series.
//!
//! This crate is the foundation depended on by the other Post Series crates.
//! It provides:
//! - [`PostSeriesError`]: the unified error type
//! - Domain types ([`Post`], [`PostId`], [`SeriesTerm`], [`ViewContext`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, LabelsConfig, TaxonomyConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{PostSeriesError, Result};
pub use types::{DEFAULT_TAXONOMY, Post, PostId, SeriesTerm, SortOrder, TEXT_DOMAIN, ViewContext};
