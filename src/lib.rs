pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::listing_pipeline::ListingPipeline;
pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::engine::ListingEngine;
pub use utils::error::{ListError, Result};
