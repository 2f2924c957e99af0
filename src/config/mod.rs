pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_entry_file, validate_format, validate_path, Validate};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIR: &str = "./src/examples";
pub const DEFAULT_ENTRY_FILE: &str = "main.c";
pub const DEFAULT_FORMAT: &str = "markdown";

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "examples-md")]
#[command(about = "Prints a markdown bullet list linking to each example's main source file")]
pub struct CliConfig {
    /// Directory whose immediate entries become the listing
    #[arg(long, default_value = DEFAULT_DIR)]
    pub dir: String,

    /// File name each link points at inside an entry
    #[arg(long, default_value = DEFAULT_ENTRY_FILE)]
    pub entry_file: String,

    /// Path prefix used inside the emitted links (defaults to --dir)
    #[arg(long)]
    pub link_prefix: Option<String>,

    /// Sort entries lexicographically instead of keeping directory order
    #[arg(long)]
    pub sort: bool,

    /// Output format: markdown or json
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Write the listing to this file instead of standard output
    #[arg(long)]
    pub output: Option<String>,

    /// Skip entries that are not directories
    #[arg(long)]
    pub only_dirs: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn dir(&self) -> &str {
        &self.dir
    }

    fn entry_file(&self) -> &str {
        &self.entry_file
    }

    fn link_prefix(&self) -> &str {
        self.link_prefix.as_deref().unwrap_or(&self.dir)
    }

    fn sort_entries(&self) -> bool {
        self.sort
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn only_dirs(&self) -> bool {
        self.only_dirs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("dir", &self.dir)?;
        validate_entry_file("entry_file", &self.entry_file)?;
        validate_format("format", &self.format)?;
        if let Some(prefix) = &self.link_prefix {
            validate_path("link_prefix", prefix)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
