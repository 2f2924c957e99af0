use crate::config::{DEFAULT_ENTRY_FILE, DEFAULT_FORMAT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_entry_file, validate_format, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub listing: Option<ListingMeta>,
    pub source: SourceConfig,
    pub render: Option<RenderConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingMeta {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub dir: String,
    pub entry_file: Option<String>,
    pub only_dirs: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub format: Option<String>,
    pub sort: Option<bool>,
    pub link_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    /// 配置摘要走 stderr 日誌，標準輸出保留給清單本身
    pub fn log_summary(&self) {
        if let Some(meta) = &self.listing {
            tracing::info!(
                "📋 Listing: {}",
                meta.name.as_deref().unwrap_or("unnamed")
            );
            if let Some(description) = &meta.description {
                tracing::info!("  Description: {}", description);
            }
        }
        tracing::info!("  Source: {}", self.dir());
        tracing::info!(
            "  Output: {} ({})",
            self.output_path().unwrap_or("stdout"),
            self.output_format()
        );
    }
}

impl ConfigProvider for TomlConfig {
    fn dir(&self) -> &str {
        &self.source.dir
    }

    fn entry_file(&self) -> &str {
        self.source
            .entry_file
            .as_deref()
            .unwrap_or(DEFAULT_ENTRY_FILE)
    }

    fn link_prefix(&self) -> &str {
        self.render
            .as_ref()
            .and_then(|r| r.link_prefix.as_deref())
            .unwrap_or(&self.source.dir)
    }

    fn sort_entries(&self) -> bool {
        self.render
            .as_ref()
            .and_then(|r| r.sort)
            .unwrap_or(false)
    }

    fn output_format(&self) -> &str {
        self.render
            .as_ref()
            .and_then(|r| r.format.as_deref())
            .unwrap_or(DEFAULT_FORMAT)
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn only_dirs(&self) -> bool {
        self.source.only_dirs.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.dir", &self.source.dir)?;
        validate_entry_file("source.entry_file", self.entry_file())?;
        validate_format("render.format", self.output_format())?;
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}
