use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data source configuration
    pub data: DataConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: MS_CATALOG_)
            .add_source(
                config::Environment::with_prefix("MS_CATALOG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Where the tabular sources live and how resource keys are composed.
///
/// The core hands composed keys to the fetch collaborator; the collaborator
/// owns what a key means (a path under `data_dir` for the filesystem
/// fetcher).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Root directory for the filesystem fetcher
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Resource key of the main metadata table
    #[serde(default = "default_metadata_resource")]
    pub metadata_resource: String,

    /// Directory prefix for location shard resources
    #[serde(default = "default_chunks_dir")]
    pub chunks_dir: String,
}

impl DataConfig {
    /// Resource key of the main metadata table.
    pub fn metadata_key(&self) -> &str {
        &self.metadata_resource
    }

    /// Resource key of the location shard with the given 1-based index.
    pub fn chunk_key(&self, index: u32) -> String {
        format!("{}/locations_{}.csv", self.chunks_dir, index)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            metadata_resource: default_metadata_resource(),
            chunks_dir: default_chunks_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default tracing filter, overridable via RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_metadata_resource() -> String {
    "manuscript_metadata.csv".to_string()
}

fn default_chunks_dir() -> String {
    "chunks".to_string()
}

fn default_log_filter() -> String {
    "manuscript_catalog=info".to_string()
}
