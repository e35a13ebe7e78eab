//! The I/O collaborator seam.
//!
//! The query core never touches storage directly; it asks a [`TextFetcher`]
//! for the raw bytes of a named resource. Production uses [`FsFetcher`]
//! over a data directory; tests use [`MemoryFetcher`].

use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

/// Trait for fetching raw tabular sources by resource key.
///
/// A key with no backing content fails with [`AppError::NotFound`]; the
/// caller decides whether that is sparse data (shard gaps) or a real
/// failure (the main metadata table).
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetch the full text of the resource named by `key`.
    async fn fetch_text(&self, key: &str) -> Result<String>;
}

/// Filesystem-backed fetcher rooted at a data directory
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TextFetcher for FsFetcher {
    async fn fetch_text(&self, key: &str) -> Result<String> {
        let path = self.root.join(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(key.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory fetcher for tests and fixtures
#[derive(Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under `key`.
    pub fn with_resource(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(key.into(), text.into());
        self
    }
}

#[async_trait]
impl TextFetcher for MemoryFetcher {
    async fn fetch_text(&self, key: &str) -> Result<String> {
        self.resources
            .get(key)
            .cloned()
            .ok_or_else(|| AppError::NotFound(key.to_string()))
    }
}
