//! The catalog service: owns the process-wide caches and exposes the
//! query operations the presentation layer calls.
//!
//! Both caches are load-once-keep-forever. The main table slot is a
//! single-flight async cell: the first caller performs the load, a failed
//! load caches nothing so the next caller retries. Shard slots live in a
//! `DashMap`; concurrent first touches of the same shard may both fetch,
//! and the later insert idempotently overwrites the earlier identical
//! value. A shard source that is missing or unreadable is cached as an
//! empty shard permanently, so gaps in the shard numbering never trigger
//! repeated fetch attempts.

use crate::config::DataConfig;
use crate::error::Result;
use crate::fetch::TextFetcher;
use crate::loader::{parse_location_records, parse_manuscripts};
use crate::models::{Field, LocationRecord, Manuscript, MsLocation};
use crate::query::{self, FilterCriteria};
use crate::shards::{ids_match, route_to_shard};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct Catalog {
    fetcher: Arc<dyn TextFetcher>,
    data: DataConfig,
    manuscripts: OnceCell<Arc<Vec<Manuscript>>>,
    shard_cache: DashMap<u32, Arc<Vec<LocationRecord>>>,
}

impl Catalog {
    pub fn new(fetcher: Arc<dyn TextFetcher>, data: DataConfig) -> Self {
        Self {
            fetcher,
            data,
            manuscripts: OnceCell::new(),
            shard_cache: DashMap::new(),
        }
    }

    /// The full manuscript table, loaded on first call and cached for the
    /// life of the catalog. Subsequent calls return the identical cached
    /// sequence; a failed load leaves the slot empty for a later retry.
    pub async fn manuscripts(&self) -> Result<Arc<Vec<Manuscript>>> {
        self.manuscripts
            .get_or_try_init(|| async {
                let key = self.data.metadata_key();
                let text = self.fetcher.fetch_text(key).await?;
                let records = parse_manuscripts(&text)?;
                tracing::info!(
                    resource = key,
                    record_count = records.len(),
                    "Manuscript metadata table loaded"
                );
                Ok(Arc::new(records))
            })
            .await
            .cloned()
    }

    /// The location shard with the given 1-based index, fetched on first
    /// touch. Missing or unreadable shard sources cache as empty
    /// permanently; a shard gap is sparse data, not an error.
    pub async fn shard(&self, index: u32) -> Arc<Vec<LocationRecord>> {
        if let Some(cached) = self.shard_cache.get(&index) {
            tracing::debug!(shard = index, entries = cached.len(), "Shard cache hit");
            return cached.clone();
        }

        let key = self.data.chunk_key(index);
        let records = match self.fetcher.fetch_text(&key).await {
            Ok(text) => match parse_location_records(&text) {
                Ok(records) => {
                    tracing::debug!(shard = index, entries = records.len(), "Shard loaded");
                    records
                }
                Err(err) => {
                    tracing::warn!(shard = index, error = %err, "Shard unreadable, caching empty");
                    Vec::new()
                }
            },
            Err(err) if err.is_not_found() => {
                tracing::debug!(shard = index, "Shard source absent, caching empty");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(shard = index, error = %err, "Shard fetch failed, caching empty");
                Vec::new()
            }
        };

        let records = Arc::new(records);
        self.shard_cache.insert(index, records.clone());
        records
    }

    /// All known physical copies of the manuscript with the given id.
    ///
    /// Routes to the expected shard, then matches the trimmed id exactly;
    /// when no exact match exists, falls back to numeric-core comparison
    /// so differing alphabetic prefixes still resolve. An unknown id is
    /// the empty list, never an error.
    pub async fn resolve_locations(&self, id: &str) -> Vec<MsLocation> {
        let id = id.trim();
        let shard = self.shard(route_to_shard(id)).await;

        if let Some(record) = shard.iter().find(|r| r.unique_id.trim() == id) {
            return record.ms_locations.clone();
        }

        shard
            .iter()
            .find(|r| ids_match(&r.unique_id, id))
            .map(|r| r.ms_locations.clone())
            .unwrap_or_default()
    }

    /// The metadata record for the given id, tolerating duplicate ids
    /// (first match in source order wins) and format mismatches.
    pub async fn find_manuscript(&self, id: &str) -> Result<Option<Manuscript>> {
        let records = self.manuscripts().await?;
        let id = id.trim();

        if let Some(ms) = records.iter().find(|m| m.unique_id.trim() == id) {
            return Ok(Some(ms.clone()));
        }

        Ok(records
            .iter()
            .find(|m| ids_match(&m.unique_id, id))
            .cloned())
    }

    /// Evaluate a free-text term with optional field scope plus filter
    /// criteria against the full table, preserving source order.
    pub async fn search(
        &self,
        term: &str,
        fields: &[Field],
        criteria: &FilterCriteria,
    ) -> Result<Vec<Manuscript>> {
        let records = self.manuscripts().await?;
        Ok(query::search(&records, term, fields, criteria))
    }

    /// The sorted distinct values of a field across the table, for filter
    /// choice lists.
    pub async fn unique_values(&self, field: Field) -> Result<Vec<String>> {
        let records = self.manuscripts().await?;
        Ok(query::unique_values(&records, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemoryFetcher;

    const METADATA: &str = "unique_id,categories,titles,author,shuhras,death_date,century\n\
        MS-1054,\"[\"\"فقه\"\"]\",\"[\"\"الموافقات\"\"]\",الشاطبي,[],790,8th\n\
        2001,\"[\"\"تفسير\"\"]\",\"[\"\"الكشاف\"\"]\",الزمخشري,[],538,6th\n";

    const SHARD_2: &str = "unique_id,ms_locations\n\
        MS-1054,\"[{\"\"library\"\":\"\"Chester Beatty\"\",\"\"country\"\":\"\"Ireland\"\",\"\"city\"\":\"\"Dublin\"\",\"\"catalog_num\"\":\"\"Ar 3051\"\"}]\"\n";

    fn catalog() -> Catalog {
        let fetcher = MemoryFetcher::new()
            .with_resource("manuscript_metadata.csv", METADATA)
            .with_resource("chunks/locations_2.csv", SHARD_2);
        Catalog::new(Arc::new(fetcher), DataConfig::default())
    }

    #[tokio::test]
    async fn test_manuscripts_are_memoized() {
        let catalog = catalog();
        let first = catalog.manuscripts().await.unwrap();
        let second = catalog.manuscripts().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_locations_exact_match() {
        let catalog = catalog();
        let locations = catalog.resolve_locations("MS-1054").await;
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].library, "Chester Beatty");
    }

    #[tokio::test]
    async fn test_resolve_locations_numeric_fallback() {
        let catalog = catalog();
        // Bare numeric id routes to the same shard and matches by digit run
        let locations = catalog.resolve_locations("1054").await;
        assert_eq!(locations.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_shard_caches_empty() {
        let catalog = catalog();
        assert!(catalog.resolve_locations("9999").await.is_empty());
        // Second lookup hits the cached empty shard
        assert!(catalog.resolve_locations("9999").await.is_empty());
        assert!(catalog.shard_cache.contains_key(&10));
    }

    #[tokio::test]
    async fn test_failed_metadata_load_is_retried() {
        let fetcher = MemoryFetcher::new();
        let catalog = Catalog::new(Arc::new(fetcher), DataConfig::default());

        assert!(catalog.manuscripts().await.is_err());
        // Nothing was cached by the failure
        assert!(catalog.manuscripts.get().is_none());
    }

    #[tokio::test]
    async fn test_find_manuscript_tolerates_prefix_mismatch() {
        let catalog = catalog();

        let exact = catalog.find_manuscript("2001").await.unwrap().unwrap();
        assert_eq!(exact.author, "الزمخشري");

        let fallback = catalog.find_manuscript("1054").await.unwrap().unwrap();
        assert_eq!(fallback.unique_id, "MS-1054");

        assert!(catalog.find_manuscript("7777").await.unwrap().is_none());
    }
}
