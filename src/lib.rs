//! In-memory query engine for a browsable catalog of manuscript records.
//!
//! The catalog loads two kinds of flat tabular sources (a main metadata
//! table and a set of location shards keyed by manuscript id) once into
//! memory, then answers search/filter, facet, detail-lookup, and
//! location-resolution queries client-side. Ids and dates arrive in
//! inconsistent formats (alphabetic prefixes, Arabic-indic digits, era
//! markers), and the engine normalizes at comparison time rather than
//! rewriting the source data.
//!
//! # Example
//!
//! ```no_run
//! use manuscript_catalog::{Catalog, DataConfig, Field, FilterCriteria, FsFetcher};
//! use std::sync::Arc;
//!
//! # async fn run() -> manuscript_catalog::Result<()> {
//! let fetcher = Arc::new(FsFetcher::new("data"));
//! let catalog = Catalog::new(fetcher, DataConfig::default());
//!
//! let criteria = FilterCriteria::new().with_century("8th");
//! let results = catalog.search("فقه", &[Field::Categories], &criteria).await?;
//! let locations = catalog.resolve_locations("MS-1054").await;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod query;
pub mod shards;
pub mod view;

pub use catalog::Catalog;
pub use config::{Config, DataConfig};
pub use error::{AppError, Result};
pub use fetch::{FsFetcher, MemoryFetcher, TextFetcher};
pub use models::{Field, LocationRecord, Manuscript, MsLocation};
pub use query::{DateRange, FilterCriteria};
pub use view::{project, Page, SortOrder};
