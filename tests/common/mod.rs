//! Common test fixtures for the catalog integration suites.
//!
//! The CSV text mirrors the production table layout: a metadata table with
//! JSON-array cells and location shards of at most 1000 ids each.

use manuscript_catalog::{Catalog, DataConfig, MemoryFetcher};
use std::sync::Arc;

/// Metadata table: ids straddle two shards, one record has an alphabetic
/// prefix, one is written in Arabic-indic digits, one is missing its
/// sequence fields entirely.
pub const METADATA_CSV: &str = "\
unique_id,categories,titles,author,shuhras,death_date,century
MS-101,\"[\"\"فقه\"\",\"\"أصول الفقه\"\"]\",\"[\"\"الموافقات\"\"]\",الشاطبي,\"[\"\"أبو إسحاق الشاطبي\"\"]\",٧٩٠هـ,8th
102,\"[\"\"تفسير\"\"]\",\"[\"\"الكشاف\"\",\"\"Al-Kashshaf\"\"]\",الزمخشري,\"[\"\"جار الله\"\"]\",538,6th
١٠٣,\"[\"\"فقه\"\"]\",\"[\"\"المبسوط\"\"]\",السرخسي,[],483,5th
1205,,,,,,
";

/// Shard 1 covers ids 0..999.
pub const SHARD_1_CSV: &str = "\
unique_id,ms_locations
MS-101,\"[{\"\"library\"\":\"\"Chester Beatty\"\",\"\"country\"\":\"\"Ireland\"\",\"\"city\"\":\"\"Dublin\"\",\"\"catalog_num\"\":\"\"Ar 3051\"\"},{\"\"library\"\":\"\"Süleymaniye\"\",\"\"country\"\":\"\"Turkey\"\",\"\"city\"\":\"\"Istanbul\"\",\"\"catalog_num\"\":\"\"Fatih 1234\"\"}]\"
103,\"[{\"\"library\"\":\"\"British Library\"\",\"\"country\"\":\"\"UK\"\",\"\"city\"\":\"\"London\"\",\"\"catalog_num\"\":\"\"Or. 30\"\"}]\"
";

/// Shard 2 covers ids 1000..1999.
pub const SHARD_2_CSV: &str = "\
unique_id,ms_locations
1205,\"[{\"\"library\"\":\"\"Dar al-Kutub\"\",\"\"country\"\":\"\"Egypt\"\",\"\"city\"\":\"\"Cairo\"\",\"\"catalog_num\"\":\"\"12083\"\"}]\"
";

/// A catalog backed by the in-memory fetcher with both shards present.
pub fn memory_catalog() -> Catalog {
    let fetcher = MemoryFetcher::new()
        .with_resource("manuscript_metadata.csv", METADATA_CSV)
        .with_resource("chunks/locations_1.csv", SHARD_1_CSV)
        .with_resource("chunks/locations_2.csv", SHARD_2_CSV);
    Catalog::new(Arc::new(fetcher), DataConfig::default())
}
