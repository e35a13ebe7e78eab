use serde::{Deserialize, Serialize};

/// One known physical copy of a manuscript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsLocation {
    /// Holding library
    #[serde(default)]
    pub library: String,

    /// Library country
    #[serde(default)]
    pub country: String,

    /// Library city
    #[serde(default)]
    pub city: String,

    /// Shelf/catalog number within the holding library
    #[serde(default)]
    pub catalog_num: String,
}

/// Per-manuscript location list as stored inside a shard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub unique_id: String,
    pub ms_locations: Vec<MsLocation>,
}
