use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Represents one catalog entry from the manuscript metadata table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manuscript {
    /// Catalog-assigned identifier. Format is not globally uniform: some
    /// entries carry an alphabetic prefix, some are written in
    /// Arabic-indic digits. Not guaranteed unique across the table.
    pub unique_id: String,

    /// Subject tags, insertion order preserved, not deduplicated
    pub categories: Vec<String>,

    /// Known titles; the first element is the canonical/display title
    pub titles: Vec<String>,

    /// Author name, may be empty
    pub author: String,

    /// Alternate names/epithets for the author
    pub shuhras: Vec<String>,

    /// Free-text death date, may contain era markers or separators
    pub death_date: String,

    /// Coarse century bucket, free text
    pub century: String,
}

impl Manuscript {
    /// The canonical display title, when the record has any title at all.
    pub fn display_title(&self) -> Option<&str> {
        self.titles.first().map(String::as_str)
    }

    /// Scalar field accessor, `None` for sequence-valued fields.
    pub fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::UniqueId => Some(&self.unique_id),
            Field::Author => Some(&self.author),
            Field::DeathDate => Some(&self.death_date),
            Field::Century => Some(&self.century),
            Field::Categories | Field::Titles | Field::Shuhras => None,
        }
    }

    /// Sequence field accessor, `None` for scalar fields.
    pub fn sequence(&self, field: Field) -> Option<&[String]> {
        match field {
            Field::Categories => Some(&self.categories),
            Field::Titles => Some(&self.titles),
            Field::Shuhras => Some(&self.shuhras),
            Field::UniqueId | Field::Author | Field::DeathDate | Field::Century => None,
        }
    }
}

/// The closed set of queryable manuscript fields. String forms match the
/// source table's column names, so the same enum scopes free-text search,
/// facet indexing, and sort-key selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Field {
    UniqueId,
    Categories,
    Titles,
    Author,
    Shuhras,
    DeathDate,
    Century,
}

impl Field {
    /// Fields holding an ordered sequence of strings.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Field::Categories | Field::Titles | Field::Shuhras)
    }
}
