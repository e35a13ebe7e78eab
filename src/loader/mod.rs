//! CSV parsing for the manuscript metadata table and location shards.
//!
//! Both tables are plain CSV with named string columns; the sequence-valued
//! columns (`categories`, `titles`, `shuhras`, `ms_locations`) hold
//! JSON-array text inside the cell. Headers and values are trimmed, empty
//! lines are skipped.
//!
//! Malformed-JSON policy differs by table and is deliberate: a corrupt cell
//! in the metadata table fails the whole load (`AppError::Parse`), while a
//! corrupt `ms_locations` cell only isolates that row to an empty location
//! list with a warning.

use crate::error::{AppError, Result};
use crate::models::{LocationRecord, Manuscript, MsLocation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawManuscriptRow {
    #[serde(default)]
    unique_id: String,
    #[serde(default)]
    categories: String,
    #[serde(default)]
    titles: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    shuhras: String,
    #[serde(default)]
    death_date: String,
    #[serde(default)]
    century: String,
}

#[derive(Debug, Deserialize)]
struct RawLocationRow {
    #[serde(default)]
    unique_id: String,
    #[serde(default)]
    ms_locations: String,
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

/// Decode a JSON-array cell into a string sequence. An empty cell decodes
/// to an empty sequence, never a missing field.
fn decode_string_list(cell: &str, row_id: &str, column: &str) -> Result<Vec<String>> {
    if cell.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(cell).map_err(|err| {
        AppError::Parse(format!(
            "row '{}': malformed JSON in column '{}': {}",
            row_id, column, err
        ))
    })
}

/// Parse the main metadata table into manuscript records.
///
/// Any malformed JSON cell fails the whole parse; a corrupt catalog export
/// is surfaced to the caller instead of silently thinning the table.
pub fn parse_manuscripts(text: &str) -> Result<Vec<Manuscript>> {
    let mut records = Vec::new();

    for row in reader(text).deserialize() {
        let raw: RawManuscriptRow = row?;
        records.push(Manuscript {
            categories: decode_string_list(&raw.categories, &raw.unique_id, "categories")?,
            titles: decode_string_list(&raw.titles, &raw.unique_id, "titles")?,
            shuhras: decode_string_list(&raw.shuhras, &raw.unique_id, "shuhras")?,
            unique_id: raw.unique_id,
            author: raw.author,
            death_date: raw.death_date,
            century: raw.century,
        });
    }

    tracing::debug!(record_count = records.len(), "Parsed manuscript metadata table");
    Ok(records)
}

/// Parse one location shard into per-manuscript location lists.
///
/// A malformed `ms_locations` cell isolates that row: the record is kept
/// with an empty location list so neighbouring rows stay resolvable.
pub fn parse_location_records(text: &str) -> Result<Vec<LocationRecord>> {
    let mut records = Vec::new();

    for row in reader(text).deserialize() {
        let raw: RawLocationRow = row?;

        let ms_locations: Vec<MsLocation> = if raw.ms_locations.is_empty() {
            Vec::new()
        } else {
            match serde_json::from_str(&raw.ms_locations) {
                Ok(locations) => locations,
                Err(err) => {
                    tracing::warn!(
                        unique_id = %raw.unique_id,
                        error = %err,
                        "Malformed ms_locations cell, keeping row with no locations"
                    );
                    Vec::new()
                }
            }
        };

        records.push(LocationRecord {
            unique_id: raw.unique_id,
            ms_locations,
        });
    }

    Ok(records)
}
