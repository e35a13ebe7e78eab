use serde::{Deserialize, Serialize};

/// Inclusive numeric range over the free-text death-date field, both
/// bounds optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl DateRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// A range constrains nothing when both bounds are blank.
    pub fn is_empty(&self) -> bool {
        !informative(&self.min) && !informative(&self.max)
    }
}

/// Per-field filter values for one query. Built fresh per query, never
/// persisted. Entries that carry no information (blank strings, empty
/// ranges) are skipped during evaluation, so `Default` means "no filters".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring match against the record id
    pub unique_id: Option<String>,

    /// Substring match against the author name
    pub author: Option<String>,

    /// Exact element membership in the record's category list
    pub categories: Option<String>,

    /// Exact match against the century bucket
    pub century: Option<String>,

    /// Substring match against any title element
    pub titles: Option<String>,

    /// Substring match against any shuhra element
    pub shuhras: Option<String>,

    /// Substring match against the raw death-date text
    pub death_date: Option<String>,

    /// Numeric range over the death-date field
    pub death_date_range: Option<DateRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unique_id(mut self, value: impl Into<String>) -> Self {
        self.unique_id = Some(value.into());
        self
    }

    pub fn with_author(mut self, value: impl Into<String>) -> Self {
        self.author = Some(value.into());
        self
    }

    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.categories = Some(value.into());
        self
    }

    pub fn with_century(mut self, value: impl Into<String>) -> Self {
        self.century = Some(value.into());
        self
    }

    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.titles = Some(value.into());
        self
    }

    pub fn with_shuhra(mut self, value: impl Into<String>) -> Self {
        self.shuhras = Some(value.into());
        self
    }

    pub fn with_death_date(mut self, value: impl Into<String>) -> Self {
        self.death_date = Some(value.into());
        self
    }

    pub fn with_death_date_range(mut self, range: DateRange) -> Self {
        self.death_date_range = Some(range);
        self
    }

    /// True when no entry carries information, i.e. evaluation would pass
    /// every record.
    pub fn is_empty(&self) -> bool {
        !informative(&self.unique_id)
            && !informative(&self.author)
            && !informative(&self.categories)
            && !informative(&self.century)
            && !informative(&self.titles)
            && !informative(&self.shuhras)
            && !informative(&self.death_date)
            && self
                .death_date_range
                .as_ref()
                .map(DateRange::is_empty)
                .unwrap_or(true)
    }
}

/// An entry is applied only when it holds a non-empty value.
fn informative(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
