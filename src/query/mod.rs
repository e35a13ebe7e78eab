//! Query evaluation over the loaded manuscript table: compound
//! search+filter predicates, date-range semantics, and facet indexing.

pub mod criteria;
pub mod dates;
pub mod engine;
pub mod facets;

pub use criteria::{DateRange, FilterCriteria};
pub use dates::is_date_in_range;
pub use engine::search;
pub use facets::unique_values;
