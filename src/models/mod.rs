pub mod location;
pub mod manuscript;

pub use location::{LocationRecord, MsLocation};
pub use manuscript::{Field, Manuscript};
