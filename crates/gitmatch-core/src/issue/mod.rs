//! Issue domain: models, the search endpoint trait, and the
//! unique-by-identity result set.

pub mod model;
pub mod result_set;
pub mod search;

pub use model::{Issue, Label};
pub use result_set::ResultSet;
pub use search::IssueSearch;
