//! Developer profile domain: models and the data source trait.

pub mod model;
pub mod source;

pub use model::{Profile, RepositorySummary};
pub use source::ProfileSource;
