//! Concurrent search fan-out and its outcome model.

pub mod executor;
pub mod model;

pub use executor::execute_queries;
pub use model::{QueryFailure, SearchOutcome};
