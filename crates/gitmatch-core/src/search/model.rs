//! Search round outcome models.

use serde::{Deserialize, Serialize};

use crate::error::GitmatchError;
use crate::issue::ResultSet;

/// One query that failed within an otherwise surviving search round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFailure {
    pub query: String,
    pub error: GitmatchError,
}

/// The settled outcome of one search round.
///
/// Partial failure is the expected nominal case when one of several queries
/// is malformed or throttled: surviving batches are merged into `results`
/// and each failed query is recorded in `failures`. An empty result set with
/// no failures is a valid, non-error outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: ResultSet,
    pub failures: Vec<QueryFailure>,
}

impl SearchOutcome {
    /// True when at least one query failed (but not all, or the round would
    /// have been escalated to a hard error).
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}
