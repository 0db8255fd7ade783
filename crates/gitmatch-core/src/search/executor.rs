//! Concurrent query fan-out with best-effort collection.
//!
//! All queries of a round start together and are joined together: the round
//! settles only once every query has finished, successfully or not. There is
//! no ordering guarantee *between* in-flight queries, but surviving batches
//! are always folded in the order the queries were issued, so the merged
//! result is deterministic.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::{GitmatchError, Result};
use crate::issue::{IssueSearch, ResultSet};
use crate::search::{QueryFailure, SearchOutcome};

/// Runs every query concurrently against the search endpoint and merges the
/// surviving batches.
///
/// A failing individual query never aborts its siblings. Only when *every*
/// query fails does the round escalate to a hard `SearchFailed`; an empty
/// query list or a well-formed round with zero hits settles as an empty,
/// non-error outcome.
pub async fn execute_queries<S>(searcher: &S, queries: &[String]) -> Result<SearchOutcome>
where
    S: IssueSearch + ?Sized,
{
    if queries.is_empty() {
        return Ok(SearchOutcome::default());
    }

    debug!(query_count = queries.len(), "starting search round");

    let settled = join_all(queries.iter().map(|q| searcher.search_issues(q))).await;

    let mut results = ResultSet::new();
    let mut failures = Vec::new();

    // join_all preserves input order, giving the deterministic call-order fold.
    for (query, outcome) in queries.iter().zip(settled) {
        match outcome {
            Ok(batch) => {
                debug!(query = %query, hits = batch.len(), "query settled");
                results.insert_batch(batch);
            }
            Err(error) => {
                warn!(query = %query, %error, "query failed; continuing with siblings");
                failures.push(QueryFailure {
                    query: query.clone(),
                    error,
                });
            }
        }
    }

    if failures.len() == queries.len() {
        return Err(GitmatchError::SearchFailed {
            attempted: queries.len(),
        });
    }

    Ok(SearchOutcome { results, failures })
}
