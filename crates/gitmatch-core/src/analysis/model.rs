//! Analysis domain model.

use serde::{Deserialize, Serialize};

/// The structured analysis synthesized from a profile.
///
/// Produced once per profile fetch and immutable afterward. It seeds both
/// the initial multi-query search and every later tag-refinement query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Model-suggested skill/interest tags, in model output order.
    ///
    /// Order is display order only; membership is what matters.
    pub expertise: Vec<String>,
    /// Short natural-language persona summary.
    pub summary: String,
    /// Platform search queries, typically 3. Treated as opaque strings;
    /// a malformed query surfaces later as a per-query search failure.
    #[serde(rename = "suggestedQueries")]
    pub suggested_queries: Vec<String>,
}
