//! Tag refinement state machine.
//!
//! Owns the active filter tags and drives re-query construction. Selection
//! changes only feed the client-side filter; no network activity happens
//! until the user explicitly asks for a refinement round.

use serde::{Deserialize, Serialize};

use crate::tags::TagSet;

/// Fixed quality filters conjoined with every refinement query.
const REFINE_QUALITY_FILTERS: &str =
    r#"is:open is:issue no:assignee label:"help wanted" sort:updated-desc"#;

/// Where the refinement loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefinementState {
    /// No tags selected; the full result set is displayed.
    NoFilter,
    /// Tags selected; the client-side filter narrows the displayed set.
    Filtering,
    /// A refinement query is in flight.
    Requerying,
}

/// The tag refinement state machine.
///
/// Created fresh from each profile analysis with an empty selection and an
/// empty custom pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRefinement {
    state: RefinementState,
    tags: TagSet,
}

impl TagRefinement {
    /// Initial state for a fresh analysis: `NoFilter`, selection and custom
    /// pool cleared.
    pub fn new(expertise: Vec<String>) -> Self {
        Self {
            state: RefinementState::NoFilter,
            tags: TagSet::from_expertise(expertise),
        }
    }

    pub fn state(&self) -> RefinementState {
        self.state
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// The active selection, in toggle order.
    pub fn selection(&self) -> &[String] {
        self.tags.selected()
    }

    /// Symmetric add/remove of `tag`; moves to `Filtering` when the selection
    /// becomes non-empty and back to `NoFilter` when it empties. Triggers no
    /// network activity.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.tags.toggle(tag);
        self.sync_filter_state();
    }

    /// Adds a user-authored tag (deduplicated against both pools) and forces
    /// it into the selection.
    pub fn add_custom_tag(&mut self, tag: &str) {
        self.tags.add_custom(tag);
        self.sync_filter_state();
    }

    /// Starts a refinement round: moves to `Requerying` and yields the
    /// disjunctive query built from the selection *as it stands now*.
    ///
    /// Returns `None` (and stays put) when the selection is empty: a round
    /// with nothing selected is invalid. Each call composes a brand-new
    /// query; refinement is never incremental.
    pub fn begin_refine(&mut self) -> Option<String> {
        if self.tags.selected().is_empty() {
            return None;
        }
        self.state = RefinementState::Requerying;
        Some(self.build_query())
    }

    /// Settles a refinement round, returning to `Filtering`.
    pub fn finish_refine(&mut self) {
        self.sync_filter_state();
    }

    /// Forces the machine back to its initial shape for a new top-level
    /// profile search: both mutable pools cleared, `NoFilter`.
    pub fn reset(&mut self) {
        self.tags.clear_session_state();
        self.state = RefinementState::NoFilter;
    }

    fn sync_filter_state(&mut self) {
        self.state = if self.tags.selected().is_empty() {
            RefinementState::NoFilter
        } else {
            RefinementState::Filtering
        };
    }

    /// Active tags quoted as literal phrases, joined by OR, conjoined with
    /// the fixed quality filters.
    fn build_query(&self) -> String {
        let tags = self
            .tags
            .selected()
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(" OR ");
        format!("{tags} {REFINE_QUALITY_FILTERS}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> TagRefinement {
        TagRefinement::new(vec!["rust".to_string(), "cli".to_string()])
    }

    #[test]
    fn test_initial_state() {
        let m = machine();
        assert_eq!(m.state(), RefinementState::NoFilter);
        assert!(m.selection().is_empty());
        assert!(m.tags().custom().is_empty());
    }

    #[test]
    fn test_toggle_transitions() {
        let mut m = machine();
        m.toggle_tag("rust");
        assert_eq!(m.state(), RefinementState::Filtering);
        assert_eq!(m.selection(), ["rust".to_string()]);

        m.toggle_tag("rust");
        assert_eq!(m.state(), RefinementState::NoFilter);
        assert!(m.selection().is_empty());
    }

    #[test]
    fn test_add_custom_tag_dedups_against_suggested_pool() {
        let mut m = machine();
        m.add_custom_tag("rust");
        // Already in the expertise pool: custom pool untouched, but the
        // tag is still forced into the selection.
        assert!(m.tags().custom().is_empty());
        assert!(m.tags().is_selected("rust"));

        m.add_custom_tag("embedded");
        assert_eq!(m.tags().custom(), ["embedded".to_string()]);
        assert!(m.tags().is_selected("embedded"));

        // Appending again is a no-op on both the pool and the selection.
        m.add_custom_tag("embedded");
        assert_eq!(m.tags().custom(), ["embedded".to_string()]);
        assert_eq!(
            m.selection(),
            ["rust".to_string(), "embedded".to_string()]
        );
    }

    #[test]
    fn test_custom_tag_dedup_is_case_sensitive() {
        let mut m = machine();
        m.add_custom_tag("Rust");
        assert_eq!(m.tags().custom(), ["Rust".to_string()]);
    }

    #[test]
    fn test_begin_refine_builds_disjunctive_query() {
        let mut m = machine();
        m.toggle_tag("rust");
        m.toggle_tag("cli");

        let query = m.begin_refine().unwrap();
        assert_eq!(m.state(), RefinementState::Requerying);
        assert!(query.contains(r#""rust" OR "cli""#));
        assert!(query.contains("is:open"));
        assert!(query.contains("is:issue"));
        assert!(query.contains("no:assignee"));
        assert!(query.contains(r#"label:"help wanted""#));
        assert!(query.contains("sort:updated-desc"));

        m.finish_refine();
        assert_eq!(m.state(), RefinementState::Filtering);
    }

    #[test]
    fn test_begin_refine_requires_selection() {
        let mut m = machine();
        assert!(m.begin_refine().is_none());
        assert_eq!(m.state(), RefinementState::NoFilter);
    }

    #[test]
    fn test_refine_recomposes_from_current_selection() {
        let mut m = machine();
        m.toggle_tag("rust");
        let first = m.begin_refine().unwrap();
        m.finish_refine();

        m.toggle_tag("rust");
        m.toggle_tag("cli");
        let second = m.begin_refine().unwrap();
        assert!(first.contains(r#""rust""#));
        assert!(!second.contains(r#""rust""#));
        assert!(second.contains(r#""cli""#));
    }

    #[test]
    fn test_reset_clears_session_state() {
        let mut m = machine();
        m.add_custom_tag("embedded");
        m.toggle_tag("rust");
        m.reset();

        assert_eq!(m.state(), RefinementState::NoFilter);
        assert!(m.selection().is_empty());
        assert!(m.tags().custom().is_empty());
        // The suggested pool survives until a fresh analysis replaces it.
        assert_eq!(
            m.tags().suggested(),
            ["rust".to_string(), "cli".to_string()]
        );
    }
}
