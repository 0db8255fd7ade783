//! Tag pool model.

use serde::{Deserialize, Serialize};

/// The two contributing tag pools plus the active selection.
///
/// `suggested` is the read-only pool taken from the Analysis. `custom` is
/// session-local and append-only, deduplicated case-sensitively against both
/// pools. The active selection is a subset of the union of both pools, kept
/// in toggle order so re-query construction is deterministic; membership, not
/// order, is what filtering cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    suggested: Vec<String>,
    custom: Vec<String>,
    selected: Vec<String>,
}

impl TagSet {
    /// Creates a tag set seeded with the model-suggested expertise tags.
    pub fn from_expertise(expertise: Vec<String>) -> Self {
        Self {
            suggested: expertise,
            custom: Vec::new(),
            selected: Vec::new(),
        }
    }

    /// Model-suggested pool, in model output order.
    pub fn suggested(&self) -> &[String] {
        &self.suggested
    }

    /// User-authored pool, in append order.
    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// The active selection, in toggle order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Symmetric add/remove of `tag` in the active selection.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.selected.iter().position(|t| t == tag) {
            self.selected.remove(pos);
        } else {
            self.selected.push(tag.to_string());
        }
    }

    /// Appends `tag` to the custom pool unless it already exists in either
    /// pool (case-sensitive equality), then forces it into the selection.
    pub fn add_custom(&mut self, tag: &str) {
        let known =
            self.suggested.iter().any(|t| t == tag) || self.custom.iter().any(|t| t == tag);
        if !known {
            self.custom.push(tag.to_string());
        }
        if !self.is_selected(tag) {
            self.selected.push(tag.to_string());
        }
    }

    /// Clears the custom pool and the selection; the suggested pool is
    /// replaced only when a fresh analysis arrives via `from_expertise`.
    pub fn clear_session_state(&mut self) {
        self.custom.clear();
        self.selected.clear();
    }
}
