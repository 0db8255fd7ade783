//! Client-side narrowing of the current result set.
//!
//! A pure, synchronous projection: no network I/O, recomputed on every
//! change to the result set or the active tag selection.

use crate::issue::{Issue, ResultSet};

/// Narrows `results` to issues matching at least one active tag.
///
/// With an empty selection the full set passes through unchanged, in the
/// result set's own iteration order. Otherwise an issue is retained iff any
/// lower-cased tag is a literal substring of its lower-cased corpus (title,
/// body, owning repository, label names). OR semantics, not AND.
pub fn filter_issues(results: &ResultSet, active_tags: &[String]) -> Vec<Issue> {
    if active_tags.is_empty() {
        return results.iter().cloned().collect();
    }

    let needles: Vec<String> = active_tags.iter().map(|t| t.to_lowercase()).collect();

    results
        .iter()
        .filter(|issue| {
            let corpus = issue.filter_corpus();
            needles.iter().any(|needle| corpus.contains(needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Label;
    use chrono::Utc;

    fn issue(id: u64, title: &str, body: Option<&str>, labels: &[&str]) -> Issue {
        Issue {
            id,
            number: id,
            title: title.to_string(),
            body: body.map(str::to_string),
            state: "open".to_string(),
            created_at: Utc::now(),
            comments: 0,
            labels: labels
                .iter()
                .map(|name| Label {
                    name: name.to_string(),
                    color: "ededed".to_string(),
                })
                .collect(),
            repo_full_name: "octo/widgets".to_string(),
            html_url: format!("https://github.com/octo/widgets/issues/{id}"),
        }
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_passes_through() {
        let set = ResultSet::merge([vec![
            issue(1, "a", None, &[]),
            issue(2, "b", None, &[]),
        ]]);
        let filtered = filter_issues(&set, &[]);
        assert_eq!(filtered.len(), set.len());
        assert_eq!(filtered, set.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn test_or_semantics() {
        let set = ResultSet::merge([vec![issue(
            1,
            "Fix rust panic in parser",
            None,
            &[],
        )]]);

        // Corpus contains "rust" but not "go": the OR keeps it...
        assert_eq!(filter_issues(&set, &tags(&["rust", "go"])).len(), 1);
        // ...but "go" alone drops it.
        assert_eq!(filter_issues(&set, &tags(&["go"])).len(), 0);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let set = ResultSet::merge([vec![
            issue(1, "Improve CLI ergonomics", None, &["cli"]),
            issue(2, "Docs typo", None, &[]),
        ]]);
        let selection = tags(&["cli"]);

        let once = filter_issues(&set, &selection);
        let twice = filter_issues(&once.iter().cloned().collect::<ResultSet>(), &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_matches_are_case_insensitive() {
        let set = ResultSet::merge([vec![issue(1, "RUST rewrite", None, &[])]]);
        assert_eq!(filter_issues(&set, &tags(&["Rust"])).len(), 1);
    }

    #[test]
    fn test_corpus_covers_body_repo_and_labels() {
        let set = ResultSet::merge([vec![
            issue(1, "untitled", Some("needs async rework"), &[]),
            issue(2, "untitled", None, &["good first issue"]),
            issue(3, "untitled", None, &[]),
        ]]);

        assert_eq!(filter_issues(&set, &tags(&["async"])).len(), 1);
        assert_eq!(filter_issues(&set, &tags(&["good first"])).len(), 1);
        // repo_full_name is part of every corpus.
        assert_eq!(filter_issues(&set, &tags(&["widgets"])).len(), 3);
    }

    #[test]
    fn test_absent_body_is_treated_as_empty() {
        let set = ResultSet::merge([vec![issue(1, "title only", None, &[])]]);
        assert!(filter_issues(&set, &tags(&["missing"])).is_empty());
    }
}
