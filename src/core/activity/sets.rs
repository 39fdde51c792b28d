//! The six classification buckets of a weekly report
//!
//! Sets are ordered by `Title`, so rendering is lexicographic and stable
//! across runs.

use super::types::Title;
use std::collections::BTreeSet;

/// Named membership sets filled by the classifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSets {
    pub merged: BTreeSet<Title>,
    pub abandoned: BTreeSet<Title>,
    pub under_review: BTreeSet<Title>,
    pub in_progress: BTreeSet<Title>,
    pub reviewed: BTreeSet<Title>,
    pub issues: BTreeSet<Title>,
}

impl EventSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove transitional entries that a later state supersedes.
    ///
    /// Merged and abandoned win over under review and in progress; under
    /// review wins over in progress. Steps run in that order so the last one
    /// only sees what survived the first two.
    pub fn reconcile(&mut self) {
        for title in self.merged.iter().chain(self.abandoned.iter()) {
            self.under_review.remove(title);
            self.in_progress.remove(title);
        }

        for title in &self.under_review {
            self.in_progress.remove(title);
        }
    }

    /// Sections in report order, paired with their display names
    pub fn sections(&self) -> [(&'static str, &BTreeSet<Title>); 6] {
        [
            ("Merged", &self.merged),
            ("Abandoned", &self.abandoned),
            ("Under Review", &self.under_review),
            ("In Progress", &self.in_progress),
            ("Reviewed", &self.reviewed),
            ("Issues", &self.issues),
        ]
    }

    /// Check if every set is empty
    pub fn is_empty(&self) -> bool {
        self.sections().iter().all(|(_, set)| set.is_empty())
    }

    /// Total number of entries across all sets
    pub fn total(&self) -> usize {
        self.sections().iter().map(|(_, set)| set.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(name: &str) -> Title {
        Title::new(name, &format!("https://github.com/o/r/pull/{}", name.len()))
    }

    fn is_disjoint(a: &BTreeSet<Title>, b: &BTreeSet<Title>) -> bool {
        a.intersection(b).next().is_none()
    }

    #[test]
    fn test_new_is_empty() {
        let sets = EventSets::new();
        assert!(sets.is_empty());
        assert_eq!(sets.total(), 0);
    }

    #[test]
    fn test_reconcile_merged_dominates() {
        let mut sets = EventSets::new();
        sets.merged.insert(title("a"));
        sets.under_review.insert(title("a"));
        sets.in_progress.insert(title("a"));

        sets.reconcile();

        assert!(sets.merged.contains(&title("a")));
        assert!(sets.under_review.is_empty());
        assert!(sets.in_progress.is_empty());
    }

    #[test]
    fn test_reconcile_abandoned_dominates() {
        let mut sets = EventSets::new();
        sets.abandoned.insert(title("b"));
        sets.under_review.insert(title("b"));
        sets.in_progress.insert(title("b"));

        sets.reconcile();

        assert!(sets.abandoned.contains(&title("b")));
        assert!(sets.under_review.is_empty());
        assert!(sets.in_progress.is_empty());
    }

    #[test]
    fn test_reconcile_under_review_dominates_in_progress() {
        let mut sets = EventSets::new();
        sets.under_review.insert(title("c"));
        sets.in_progress.insert(title("c"));
        sets.in_progress.insert(title("dd"));

        sets.reconcile();

        assert!(sets.under_review.contains(&title("c")));
        assert_eq!(sets.in_progress.len(), 1);
        assert!(sets.in_progress.contains(&title("dd")));
    }

    #[test]
    fn test_reconcile_leaves_reviewed_and_issues() {
        let mut sets = EventSets::new();
        sets.merged.insert(title("a"));
        sets.reviewed.insert(title("a"));
        sets.issues.insert(title("a"));

        sets.reconcile();

        assert!(sets.reviewed.contains(&title("a")));
        assert!(sets.issues.contains(&title("a")));
    }

    #[test]
    fn test_reconcile_invariants() {
        let mut sets = EventSets::new();
        for name in ["a", "bb", "ccc", "dddd", "eeeee"] {
            sets.under_review.insert(title(name));
            sets.in_progress.insert(title(name));
        }
        sets.merged.insert(title("a"));
        sets.abandoned.insert(title("bb"));
        sets.in_progress.insert(title("ffffff"));

        sets.reconcile();

        assert!(is_disjoint(&sets.merged, &sets.under_review));
        assert!(is_disjoint(&sets.merged, &sets.in_progress));
        assert!(is_disjoint(&sets.abandoned, &sets.under_review));
        assert!(is_disjoint(&sets.abandoned, &sets.in_progress));
        assert!(is_disjoint(&sets.under_review, &sets.in_progress));
        assert_eq!(sets.under_review.len(), 3);
        assert_eq!(sets.in_progress.len(), 1);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut sets = EventSets::new();
        sets.merged.insert(title("a"));
        sets.under_review.insert(title("a"));
        sets.under_review.insert(title("bb"));
        sets.in_progress.insert(title("bb"));

        sets.reconcile();
        let once = sets.clone();
        sets.reconcile();

        assert_eq!(sets, once);
    }

    #[test]
    fn test_sections_order() {
        let sets = EventSets::new();
        let names: Vec<&str> = sets.sections().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["Merged", "Abandoned", "Under Review", "In Progress", "Reviewed", "Issues"]
        );
    }
}
