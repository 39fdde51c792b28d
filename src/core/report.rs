//! Markdown outline rendering for weekly reports
//!
//! # Output Structure
//!
//! ```text
//! * GitHub
//!     * Merged
//!         * [Fix bug](https://github.com/o/r/pull/1)
//!     * Reviewed
//!         * [Add feature](https://github.com/o/r/pull/2)
//! ```
//!
//! Sections always appear in the order Merged, Abandoned, Under Review,
//! In Progress, Reviewed, Issues. Empty sections are omitted.

use super::activity::EventSets;

/// Default top-level header line
pub const DEFAULT_HEADER: &str = "GitHub";

/// Default number of spaces per nesting level
pub const DEFAULT_INDENT: usize = 4;

/// Renders `EventSets` as a nested bullet outline
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    /// Text of the top-level bullet (default: "GitHub")
    pub header: String,
    /// Spaces per nesting level (default: 4)
    pub indent: usize,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl ReportFormatter {
    pub fn new(header: &str, indent: usize) -> Self {
        Self {
            header: header.to_string(),
            indent,
        }
    }

    /// Render the report. Lines are joined with `\n` without a trailing newline.
    pub fn format(&self, sets: &EventSets) -> String {
        let indent = " ".repeat(self.indent);
        let mut lines = vec![format!("* {}", self.header)];

        for (name, section) in sets.sections() {
            if section.is_empty() {
                continue;
            }
            lines.push(format!("{}* {}", indent, name));
            for title in section {
                lines.push(format!("{}{}* {}", indent, indent, title));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::activity::Title;

    #[test]
    fn test_empty_report_has_only_header() {
        let report = ReportFormatter::default().format(&EventSets::new());
        assert_eq!(report, "* GitHub");
    }

    #[test]
    fn test_omits_empty_sections() {
        let mut sets = EventSets::new();
        sets.reviewed.insert(Title::new("Add feature", "https://x/2"));

        let report = ReportFormatter::default().format(&sets);

        assert_eq!(
            report,
            "* GitHub\n    * Reviewed\n        * [Add feature](https://x/2)"
        );
        assert!(!report.contains("Merged"));
        assert!(!report.contains("Issues"));
    }

    #[test]
    fn test_section_order_and_sorted_members() {
        let mut sets = EventSets::new();
        sets.issues.insert(Title::new("Crash", "https://x/9"));
        sets.merged.insert(Title::new("b", "https://x/2"));
        sets.merged.insert(Title::new("a", "https://x/1"));
        sets.in_progress.insert(Title::new("WIP c", "https://x/3"));

        let report = ReportFormatter::default().format(&sets);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "* GitHub",
                "    * Merged",
                "        * [a](https://x/1)",
                "        * [b](https://x/2)",
                "    * In Progress",
                "        * [WIP c](https://x/3)",
                "    * Issues",
                "        * [Crash](https://x/9)",
            ]
        );
    }

    #[test]
    fn test_custom_header_and_indent() {
        let mut sets = EventSets::new();
        sets.abandoned.insert(Title::new("Old", "https://x/5"));

        let report = ReportFormatter::new("Code", 2).format(&sets);

        assert_eq!(report, "* Code\n  * Abandoned\n    * [Old](https://x/5)");
    }

    #[test]
    fn test_all_sections() {
        let mut sets = EventSets::new();
        sets.merged.insert(Title::new("m", "u1"));
        sets.abandoned.insert(Title::new("a", "u2"));
        sets.under_review.insert(Title::new("r", "u3"));
        sets.in_progress.insert(Title::new("p", "u4"));
        sets.reviewed.insert(Title::new("v", "u5"));
        sets.issues.insert(Title::new("i", "u6"));

        let report = ReportFormatter::default().format(&sets);
        let headers: Vec<&str> = report
            .lines()
            .filter(|l| l.starts_with("    * "))
            .map(|l| l.trim_start_matches("    * "))
            .collect();

        assert_eq!(
            headers,
            vec!["Merged", "Abandoned", "Under Review", "In Progress", "Reviewed", "Issues"]
        );
    }
}
