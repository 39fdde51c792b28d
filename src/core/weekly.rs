//! Weekly report generation
//!
//! Wires the event source, time window, classifier and formatter together:
//! fetch → filter → classify (with reconciliation) → render.

use super::activity::{Classifier, EventSets, TimeWindow};
use super::period::format_date;
use super::report::ReportFormatter;
use crate::error::Result;
use crate::github::EventSource;

/// Generates the weekly report for one tracked user and window
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    classifier: Classifier,
    window: TimeWindow,
    formatter: ReportFormatter,
}

impl WeeklyReport {
    pub fn new(classifier: Classifier, window: TimeWindow, formatter: ReportFormatter) -> Self {
        Self {
            classifier,
            window,
            formatter,
        }
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// Fetch, filter and classify events into reconciled sets
    pub fn collect(&self, source: &dyn EventSource) -> Result<EventSets> {
        tracing::info!(
            "Searching for events between {} and {}",
            format_date(self.window.start),
            format_date(self.window.end())
        );

        let events = source.list_events(self.classifier.user())?;
        let events = self.window.filter(events);
        Ok(self.classifier.classify(&events))
    }

    /// Produce the rendered report text
    pub fn generate(&self, source: &dyn EventSource) -> Result<String> {
        let sets = self.collect(source)?;
        Ok(self.formatter.format(&sets))
    }
}
