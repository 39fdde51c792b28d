//! Reporting time window
//!
//! Events are kept only when their creation time falls strictly between the
//! window start and `start + duration`.

use super::types::ActivityEvent;
use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};

/// An open interval `(start, start + duration)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub duration: Duration,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Fails when `start + duration` falls outside the representable date range
    pub fn new(start: DateTime<Utc>, duration: Duration) -> Result<Self> {
        let end = start
            .checked_add_signed(duration)
            .ok_or_else(|| Error::InvalidDuration(duration.to_string()))?;

        Ok(Self {
            start,
            duration,
            end,
        })
    }

    /// Exclusive upper bound of the window
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `timestamp` lies strictly inside the window
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp > self.start && timestamp < self.end()
    }

    /// Keep the events created inside the window, preserving input order
    pub fn filter(&self, events: Vec<ActivityEvent>) -> Vec<ActivityEvent> {
        let total = events.len();
        let kept: Vec<ActivityEvent> = events
            .into_iter()
            .filter(|e| self.contains(e.created_at))
            .collect();

        tracing::debug!(total, kept = kept.len(), "filtered events to window");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::activity::types::EventKind;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn push(id: &str, created_at: DateTime<Utc>) -> ActivityEvent {
        ActivityEvent::new(id, created_at, EventKind::Push)
    }

    fn week_of_jan_8() -> TimeWindow {
        TimeWindow::new(at(8, 0), Duration::days(7)).unwrap()
    }

    #[test]
    fn test_end() {
        assert_eq!(week_of_jan_8().end(), at(15, 0));
    }

    #[test]
    fn test_window_past_date_range_is_error() {
        let huge = Duration::try_weeks(100_000_000).unwrap();
        let err = TimeWindow::new(at(8, 0), huge).unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(_)));
    }

    #[test]
    fn test_window_at_date_range_limit() {
        let end = DateTime::<Utc>::MAX_UTC;
        let window = TimeWindow::new(end - Duration::days(7), Duration::days(7)).unwrap();
        assert_eq!(window.end(), end);
        assert!(!window.contains(end));
    }

    #[test]
    fn test_contains_inside() {
        let window = week_of_jan_8();
        assert!(window.contains(at(8, 1)));
        assert!(window.contains(at(12, 12)));
        assert!(window.contains(at(14, 23)));
    }

    #[test]
    fn test_contains_excludes_bounds() {
        let window = week_of_jan_8();
        assert!(!window.contains(at(8, 0)));
        assert!(!window.contains(at(15, 0)));
    }

    #[test]
    fn test_contains_outside() {
        let window = week_of_jan_8();
        assert!(!window.contains(at(7, 23)));
        assert!(!window.contains(at(20, 0)));
    }

    #[test]
    fn test_filter_preserves_order() {
        let events = vec![
            push("3", at(13, 0)),
            push("out-before", at(1, 0)),
            push("1", at(9, 0)),
            push("boundary", at(15, 0)),
            push("2", at(9, 0)),
        ];
        let kept = week_of_jan_8().filter(events);
        let ids: Vec<&str> = kept.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_filter_empty() {
        assert!(week_of_jan_8().filter(Vec::new()).is_empty());
    }
}
