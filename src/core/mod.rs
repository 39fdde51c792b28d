pub mod activity;
pub mod period;
pub mod report;
pub mod weekly;

pub use activity::{Classifier, EventSets, TimeWindow};
pub use report::ReportFormatter;
pub use weekly::WeeklyReport;
