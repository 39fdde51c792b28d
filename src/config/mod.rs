pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, InitResult};
pub use types::{Config, ReportConfig};
