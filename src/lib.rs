pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod github;
pub mod utils;

pub use error::{Error, Result};
