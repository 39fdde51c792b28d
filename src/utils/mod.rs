pub mod token;

pub use token::{read_token_file, resolve_token};
