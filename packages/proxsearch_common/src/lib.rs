pub mod error;
pub mod postings_list;

pub use error::{Error, Result};

pub static DEFAULT_FIELD: &str = "body";
