pub mod config;
mod output;
pub mod utils;

use std::fs;
use std::path::Path;

use log::info;

use proxsearch_common::Result;
use proxsearch_search::{Evaluator, FsSource, QueryNode};

pub use config::ProxConfig;

pub const PROXSEARCH_VERSION: &str = env!("CARGO_PKG_VERSION");
pub static SOURCE_CONFIG_FILE: &str = "proxsearch_config.json";

/// Evaluates the query stored at `query_file_path` against the postings lists under `index_folder_path`,
/// returning the resulting postings list as json.
pub fn run(index_folder_path: &Path, query_file_path: &Path, config: &ProxConfig) -> Result<String> {
    let query = QueryNode::from_json(&fs::read_to_string(query_file_path)?)?;

    let source = FsSource::new(index_folder_path);
    let evaluator = Evaluator::new(&source, &config.default_field, config.default_distance);
    let pl = evaluator.evaluate(&query)?;

    info!("{} documents matched in field '{}', {} positions", pl.doc_freq(), pl.field(), pl.ctf());

    output::to_json(&pl, config.pretty_print)
}
