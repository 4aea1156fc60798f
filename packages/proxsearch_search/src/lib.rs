pub mod cursor;
pub mod postings_list;
pub mod searcher;
pub mod source;
mod utils;

pub use cursor::{DocCursor, PositionCursor};
pub use postings_list::PlIterator;
pub use proxsearch_common::postings_list::{Posting, PostingsList};
pub use proxsearch_common::{Error, Result};
pub use searcher::operand::Operand;
pub use searcher::query::QueryNode;
pub use searcher::window::WindowOperator;
pub use searcher::Evaluator;
pub use source::{FsSource, MemorySource, PostingsSource};
