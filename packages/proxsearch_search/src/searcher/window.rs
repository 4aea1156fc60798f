mod intersect;
mod scan;

use log::{info, warn};

use proxsearch_common::postings_list::PostingsList;
use proxsearch_common::{Error, Result};

use crate::p_debug;
use crate::searcher::operand::Operand;

pub use intersect::{find_next_matching_document, next_match, MatchedDoc};
pub use scan::{scan_windows, span_qualifies};

/// The unordered proximity (window) operator.
///
/// Matches documents containing every child, and within them,
/// every non-overlapping set of one position per child spanning less than `distance`.
/// Each such window is recorded at its rightmost position.
pub struct WindowOperator {
    field: String,
    distance: i32,
    children: Vec<Operand>,
}

impl WindowOperator {
    pub fn new(field: impl Into<String>) -> Self {
        WindowOperator {
            field: field.into(),
            distance: 0,
            children: Vec::new(),
        }
    }

    pub fn set_distance(&mut self, distance: i32) {
        self.distance = distance;

        info!("Window distance is {}", distance);
        if distance <= 0 {
            warn!("Window distance {} is not positive, no window will ever match", distance);
        }
    }

    #[inline]
    pub fn distance(&self) -> i32 {
        self.distance
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn children(&self) -> &[Operand] {
        &self.children
    }

    /// Adds the next child. The first child added is the pivot for intersecting documents.
    pub fn add_child(&mut self, child: Operand) -> Result<()> {
        if child.field() != self.field {
            return Err(Error::FieldMismatch {
                expected: self.field.clone(),
                found: child.field().to_owned(),
            });
        }

        self.children.push(child);
        Ok(())
    }

    /// Builds the result postings list.
    ///
    /// Consumes the operator, as the children's cursors are spent afterwards.
    pub fn evaluate(mut self) -> PostingsList {
        // Heuristic, exact size can't be known without processing
        let capacity = self.children.iter().map(Operand::doc_freq).min().unwrap_or(0);
        let mut result = PostingsList::with_capacity(self.field, capacity);

        if self.children.is_empty() {
            return result;
        }

        // For scan_windows, to minimize allocations
        let mut pointers = Vec::with_capacity(self.children.len());
        let mut num_docs_matched = 0;

        while let Some(mut matched) = next_match(self.children.as_mut_slice()) {
            let doc_id = matched.doc_id();
            let positions = matched.scan_windows(self.distance, &mut pointers);

            // Every child moves past the document, whether or not a window qualified
            drop(matched);
            num_docs_matched += 1;

            if !positions.is_empty() {
                result.append_posting(doc_id, positions);
            }
        }

        p_debug!(
            "Window/{} over {} children: {} docs contain all children, {} docs with windows",
            self.distance, self.children.len(), num_docs_matched, result.doc_freq(),
        );

        result
    }
}
