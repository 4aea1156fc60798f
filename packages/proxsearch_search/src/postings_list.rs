use std::rc::Rc;

use proxsearch_common::postings_list::{Posting, PostingsList};

use crate::cursor::{DocCursor, PositionCursor};

/// Doesn't implement the iterator interfaces, only the cursor ones.
///
/// Tracks the current posting (td) and the current position within it.
/// Seeking skips ahead with a binary search over the remaining postings,
/// so cursors only ever move forward.
pub struct PlIterator {
    pl: Rc<PostingsList>,
    idx: usize,
    pos_idx: usize,
}

impl PlIterator {
    pub fn new(pl: Rc<PostingsList>) -> Self {
        PlIterator { pl, idx: 0, pos_idx: 0 }
    }

    #[inline]
    pub fn pl(&self) -> &PostingsList {
        &self.pl
    }

    #[inline]
    pub fn td(&self) -> Option<&Posting> {
        self.pl.get(self.idx)
    }

    fn seek(&mut self, skipped: usize) {
        if skipped > 0 {
            self.idx += skipped;
            self.pos_idx = 0;
        }
    }
}

impl DocCursor for PlIterator {
    #[inline]
    fn doc(&self) -> Option<u32> {
        self.td().map(|td| td.doc_id)
    }

    fn advance_to(&mut self, doc_id: u32) {
        let remaining = &self.pl.postings()[self.idx..];
        let skipped = remaining.partition_point(|td| td.doc_id < doc_id);
        self.seek(skipped);
    }

    fn advance_past(&mut self, doc_id: u32) {
        let remaining = &self.pl.postings()[self.idx..];
        let skipped = remaining.partition_point(|td| td.doc_id <= doc_id);
        self.seek(skipped);
    }
}

impl PositionCursor for PlIterator {
    #[inline]
    fn position(&self) -> Option<u32> {
        self.td().and_then(|td| td.positions.get(self.pos_idx)).copied()
    }

    fn advance_position_past(&mut self, pos: u32) {
        if let Some(td) = self.pl.get(self.idx) {
            let skipped = td.positions[self.pos_idx..].partition_point(|&p| p <= pos);
            self.pos_idx += skipped;
        }
    }
}
