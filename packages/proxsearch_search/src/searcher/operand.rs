use std::fmt;
use std::rc::Rc;

use proxsearch_common::postings_list::PostingsList;

use crate::cursor::{DocCursor, PositionCursor};
use crate::postings_list::PlIterator;
use crate::searcher::window::WindowOperator;

/// A child of a window operator.
///
/// Nested window operators are evaluated upfront, when they are wrapped,
/// so both kinds iterate a finished postings list.
pub enum Operand {
    /// Raw postings of a term, from the index
    Term { term: String, cursor: PlIterator },
    /// The result of a nested window operator
    Window { distance: i32, cursor: PlIterator },
}

impl Operand {
    pub fn term(term: impl Into<String>, pl: Rc<PostingsList>) -> Self {
        Operand::Term { term: term.into(), cursor: PlIterator::new(pl) }
    }

    pub fn window(op: WindowOperator) -> Self {
        let distance = op.distance();
        Operand::Window { distance, cursor: PlIterator::new(Rc::new(op.evaluate())) }
    }

    #[inline]
    fn cursor(&self) -> &PlIterator {
        match self {
            Operand::Term { cursor, .. } | Operand::Window { cursor, .. } => cursor,
        }
    }

    #[inline]
    fn cursor_mut(&mut self) -> &mut PlIterator {
        match self {
            Operand::Term { cursor, .. } | Operand::Window { cursor, .. } => cursor,
        }
    }

    pub fn field(&self) -> &str {
        self.cursor().pl().field()
    }

    pub fn doc_freq(&self) -> usize {
        self.cursor().pl().doc_freq()
    }
}

impl DocCursor for Operand {
    #[inline]
    fn doc(&self) -> Option<u32> {
        self.cursor().doc()
    }

    #[inline]
    fn advance_to(&mut self, doc_id: u32) {
        self.cursor_mut().advance_to(doc_id)
    }

    #[inline]
    fn advance_past(&mut self, doc_id: u32) {
        self.cursor_mut().advance_past(doc_id)
    }
}

impl PositionCursor for Operand {
    #[inline]
    fn position(&self) -> Option<u32> {
        self.cursor().position()
    }

    #[inline]
    fn advance_position_past(&mut self, pos: u32) {
        self.cursor_mut().advance_position_past(pos)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Term { term, .. } => write!(f, "{}.{}", term, self.field()),
            Operand::Window { distance, .. } => write!(f, "#window/{}", distance),
        }
    }
}
