/// Forward-only cursor over the ascending document ids an operand matches.
pub trait DocCursor {
    /// The document the cursor currently sits on, `None` once exhausted.
    fn doc(&self) -> Option<u32>;

    #[inline]
    fn has_match(&self) -> bool {
        self.doc().is_some()
    }

    /// Moves to the first document `>= doc_id`. Never moves backwards.
    fn advance_to(&mut self, doc_id: u32);

    /// Moves to the first document `> doc_id`. Never moves backwards.
    fn advance_past(&mut self, doc_id: u32);
}

/// Forward-only cursor over the ascending positions of the document
/// a [`DocCursor`] currently sits on.
///
/// Only meaningful while the owning document cursor stays on that document:
/// moving the document cursor restarts positions at the new document.
pub trait PositionCursor {
    fn position(&self) -> Option<u32>;

    #[inline]
    fn has_position(&self) -> bool {
        self.position().is_some()
    }

    /// Moves to the first position `> pos` within the current document.
    fn advance_position_past(&mut self, pos: u32);
}
