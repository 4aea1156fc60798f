use crate::cursor::{DocCursor, PositionCursor};

use super::scan;

/// Leapfrog intersection of the children's document cursors.
///
/// The first child is the pivot. Every other child is moved up to the pivot's document,
/// and whenever one overshoots it, the pivot is moved up to that document instead
/// and the round restarts. Returns `None` as soon as any cursor is exhausted.
pub fn find_next_matching_document<C: DocCursor>(children: &mut [C]) -> Option<u32> {
    let (pivot, rest) = children.split_first_mut()?;

    'restart: loop {
        let candidate = pivot.doc()?;

        for child in rest.iter_mut() {
            child.advance_to(candidate);
            let doc_id = child.doc()?;

            if doc_id != candidate {
                debug_assert!(doc_id > candidate);
                pivot.advance_to(doc_id);
                continue 'restart;
            }
        }

        return Some(candidate);
    }
}

/// Finds the next document all children agree on, see [`find_next_matching_document`].
///
/// The children stay positioned on the document for as long as the returned guard lives,
/// and are all advanced past it once it is dropped.
pub fn next_match<C: DocCursor>(children: &mut [C]) -> Option<MatchedDoc<'_, C>> {
    let doc_id = find_next_matching_document(children)?;
    Some(MatchedDoc { doc_id, children })
}

/// A document every child currently sits on.
///
/// Position cursors are only valid while the document cursors stay put,
/// so window scanning goes through this guard, and document cursors only move on drop.
pub struct MatchedDoc<'a, C: DocCursor> {
    doc_id: u32,
    children: &'a mut [C],
}

impl<'a, C: DocCursor> MatchedDoc<'a, C> {
    #[inline]
    pub fn doc_id(&self) -> u32 {
        self.doc_id
    }
}

impl<'a, C: DocCursor + PositionCursor> MatchedDoc<'a, C> {
    pub fn scan_windows(&mut self, distance: i32, pointers: &mut Vec<u32>) -> Vec<u32> {
        scan::scan_windows(&mut *self.children, distance, pointers)
    }
}

impl<'a, C: DocCursor> Drop for MatchedDoc<'a, C> {
    fn drop(&mut self) {
        for child in self.children.iter_mut() {
            child.advance_past(self.doc_id);
        }
    }
}
