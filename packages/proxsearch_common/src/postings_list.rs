use std::slice;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: u32,
    pub positions: Vec<u32>,
}

impl Posting {
    /// Term frequency of the postings list's expression in this document
    #[inline]
    pub fn tf(&self) -> u32 {
        self.positions.len() as u32
    }
}

/// A field-tagged, document ordered inverted list.
///
/// Lists are append-only while being built, and are shared read-only
/// (behind an `Rc`) once complete. Every appended posting is checked against
/// the ordering invariants:
/// - document ids strictly ascending across the list
/// - positions strictly ascending within a posting
/// - no empty postings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostingsList {
    field: String,
    postings: Vec<Posting>,
    ctf: u64,
}

impl PostingsList {
    pub fn new(field: impl Into<String>) -> Self {
        PostingsList::with_capacity(field, 0)
    }

    pub fn with_capacity(field: impl Into<String>, capacity: usize) -> Self {
        PostingsList {
            field: field.into(),
            postings: Vec::with_capacity(capacity),
            ctf: 0,
        }
    }

    /// Builds a list from (doc id, positions) pairs, rejecting input that breaks the ordering invariants.
    pub fn from_postings<I>(field: impl Into<String>, postings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, Vec<u32>)>,
    {
        let postings = postings.into_iter();
        let mut pl = PostingsList::with_capacity(field, postings.size_hint().0);
        for (doc_id, positions) in postings {
            pl.try_append_posting(doc_id, positions)?;
        }

        Ok(pl)
    }

    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[inline]
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Posting> {
        self.postings.get(idx)
    }

    pub fn iter(&self) -> slice::Iter<Posting> {
        self.postings.iter()
    }

    /// Number of documents in the list
    #[inline]
    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }

    /// Total number of positions across all documents
    #[inline]
    pub fn ctf(&self) -> u64 {
        self.ctf
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn last_doc_id(&self) -> Option<u32> {
        self.postings.last().map(|posting| posting.doc_id)
    }

    fn check_posting(&self, doc_id: u32, positions: &[u32]) -> std::result::Result<(), &'static str> {
        if positions.is_empty() {
            return Err("posting has no positions");
        }

        if let Some(last_doc_id) = self.last_doc_id() {
            if doc_id <= last_doc_id {
                return Err("doc ids are not strictly ascending");
            }
        }

        if positions.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("positions are not strictly ascending");
        }

        Ok(())
    }

    /// Appends a posting read from an external collaborator (e.g. a postings file),
    /// returning an error instead of panicking on out of order data.
    pub fn try_append_posting(&mut self, doc_id: u32, positions: Vec<u32>) -> Result<()> {
        if let Err(reason) = self.check_posting(doc_id, &positions) {
            return Err(Error::MalformedPostings { field: self.field.clone(), doc_id, reason });
        }

        self.push(doc_id, positions);
        Ok(())
    }

    /// Appends a posting produced by query evaluation.
    ///
    /// Panics if the posting breaks the list's ordering invariants,
    /// which can only happen if an upstream cursor yielded unsorted data.
    pub fn append_posting(&mut self, doc_id: u32, positions: Vec<u32>) {
        if let Err(reason) = self.check_posting(doc_id, &positions) {
            panic!("cannot append doc {} to postings list of '{}': {}", doc_id, self.field, reason);
        }

        self.push(doc_id, positions);
    }

    fn push(&mut self, doc_id: u32, positions: Vec<u32>) {
        self.ctf += positions.len() as u64;
        self.postings.push(Posting { doc_id, positions });
    }
}

impl<'a> IntoIterator for &'a PostingsList {
    type Item = &'a Posting;
    type IntoIter = slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}
