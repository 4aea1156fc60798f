use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use proxsearch_common::postings_list::PostingsList;
use proxsearch_common::{Error, Result};

use crate::p_debug;

pub static PL_FILE_EXT: &str = "json";

/// Supplies the raw postings of a term within a field.
///
/// Terms missing from the index give an empty list. Storage failures are returned as is.
pub trait PostingsSource {
    fn postings(&self, field: &str, term: &str) -> Result<Rc<PostingsList>>;
}

type PlKey = (String, String);

#[derive(Default)]
pub struct MemorySource {
    pls: FxHashMap<PlKey, Rc<PostingsList>>,
}

impl MemorySource {
    pub fn new() -> Self {
        MemorySource::default()
    }

    /// Adds the postings of `term`, under the field the list is tagged with.
    pub fn insert(&mut self, term: &str, pl: PostingsList) {
        self.pls.insert((pl.field().to_owned(), term.to_owned()), Rc::new(pl));
    }

    pub fn with(mut self, term: &str, pl: PostingsList) -> Self {
        self.insert(term, pl);
        self
    }

    pub fn len(&self) -> usize {
        self.pls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pls.is_empty()
    }
}

impl PostingsSource for MemorySource {
    fn postings(&self, field: &str, term: &str) -> Result<Rc<PostingsList>> {
        let pl = self.pls
            .get(&(field.to_owned(), term.to_owned()))
            .map(Rc::clone)
            .unwrap_or_else(|| Rc::new(PostingsList::new(field)));
        Ok(pl)
    }
}

/// Reads postings lists from a directory of json files, one per term.
///
/// Layout: `<root>/<field>/<term>.json`, each file being an array of
/// `[doc_id, [positions...]]` pairs in ascending doc id order.
///
/// Lists are read lazily and kept for the lifetime of the source.
pub struct FsSource {
    root: PathBuf,
    cache: RefCell<FxHashMap<PlKey, Rc<PostingsList>>>,
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(|c: char| c == '/' || c == '\\' || std::path::is_separator(c))
    {
        return Err(Error::InvalidTerm(name.to_owned()));
    }

    Ok(())
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSource { root: root.into(), cache: RefCell::new(FxHashMap::default()) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn pl_path(&self, field: &str, term: &str) -> Result<PathBuf> {
        check_name(field)?;
        check_name(term)?;

        Ok(self.root.join(field).join(format!("{}.{}", term, PL_FILE_EXT)))
    }

    fn read_pl(&self, field: &str, term: &str) -> Result<PostingsList> {
        let path = self.pl_path(field, term)?;

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                p_debug!("No postings for '{}' in field '{}'", term, field);
                return Ok(PostingsList::new(field));
            }
            Err(e) => return Err(e.into()),
        };

        let postings: Vec<(u32, Vec<u32>)> = serde_json::from_str(&raw)?;
        PostingsList::from_postings(field, postings)
    }

    /// Writes a postings list in the layout read by this source.
    pub fn write_pl(&self, term: &str, pl: &PostingsList) -> Result<()> {
        let path = self.pl_path(pl.field(), term)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let postings: Vec<(u32, &[u32])> = pl.iter().map(|td| (td.doc_id, td.positions.as_slice())).collect();
        fs::write(&path, serde_json::to_string(&postings)?)?;

        self.cache.borrow_mut().remove(&(pl.field().to_owned(), term.to_owned()));
        Ok(())
    }
}

impl PostingsSource for FsSource {
    fn postings(&self, field: &str, term: &str) -> Result<Rc<PostingsList>> {
        let key = (field.to_owned(), term.to_owned());
        if let Some(pl) = self.cache.borrow().get(&key) {
            return Ok(Rc::clone(pl));
        }

        let pl = Rc::new(self.read_pl(field, term)?);
        self.cache.borrow_mut().insert(key, Rc::clone(&pl));

        Ok(pl)
    }
}


#[cfg(test)]
mod test {
    use std::fs;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use proxsearch_common::Error;

    use super::{FsSource, MemorySource, PostingsSource};
    use crate::postings_list::test::to_pl;

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with("lorem", to_pl("body", "[1,2]"))
            .with("lorem", to_pl("title", "null, [1]"));
        assert_eq!(source.len(), 2);

        assert_eq!(*source.postings("body", "lorem").unwrap(), to_pl("body", "[1,2]"));
        assert_eq!(*source.postings("title", "lorem").unwrap(), to_pl("title", "null, [1]"));

        let missing = source.postings("body", "ipsum").unwrap();
        assert!(missing.is_empty());
        assert_eq!(missing.field(), "body");
    }

    #[test]
    fn test_fs_source_read_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("body")).unwrap();
        fs::write(dir.path().join("body").join("lorem.json"), "[[0, [1, 5]], [3, [2]]]").unwrap();

        let source = FsSource::new(dir.path());
        let pl = source.postings("body", "lorem").unwrap();
        assert_eq!(*pl, to_pl("body", "[1,5], null, null, [2]"));

        // Served from the cache from now on
        fs::remove_file(dir.path().join("body").join("lorem.json")).unwrap();
        assert!(Rc::ptr_eq(&pl, &source.postings("body", "lorem").unwrap()));
    }

    #[test]
    fn test_fs_source_write_pl() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());

        let pl = to_pl("title", "null, [4,9], [1]");
        source.write_pl("ipsum", &pl).unwrap();

        assert!(dir.path().join("title").join("ipsum.json").is_file());
        assert_eq!(*source.postings("title", "ipsum").unwrap(), pl);
    }

    #[test]
    fn test_fs_source_missing_term() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());

        let pl = source.postings("body", "lorem").unwrap();
        assert!(pl.is_empty());
        assert_eq!(pl.field(), "body");
    }

    #[test]
    fn test_fs_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("body")).unwrap();
        fs::write(dir.path().join("body").join("bad.json"), "[[0, [1").unwrap();
        fs::write(dir.path().join("body").join("unsorted.json"), "[[2, [1]], [1, [1]]]").unwrap();
        // A directory in place of the file can't be read
        fs::create_dir(dir.path().join("body").join("dir.json")).unwrap();

        let source = FsSource::new(dir.path());
        assert!(matches!(source.postings("body", "bad"), Err(Error::Json(_))));
        assert!(matches!(source.postings("body", "unsorted"), Err(Error::MalformedPostings { doc_id: 1, .. })));
        assert!(matches!(source.postings("body", "dir"), Err(Error::Io(_))));

        for (field, term) in [("body", "../lorem"), ("..", "lorem"), ("body", ""), ("a/b", "lorem")].iter() {
            assert!(matches!(source.postings(field, term), Err(Error::InvalidTerm(_))));
        }
    }
}
