//! Public facade tying the paged file together with the search, insert,
//! traversal, and loader engines. This is the surface the CLI drives.

use std::path::Path;

use crate::error::Result;
use crate::insert::InsertOutcome;
use crate::loader::LoadEvent;
use crate::pager::PagedFile;
use crate::{loader, search, traverse};

pub use crate::error::IndexError;
pub use crate::insert::InsertOutcome as Outcome;

/// Creates a new, empty index file at `path`.
pub fn create<P: AsRef<Path>>(path: P) -> Result<()> {
    PagedFile::create(path)?;
    Ok(())
}

/// Inserts `key,value` into the index at `path`.
pub fn insert<P: AsRef<Path>>(path: P, key: u64, value: u64) -> Result<InsertOutcome> {
    let mut pager = PagedFile::open(path)?;
    crate::insert::insert(&mut pager, key, value)
}

/// Looks up `key` in the index at `path`.
pub fn search<P: AsRef<Path>>(path: P, key: u64) -> Result<Option<u64>> {
    let mut pager = PagedFile::open_read_only(path)?;
    search::search(&mut pager, key)
}

/// Loads every line of `csv_path` into the index at `index_path`.
pub fn load<P: AsRef<Path>>(index_path: P, csv_path: P) -> Result<Vec<LoadEvent>> {
    loader::load(index_path, csv_path)
}

/// Writes every `key,value` pair in ascending key order to `out`. Backs
/// both the CLI's `print` (stdout) and `extract` (a new file) commands —
/// they differ only in which `Write` sink they hand in.
pub fn print<P: AsRef<Path>, W: std::io::Write>(path: P, out: &mut W) -> Result<()> {
    let mut pager = PagedFile::open_read_only(path)?;
    traverse::print(&mut pager, out)
}
