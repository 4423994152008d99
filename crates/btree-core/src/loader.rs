//! CSV ingestion: each line is `key,value`, loaded one at a time.
//!
//! The index file is reopened fresh for every line rather than held open
//! across the whole load, mirroring how the original command-line tool
//! this format comes from drove its own insert loop — each insert is an
//! independent, fully-flushed operation rather than one large transaction.

use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::insert::{insert, InsertOutcome};
use crate::pager::PagedFile;

/// What happened to one CSV line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Inserted { key: u64, outcome_is_root: bool },
    RootSplit { new_root_key: u64 },
    Duplicate { key: u64 },
    Malformed { line: usize, text: String },
}

/// Loads every `key,value` line of `csv_path` into the index at
/// `index_path`, reopening the index file for each line. Malformed lines
/// and duplicate keys are reported as skipped rather than aborting the
/// whole load.
///
/// The index file is opened read-only once up front purely to check it
/// exists and carries a valid magic, before any CSV line is touched — the
/// same pre-check `project3.py`'s `load()` performs before its insert loop.
pub fn load<P: AsRef<Path>>(index_path: P, csv_path: P) -> Result<Vec<LoadEvent>> {
    PagedFile::open_read_only(index_path.as_ref())?;

    let contents = fs::read_to_string(csv_path)?;
    let mut events = Vec::with_capacity(contents.lines().count());

    for (line_no, line) in contents.lines().enumerate() {
        let line_num = line_no + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (key, value) = match parse_csv_line(trimmed) {
            Some(pair) => pair,
            None => {
                events.push(LoadEvent::Malformed {
                    line: line_num,
                    text: trimmed.to_string(),
                });
                continue;
            }
        };

        let mut pager = PagedFile::open(index_path.as_ref())?;
        match insert(&mut pager, key, value) {
            Ok(InsertOutcome::InsertedAsRoot) => events.push(LoadEvent::Inserted {
                key,
                outcome_is_root: true,
            }),
            Ok(InsertOutcome::Inserted) => events.push(LoadEvent::Inserted {
                key,
                outcome_is_root: false,
            }),
            Ok(InsertOutcome::RootSplit { new_root_key }) => {
                events.push(LoadEvent::RootSplit { new_root_key })
            }
            Err(IndexError::DuplicateKey) => events.push(LoadEvent::Duplicate { key }),
            Err(e) => return Err(e),
        }
    }

    Ok(events)
}

fn parse_csv_line(line: &str) -> Option<(u64, u64)> {
    let mut parts = line.splitn(2, ',');
    let key = parts.next()?.trim().parse().ok()?;
    let value = parts.next()?.trim().parse().ok()?;
    Some((key, value))
}
