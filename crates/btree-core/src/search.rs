//! Key lookup: descend from the root comparing against each node's sorted
//! key list until a match is found or a leaf is exhausted.

use crate::error::{IndexError, Result};
use crate::pager::PagedFile;

/// Walks down from the root looking for `key`, returning its value if
/// present and `Ok(None)` on a clean miss. An empty tree is reported as
/// `IndexError::EmptyTree` rather than a miss — the CLI distinguishes
/// "nothing to search" from "searched and found nothing".
pub fn search(pager: &mut PagedFile, key: u64) -> Result<Option<u64>> {
    if pager.is_empty() {
        return Err(IndexError::EmptyTree);
    }

    let mut block_id = pager.root_id();
    loop {
        let node = pager.read_node(block_id)?;
        log::trace!("search: descending into block {block_id} looking for key {key}");
        match node.keys.binary_search(&key) {
            Ok(idx) => return Ok(Some(node.values[idx])),
            Err(idx) => {
                if node.is_leaf() {
                    return Ok(None);
                }
                block_id = node.children[idx];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insert::insert;
    use tempfile::tempdir;

    #[test]
    fn search_on_empty_tree_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.bin");
        let mut pager = PagedFile::create(&path).unwrap();
        let err = search(&mut pager, 1).unwrap_err();
        assert!(matches!(err, IndexError::EmptyTree));
    }

    #[test]
    fn search_finds_inserted_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.bin");
        let mut pager = PagedFile::create(&path).unwrap();
        insert(&mut pager, 10, 100).unwrap();
        insert(&mut pager, 20, 200).unwrap();
        assert_eq!(search(&mut pager, 10).unwrap(), Some(100));
        assert_eq!(search(&mut pager, 20).unwrap(), Some(200));
        assert_eq!(search(&mut pager, 30).unwrap(), None);
    }
}
