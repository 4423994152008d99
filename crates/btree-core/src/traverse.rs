//! In-order traversal: every key/value pair in ascending key order.

use std::io::Write;

use crate::error::Result;
use crate::pager::PagedFile;

/// Writes `key,value` for every entry in the tree, in ascending key
/// order, one pair per line.
pub fn print<W: Write>(pager: &mut PagedFile, out: &mut W) -> Result<()> {
    if pager.is_empty() {
        return Ok(());
    }
    traverse_node(pager, pager.root_id(), out)
}

/// Collects every entry in ascending key order, for callers that want
/// the pairs in memory rather than written out (used by `extract`).
pub fn collect(pager: &mut PagedFile) -> Result<Vec<(u64, u64)>> {
    let mut pairs = Vec::new();
    if !pager.is_empty() {
        collect_node(pager, pager.root_id(), &mut pairs)?;
    }
    Ok(pairs)
}

fn traverse_node<W: Write>(pager: &mut PagedFile, block_id: u64, out: &mut W) -> Result<()> {
    let node = pager.read_node(block_id)?;
    for i in 0..node.num_keys() {
        if !node.is_leaf() {
            traverse_node(pager, node.children[i], out)?;
        }
        writeln!(out, "{},{}", node.keys[i], node.values[i])?;
    }
    if !node.is_leaf() {
        traverse_node(pager, *node.children.last().unwrap(), out)?;
    }
    Ok(())
}

fn collect_node(pager: &mut PagedFile, block_id: u64, pairs: &mut Vec<(u64, u64)>) -> Result<()> {
    let node = pager.read_node(block_id)?;
    for i in 0..node.num_keys() {
        if !node.is_leaf() {
            collect_node(pager, node.children[i], pairs)?;
        }
        pairs.push((node.keys[i], node.values[i]));
    }
    if !node.is_leaf() {
        collect_node(pager, *node.children.last().unwrap(), pairs)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insert::insert;
    use tempfile::tempdir;

    #[test]
    fn traversal_is_sorted_even_after_splits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.bin");
        let mut pager = crate::pager::PagedFile::create(&path).unwrap();
        for k in [50u64, 10, 90, 30, 70, 20, 80, 40, 60, 5, 15, 25, 35, 45] {
            insert(&mut pager, k, k * 2).unwrap();
        }
        let pairs = collect(&mut pager).unwrap();
        let keys: Vec<u64> = pairs.iter().map(|(k, _)| *k).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        for (k, v) in pairs {
            assert_eq!(v, k * 2);
        }
    }

    #[test]
    fn print_on_empty_tree_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("idx.bin");
        let mut pager = PagedFile::create(&path).unwrap();
        let mut out = Vec::new();
        print(&mut pager, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
