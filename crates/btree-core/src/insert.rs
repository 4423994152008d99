//! Insertion: descend to the owning leaf, insert in sorted order, and
//! split any node that overflows past `MAX_KEYS`, promoting the median
//! key upward until either a parent absorbs it or a new root is created.

use crate::block::{Node, MAX_KEYS};
use crate::error::{IndexError, Result};
use crate::pager::PagedFile;

/// What happened as a result of an `insert` call — distinguishes the
/// three cases the CLI reports differently to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The tree was empty; this key became the sole entry of a new root.
    InsertedAsRoot,
    /// The key was added to an existing leaf with no split required.
    Inserted,
    /// Inserting this key overflowed all the way to the root, which split.
    RootSplit { new_root_key: u64 },
}

pub fn insert(pager: &mut PagedFile, key: u64, value: u64) -> Result<InsertOutcome> {
    if pager.is_empty() {
        let id = pager.allocate()?;
        let node = Node::new_leaf(id, 0, key, value);
        pager.write_node(&node)?;
        pager.set_root(id)?;
        log::debug!("inserted key {key} as root in new block {id}");
        return Ok(InsertOutcome::InsertedAsRoot);
    }

    let mut path = Vec::new();
    let mut current_id = pager.root_id();
    let mut leaf = loop {
        let node = pager.read_node(current_id)?;
        log::trace!("insert: descending into block {current_id} looking for key {key}");
        match node.keys.binary_search(&key) {
            Ok(_) => {
                log::debug!("insert: key {key} already present in block {current_id}");
                return Err(IndexError::DuplicateKey);
            }
            Err(idx) => {
                if node.is_leaf() {
                    break node;
                }
                path.push(current_id);
                current_id = node.children[idx];
            }
        }
    };

    let idx = leaf.keys.binary_search(&key).unwrap_err();
    leaf.keys.insert(idx, key);
    leaf.values.insert(idx, value);

    if leaf.num_keys() <= MAX_KEYS {
        pager.write_node(&leaf)?;
        log::debug!("inserted key {key} into leaf {}", leaf.block_id);
        return Ok(InsertOutcome::Inserted);
    }

    let mut promotion = split_node(pager, leaf)?;

    while let Some(parent_id) = path.pop() {
        let mut parent = pager.read_node(parent_id)?;
        let child_idx = parent
            .keys
            .binary_search(&promotion.median_key)
            .unwrap_err();
        parent.keys.insert(child_idx, promotion.median_key);
        parent.values.insert(child_idx, promotion.median_value);
        parent.children.insert(child_idx + 1, promotion.right_id);

        if parent.num_keys() <= MAX_KEYS {
            pager.write_node(&parent)?;
            log::debug!(
                "promoted key {} into parent {parent_id}, no further split",
                promotion.median_key
            );
            return Ok(InsertOutcome::Inserted);
        }
        promotion = split_node(pager, parent)?;
    }

    // The split propagated past the old root: build a new one.
    let new_root_id = pager.allocate()?;
    let new_root = Node {
        block_id: new_root_id,
        parent_id: 0,
        keys: vec![promotion.median_key],
        values: vec![promotion.median_value],
        children: vec![promotion.left_id, promotion.right_id],
    };
    reparent(pager, promotion.left_id, new_root_id)?;
    reparent(pager, promotion.right_id, new_root_id)?;
    pager.write_node(&new_root)?;
    pager.set_root(new_root_id)?;
    log::debug!(
        "root split: new root {new_root_id} with key {}, children {} and {}",
        promotion.median_key,
        promotion.left_id,
        promotion.right_id
    );

    Ok(InsertOutcome::RootSplit {
        new_root_key: promotion.median_key,
    })
}

struct Promotion {
    median_key: u64,
    median_value: u64,
    left_id: u64,
    right_id: u64,
}

/// Splits an overflowing node (20 keys) into two nodes of 10 and 9 keys,
/// writing both and reparenting any children that moved to the right
/// half. The node keeps its original block id as the left half; a fresh
/// block id is allocated for the right half.
fn split_node(pager: &mut PagedFile, mut node: Node) -> Result<Promotion> {
    let n = node.num_keys();
    let mid = n / 2;
    log::trace!("splitting block {} ({n} keys) at mid={mid}", node.block_id);

    let median_key = node.keys[mid];
    let median_value = node.values[mid];

    let right_keys = node.keys.split_off(mid + 1);
    let right_values = node.values.split_off(mid + 1);
    node.keys.truncate(mid);
    node.values.truncate(mid);

    let right_children = if node.is_leaf() {
        Vec::new()
    } else {
        node.children.split_off(mid + 1)
    };

    let right_id = pager.allocate()?;
    let left_id = node.block_id;
    let parent_id = node.parent_id;

    let right = Node {
        block_id: right_id,
        parent_id,
        keys: right_keys,
        values: right_values,
        children: right_children,
    };

    pager.write_node(&node)?;
    pager.write_node(&right)?;

    for &child_id in &right.children {
        reparent(pager, child_id, right_id)?;
    }

    Ok(Promotion {
        median_key,
        median_value,
        left_id,
        right_id,
    })
}

fn reparent(pager: &mut PagedFile, block_id: u64, new_parent_id: u64) -> Result<()> {
    let mut node = pager.read_node(block_id)?;
    node.parent_id = new_parent_id;
    pager.write_node(&node)
}
