//! # btree-core
//!
//! A fixed-layout on-disk B-tree index.
//!
//! ```text
//!   +--------+--------+--------+--------+
//!   | header | node 1 | node 2 |  ...   |   512-byte blocks
//!   +--------+--------+--------+--------+
//! ```
//!
//! The header block carries a magic tag, the root block id, and the next
//! unallocated block id. Every other block holds one node: an id, a
//! parent id, a key count, up to 19 big-endian key/value pairs, and up
//! to 20 child block ids. A node with no children is a leaf.
//!
//! | module      | responsibility                                   |
//! |-------------|---------------------------------------------------|
//! | [`block`]   | node encoding/decoding at fixed byte offsets      |
//! | [`pager`]   | header + block I/O over a single file             |
//! | [`search`]  | key lookup by descent                             |
//! | [`insert`]  | leaf insertion, node splitting, root promotion    |
//! | [`traverse`]| in-order walk over the whole tree                 |
//! | [`loader`]  | per-line CSV ingestion                            |
//! | [`index`]   | the facade the CLI drives                         |
//!
//! [`index`] is the intended entry point for most callers; the other
//! modules are public for callers that want to hold a [`pager::PagedFile`]
//! open across several operations instead of reopening it each time.

pub mod block;
pub mod error;
pub mod index;
pub mod insert;
pub mod loader;
pub mod pager;
pub mod search;
pub mod traverse;

pub use error::{IndexError, Result};
