//! Block-addressed file access: the 512-byte header plus a flat run of
//! node blocks, read and written through positional I/O.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::block::{self, Node, BLOCK_SIZE, MAGIC};
use crate::error::{IndexError, Result};

/// Header block (block id 0): magic, root block id, next unallocated id.
struct Header {
    root_id: u64,
    next_block_id: u64,
}

impl Header {
    fn encode(&self) -> [u8; BLOCK_SIZE] {
        let mut buf = [0u8; BLOCK_SIZE];
        buf[0..8].copy_from_slice(MAGIC);
        buf[8..16].copy_from_slice(&self.root_id.to_be_bytes());
        buf[16..24].copy_from_slice(&self.next_block_id.to_be_bytes());
        buf
    }

    fn decode(buf: &[u8; BLOCK_SIZE]) -> Result<Self> {
        if &buf[0..8] != MAGIC {
            return Err(IndexError::BadMagic);
        }
        let root_id = u64::from_be_bytes(buf[8..16].try_into().unwrap());
        let next_block_id = u64::from_be_bytes(buf[16..24].try_into().unwrap());
        Ok(Self {
            root_id,
            next_block_id,
        })
    }
}

/// An open index file: the header kept in memory, the rest read/written
/// block by block through seeks. The header is flushed after every
/// structural change so a crash never leaves `next_block_id` or `root_id`
/// pointing past what is actually on disk.
pub struct PagedFile {
    file: File,
    header: Header,
}

impl PagedFile {
    /// Creates a brand-new index file. Fails if one already exists at
    /// `path` — no silent overwrite of someone else's index.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    IndexError::FileAlreadyExists
                } else {
                    IndexError::Io(e)
                }
            })?;

        let header = Header {
            root_id: 0,
            next_block_id: 1,
        };
        file.write_all(&header.encode())?;
        file.flush()?;
        log::info!("created new index file");
        Ok(Self { file, header })
    }

    /// Opens an existing index file for reading and writing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, false)
    }

    /// Opens an existing index file, refusing writes at the OS level.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, true)
    }

    fn open_with<P: AsRef<Path>>(path: P, read_only: bool) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(!read_only)
            .open(path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    IndexError::FileNotFound
                } else {
                    IndexError::Io(e)
                }
            })?;

        let mut buf = [0u8; BLOCK_SIZE];
        file.read_exact(&mut buf)?;
        let header = Header::decode(&buf)?;
        log::debug!(
            "opened index file: root={} next_block={}",
            header.root_id,
            header.next_block_id
        );
        Ok(Self { file, header })
    }

    pub fn root_id(&self) -> u64 {
        self.header.root_id
    }

    pub fn is_empty(&self) -> bool {
        self.header.root_id == 0
    }

    /// Sets the root block id and writes the header back immediately.
    pub fn set_root(&mut self, root_id: u64) -> Result<()> {
        self.header.root_id = root_id;
        self.flush_header()
    }

    /// Reserves the next block id and writes the header back so the
    /// reservation survives even if the caller never writes the block.
    pub fn allocate(&mut self) -> Result<u64> {
        let id = self.header.next_block_id;
        self.header.next_block_id += 1;
        self.flush_header()?;
        Ok(id)
    }

    pub fn read_node(&mut self, block_id: u64) -> Result<Node> {
        let mut buf = [0u8; BLOCK_SIZE];
        self.file
            .seek(SeekFrom::Start(block_id * BLOCK_SIZE as u64))?;
        self.file.read_exact(&mut buf)?;
        let node = block::decode(&buf)?;
        log::trace!("read block {block_id}: {} key(s)", node.num_keys());
        Ok(node)
    }

    pub fn write_node(&mut self, node: &Node) -> Result<()> {
        let buf = block::encode(node);
        self.file
            .seek(SeekFrom::Start(node.block_id * BLOCK_SIZE as u64))?;
        self.file.write_all(&buf)?;
        log::trace!(
            "wrote block {}: {} key(s), leaf={}",
            node.block_id,
            node.num_keys(),
            node.is_leaf()
        );
        Ok(())
    }

    fn flush_header(&mut self) -> Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&self.header.encode())?;
        self.file.flush()?;
        Ok(())
    }
}
