use thiserror::Error;

/// Errors surfaced by the paged file, the B-tree engine, and the CSV loader.
///
/// Variants line up one-to-one with the error kinds the file format and
/// command contracts distinguish; the CLI layer matches on these to produce
/// the exact user-facing wording each command promises.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index file not found")]
    FileNotFound,

    #[error("index file already exists")]
    FileAlreadyExists,

    #[error("not a valid index file")]
    BadMagic,

    #[error("tree is empty")]
    EmptyTree,

    #[error("key already exists")]
    DuplicateKey,

    #[error("malformed block: num_keys out of range")]
    MalformedBlock,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
