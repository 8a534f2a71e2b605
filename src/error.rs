use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// fsinfo error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// the mount table couldn't be opened or queried
    #[error("mount table {table} unavailable")]
    MountTableUnavailable {
        table: &'static str,
        source: std::io::Error,
    },

    /// the statistics syscall failed for the given path
    #[error("could not stat {path:?}")]
    StatFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// a mount table entry lacks a field it should have
    #[error("malformed mount table entry: no usable {field}")]
    MalformedRecord { field: &'static str },
}
