//! Error types.

use thiserror::Error;

/// Result alias for resolv.conf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when reading a resolv.conf file.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `nameserver` line does not hold a valid IP address.
    #[error("line {line}: invalid nameserver address: {value:?}")]
    InvalidNameserver {
        /// 1-based line number.
        line: usize,
        /// The text following the `nameserver` keyword.
        value: String,
    },

    /// Streaming the content through the hasher failed.
    #[error("failed to hash resolv.conf content: {0}")]
    Hash(#[source] std::io::Error),
}

impl Error {
    /// Returns `true` if the file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Returns `true` if the file was readable but its content is malformed.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidNameserver { .. })
    }
}
