// Error types shared by the accumulator and the storage backends
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use thiserror::Error;

/// Result type alias for bucket sizing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sizing a bucket.
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials or region could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// The backend failed to return a page of the listing.
    #[error("failed to list objects in bucket '{bucket}': {message}")]
    Listing {
        /// Bucket that was being listed.
        bucket:  String,
        /// Error reported by the backend, with its full context.
        message: String,
    },

    /// The backend returned a page that can't be paginated further.
    #[error("malformed listing page for bucket '{bucket}': {reason}")]
    MalformedPage {
        /// Bucket that was being listed.
        bucket: String,
        /// What was wrong with the page.
        reason: String,
    },

    /// An object descriptor was missing a usable size.
    #[error("malformed object descriptor '{key}' in bucket '{bucket}': {reason}")]
    MalformedDescriptor {
        /// Bucket that was being listed.
        bucket: String,
        /// Key of the offending object, if the backend supplied one.
        key:    String,
        /// What was wrong with the descriptor.
        reason: String,
    },

    /// The total no longer fits in a `u64`.
    #[error("total size of bucket '{0}' overflowed")]
    SizeOverflow(String),

    /// The operation was interrupted before it completed.
    #[error("interrupted")]
    Interrupted,
}
