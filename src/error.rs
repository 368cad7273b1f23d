//! Error type shared by the table constructors and diagnostic queries

use thiserror::Error;

/// Errors reported by `ChainedHashTable` configuration and bucket diagnostics.
///
/// Ordinary lookups never fail with an error: a missing key is reported through
/// `Option`/`bool` return values instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table was requested with no buckets at all
    #[error("a hash table needs at least one bucket")]
    ZeroBuckets,
    /// A bucket index past the end of the bucket array was queried
    #[error("bucket {index} is out of range for a table with {bucket_count} buckets")]
    BucketOutOfRange {
        /// The requested bucket index
        index: usize,
        /// The number of buckets in the table
        bucket_count: usize,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, TableError>;
