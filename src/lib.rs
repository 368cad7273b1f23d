//! # Chained Hash Table
//!
//! A Rust implementation of a separate-chaining hash table with a fixed bucket count.
//!
//! Keys are spread over the buckets by a multiplicative hash: the fractional part of
//! `key * 0.6180339887` scaled by the bucket count. Colliding entries share a singly
//! linked chain, newest first. The table never resizes.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained_table::ChainedHashTable;
//!
//! // Create a table with the default ten buckets
//! let mut table = ChainedHashTable::new();
//!
//! // Insert rejects keys that are already present
//! assert!(table.insert(5, 42));
//! assert!(!table.insert(5, 99));
//! assert_eq!(table.get(&5), Some(&42));
//!
//! // Upsert overwrites in place
//! table.insert_or_assign(5, 7);
//! if let Some(value) = table.search(&5) {
//!     *value += 1;
//! }
//! assert_eq!(table.get(&5), Some(&8));
//!
//! // `count` reports the length of the key's bucket, not a per-key count
//! table.insert(13, 1); // 13 shares bucket 0 with 5
//! assert_eq!(table.count(&5), 2);
//!
//! // Remove values
//! assert!(table.erase(&5));
//! assert_eq!(table.get(&5), None);
//! ```
//!
//! ## Random Population
//!
//! ```rust
//! use chained_table::ChainedHashTable;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let table: ChainedHashTable<i32, i32> = ChainedHashTable::with_random_entries(50, &mut rng);
//!
//! // Keys come from 1..=20, so duplicates are dropped
//! assert!(table.len() <= 20);
//! for key in 1..=20 {
//!     println!("Bucket with key {key} has {} elements.", table.count(&key));
//! }
//! print!("{table}");
//! ```

/// Module implementing the separate-chaining hash table
mod chained_table;
/// Error type returned by constructors and bucket diagnostics
mod error;
/// Multiplicative hash function and the key trait it relies on
mod hashing;
/// Random bulk construction
mod random_fill;
/// Utility functions and traits for the hash table
mod utils;

pub use chained_table::{ChainedHashTable, DEFAULT_BUCKET_COUNT, Iter};
pub use error::{Result, TableError};
pub use hashing::{GOLDEN_RATIO_FRACTION, MultiplicativeKey, bucket_index};
pub use random_fill::{RANDOM_KEY_RANGE, RANDOM_VALUE_RANGE};
pub use utils::TableExtensions;
