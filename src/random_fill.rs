//! Bulk construction of a `ChainedHashTable` from random pairs

use std::ops::RangeInclusive;

use log::debug;
use rand::{Rng, distr::uniform::SampleUniform};

use crate::{ChainedHashTable, hashing::MultiplicativeKey};

/// Range random keys are drawn from
pub const RANDOM_KEY_RANGE: RangeInclusive<u8> = 1..=20;

/// Range random values are drawn from
pub const RANDOM_VALUE_RANGE: RangeInclusive<u8> = 1..=100;

/// Converts a `u8` range into the same range over `T`
fn widen<T: From<u8>>(range: &RangeInclusive<u8>) -> RangeInclusive<T> {
    T::from(*range.start())..=T::from(*range.end())
}

impl<K, V> ChainedHashTable<K, V>
where
    K: MultiplicativeKey + SampleUniform + From<u8> + PartialOrd,
    V: SampleUniform + From<u8> + PartialOrd,
{
    /// Creates a table and performs `entries` insertions of random pairs.
    ///
    /// Keys are drawn uniformly from [`RANDOM_KEY_RANGE`] and values from
    /// [`RANDOM_VALUE_RANGE`]. Pairs whose key is already present are dropped by
    /// [`insert`](Self::insert), so the table ends up with at most `entries` entries.
    pub fn with_random_entries<R: Rng>(entries: usize, rng: &mut R) -> Self {
        let mut table = Self::new();
        for _ in 0..entries {
            let key = rng.random_range(widen::<K>(&RANDOM_KEY_RANGE));
            let value = rng.random_range(widen::<V>(&RANDOM_VALUE_RANGE));
            table.insert(key, value);
        }
        debug!("random fill kept {} of {entries} pairs", table.len());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_entries_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let table: ChainedHashTable<i32, i32> = ChainedHashTable::with_random_entries(50, &mut rng);

        assert!(table.len() <= 20);
        assert!(!table.is_empty());
        for (&key, &value) in &table {
            assert!((1..=20).contains(&key));
            assert!((1..=100).contains(&value));
        }
    }

    #[test]
    fn test_random_entries_are_reproducible() {
        let first: ChainedHashTable<u32, u64> =
            ChainedHashTable::with_random_entries(30, &mut StdRng::seed_from_u64(42));
        let second: ChainedHashTable<u32, u64> =
            ChainedHashTable::with_random_entries(30, &mut StdRng::seed_from_u64(42));

        let first: Vec<_> = first.iter().collect();
        let second: Vec<_> = second.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_entries_gives_empty_table() {
        let table: ChainedHashTable<i64, i64> =
            ChainedHashTable::with_random_entries(0, &mut rand::rng());
        assert!(table.is_empty());
    }
}
