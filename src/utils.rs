//! Snapshot helpers for `ChainedHashTable`

use crate::{ChainedHashTable, hashing::MultiplicativeKey};

/// Extension trait providing owned snapshots of a table's contents
pub trait TableExtensions<K, V> {
    /// Returns the keys in iteration order
    fn keys(&self) -> Vec<K>;

    /// Returns the values in iteration order
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs in iteration order
    fn entries(&self) -> Vec<(K, V)>;

    /// Returns true if the table stores an entry for `key`
    fn contains_key(&self, key: &K) -> bool;
}

impl<K, V> TableExtensions<K, V> for ChainedHashTable<K, V>
where
    K: MultiplicativeKey + Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_values() {
        let mut table = ChainedHashTable::new();
        table.insert(1, "a".to_string());
        table.insert(2, "b".to_string());
        table.insert(3, "c".to_string());

        let mut keys = table.keys();
        keys.sort_unstable();

        let mut values = table.values();
        values.sort();

        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(values, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_entries_follow_iteration_order() {
        let table: ChainedHashTable<u16, u16> = [(20, 1), (7, 2), (5, 3)].into_iter().collect();
        assert_eq!(table.entries(), vec![(5, 3), (7, 2), (20, 1)]);
    }

    #[test]
    fn test_contains_key() {
        let mut table = ChainedHashTable::new();
        table.insert(11_i64, 1);

        assert!(table.contains_key(&11));
        assert!(!table.contains_key(&12));
        // contains looks at values, contains_key at keys
        assert!(table.contains(&1));
        assert!(!table.contains(&11));
    }
}
