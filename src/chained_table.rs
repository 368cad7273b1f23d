use std::{
    fmt::{self, Debug, Display},
    iter::FusedIterator,
};

use log::{debug, trace};

use crate::{
    error::{Result, TableError},
    hashing::{MultiplicativeKey, bucket_index},
};

/// Number of buckets used by `ChainedHashTable::new`
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// An owning link to the next node of a chain, or the head of a bucket
type Link<K, V> = Option<Box<Node<K, V>>>;

/// One stored key-value pair, linked to the next pair of the same bucket
struct Node<K, V> {
    /// The key of the pair
    key: K,
    /// The value associated with the key
    value: V,
    /// The rest of the chain
    next: Link<K, V>,
}

/// A separate-chaining hash table with a bucket count fixed at construction.
///
/// Keys are placed with a multiplicative hash (see [`bucket_index`]) and collisions
/// are resolved by prepending to a singly linked chain per bucket, so the most
/// recently inserted entry of a bucket always comes first. The table never grows
/// or rehashes.
///
/// Note: This implementation is not thread-safe.
pub struct ChainedHashTable<K, V> {
    /// Chain heads, one per bucket
    buckets: Box<[Link<K, V>]>,
    /// Number of stored entries across all chains
    len: usize,
}

/// Drops a chain node by node instead of recursively through `Box`
fn release_chain<K, V>(mut link: Link<K, V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Allocates `count` empty buckets
fn empty_buckets<K, V>(count: usize) -> Box<[Link<K, V>]> {
    (0..count).map(|_| None).collect()
}

impl<K, V> ChainedHashTable<K, V> {
    /// Creates an empty table with [`DEFAULT_BUCKET_COUNT`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self { buckets: empty_buckets(DEFAULT_BUCKET_COUNT), len: 0 }
    }

    /// Creates an empty table with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroBuckets`] when `bucket_count` is zero.
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(TableError::ZeroBuckets);
        }
        debug!("creating chained hash table with {bucket_count} buckets");
        Ok(Self { buckets: empty_buckets(bucket_count), len: 0 })
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed number of buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the chain length of the bucket at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::BucketOutOfRange`] when `index` is not below
    /// [`bucket_count`](Self::bucket_count).
    pub fn bucket_len(&self, index: usize) -> Result<usize> {
        self.buckets
            .get(index)
            .map(|head| Chain { next: head.as_deref() }.count())
            .ok_or(TableError::BucketOutOfRange { index, bucket_count: self.buckets.len() })
    }

    /// Returns the chain length of every bucket, in bucket order
    #[must_use]
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(|head| Chain { next: head.as_deref() }.count()).collect()
    }

    /// Returns the current number of entries per bucket.
    ///
    /// Reported for diagnostics only; the table never reacts to it.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Removes every entry, keeping the bucket count
    pub fn clear(&mut self) {
        debug!("clearing {} entries", self.len);
        for head in &mut self.buckets {
            release_chain(head.take());
        }
        self.len = 0;
    }

    /// Returns an iterator over the entries in bucket order, most recent first within a
    /// bucket
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), current: None }
    }

    /// Returns true if any entry holds `value`.
    ///
    /// This compares values, not keys, and scans the whole table.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, stored)| stored == value)
    }

    /// Walks the chain of the bucket at `index`
    fn chain(&self, index: usize) -> Chain<'_, K, V> {
        Chain { next: self.buckets.get(index).and_then(|head| head.as_deref()) }
    }

    /// Links a new node in front of the chain at `index`
    fn prepend(&mut self, index: usize, key: K, value: V) {
        if let Some(head) = self.buckets.get_mut(index) {
            let next = head.take();
            *head = Some(Box::new(Node { key, value, next }));
            self.len = self.len.saturating_add(1);
        }
    }
}

impl<K, V> ChainedHashTable<K, V>
where
    K: MultiplicativeKey,
{
    /// Gets the bucket a key belongs to
    fn index_of(&self, key: &K) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Inserts a new entry.
    ///
    /// Returns `false` without touching the table when `key` is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let index = self.index_of(&key);
        if self.chain(index).any(|node| node.key == key) {
            trace!("rejected duplicate key in bucket {index}");
            return false;
        }
        self.prepend(index, key, value);
        trace!("inserted new entry into bucket {index}");
        true
    }

    /// Inserts an entry, or overwrites the value of an existing entry in place
    pub fn insert_or_assign(&mut self, key: K, value: V) {
        if let Some(stored) = self.search(&key) {
            *stored = value;
            return;
        }
        let index = self.index_of(&key);
        self.prepend(index, key, value);
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn search(&mut self, key: &K) -> Option<&mut V> {
        let index = self.index_of(key);
        let mut cursor = self.buckets.get_mut(index)?.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == *key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Returns a reference to the value stored under `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.chain(self.index_of(key)).find(|node| node.key == *key).map(|node| &node.value)
    }

    /// Removes the entry stored under `key`.
    ///
    /// Returns `false` when there is no such entry.
    pub fn erase(&mut self, key: &K) -> bool {
        let index = self.index_of(key);
        let Some(mut link) = self.buckets.get_mut(index) else {
            return false;
        };
        loop {
            if link.as_ref().is_some_and(|node| node.key == *key) {
                if let Some(node) = link.take() {
                    *link = node.next;
                }
                self.len = self.len.saturating_sub(1);
                trace!("erased entry from bucket {index}");
                return true;
            }
            match link {
                Some(node) => link = &mut node.next,
                None => return false,
            }
        }
    }

    /// Returns the number of entries in the bucket `key` hashes to.
    ///
    /// This is the length of the whole chain, whether or not `key` itself is stored,
    /// which makes it a collision diagnostic rather than a per-key count.
    pub fn count(&self, key: &K) -> usize {
        self.chain(self.index_of(key)).count()
    }
}

impl<K, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for ChainedHashTable<K, V> {
    fn drop(&mut self) {
        for head in &mut self.buckets {
            release_chain(head.take());
        }
    }
}

impl<K, V> Clone for ChainedHashTable<K, V>
where
    K: MultiplicativeKey + Clone,
    V: Clone,
{
    /// Copies every entry into fresh nodes.
    ///
    /// Entries are re-inserted in traversal order, so each chain of the copy is the
    /// reverse of the source chain.
    fn clone(&self) -> Self {
        let mut copy = Self { buckets: empty_buckets(self.buckets.len()), len: 0 };
        copy.extend(self.iter().map(|(key, value)| (key.clone(), value.clone())));
        debug!("cloned table with {} entries", copy.len);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.buckets.len() != source.buckets.len() {
            self.buckets = empty_buckets(source.buckets.len());
        }
        self.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashTable<K, V>
where
    K: MultiplicativeKey,
{
    /// Inserts every pair; pairs whose key is already present are dropped
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashTable<K, V>
where
    K: MultiplicativeKey,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Debug, V: Debug> Debug for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Display, V: Display> Display for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HashTable contents:")?;
        for (key, value) in self {
            writeln!(f, "Key: {key}, Value: {value}")?;
        }
        Ok(())
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the nodes of a single chain, head to tail
struct Chain<'a, K, V> {
    /// The node to yield next
    next: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

/// Iterator over the entries of a `ChainedHashTable`
pub struct Iter<'a, K, V> {
    /// Buckets not visited yet
    buckets: std::slice::Iter<'a, Link<K, V>>,
    /// Position inside the bucket being visited
    current: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current {
                self.current = node.next.as_deref();
                return Some((&node.key, &node.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { buckets: self.buckets.clone(), current: self.current }
    }
}

impl<K: Debug, V: Debug> Debug for Iter<'_, K, V> {
    /// Lists the entries not yet yielded, walking the chains iteratively
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
