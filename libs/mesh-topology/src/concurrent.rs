//! # Concurrent Insert-If-Absent Set
//!
//! A sharded set shared by parallel workers. Each shard is a
//! `hashbrown::HashSet` behind its own mutex; a key always hashes to the same
//! shard, so concurrent inserts of one key serialize on one lock and exactly
//! one caller observes `true`.

use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashSet;
use std::hash::{BuildHasher, Hash};
use std::sync::{Mutex, PoisonError};

/// Number of shards when none is requested.
const DEFAULT_SHARDS: usize = 16;

/// Sharded set with exactly-once-wins insertion.
///
/// # Example
///
/// ```rust
/// use mesh_topology::concurrent::ShardedSet;
/// use rayon::prelude::*;
///
/// let set = ShardedSet::with_capacity(64);
/// let winners = (0..64).into_par_iter().filter(|i| set.try_insert(i % 8)).count();
/// assert_eq!(winners, 8);
/// ```
#[derive(Debug)]
pub struct ShardedSet<T> {
    shards: Vec<Mutex<HashSet<T>>>,
    hasher: DefaultHashBuilder,
}

impl<T: Hash + Eq> ShardedSet<T> {
    /// Creates a set sized for roughly `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_shards(capacity, DEFAULT_SHARDS)
    }

    /// Creates a set with an explicit shard count (at least one).
    pub fn with_shards(capacity: usize, shards: usize) -> Self {
        let shards = shards.max(1);
        let per_shard = capacity.div_ceil(shards);
        Self {
            shards: (0..shards)
                .map(|_| Mutex::new(HashSet::with_capacity(per_shard)))
                .collect(),
            hasher: DefaultHashBuilder::default(),
        }
    }

    /// Inserts `value`, returning `true` only for the first caller to insert it.
    pub fn try_insert(&self, value: T) -> bool {
        let shard = (self.hasher.hash_one(&value) as usize) % self.shards.len();
        self.shards[shard]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(value)
    }

    /// Returns true if `value` has been inserted.
    pub fn contains(&self, value: &T) -> bool {
        let shard = (self.hasher.hash_one(value) as usize) % self.shards.len();
        self.shards[shard]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(value)
    }

    /// Total number of keys across all shards.
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.lock().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    /// Returns true if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_second_insert_loses() {
        let set = ShardedSet::with_capacity(4);
        assert!(set.try_insert((1u32, 2u32)));
        assert!(!set.try_insert((1u32, 2u32)));
        assert!(set.try_insert((2u32, 1u32)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_exactly_one_winner_under_contention() {
        let set = ShardedSet::with_shards(16, 4);
        let winners: usize = (0..10_000u32)
            .into_par_iter()
            .filter(|i| set.try_insert(i % 16))
            .count();
        assert_eq!(winners, 16);
        assert!(set.contains(&3));
        assert!(!set.contains(&99));
    }

    #[test]
    fn test_zero_shards_clamped() {
        let set = ShardedSet::with_shards(0, 0);
        assert!(set.is_empty());
        assert!(set.try_insert("edge"));
        assert!(!set.is_empty());
    }
}
