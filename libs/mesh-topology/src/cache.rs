//! # Topology Cache
//!
//! Keeps built topologies keyed by mesh content so repeated requests for the
//! same mesh skip the pipeline.
//!
//! ## Features
//!
//! - **Content keys**: the caller supplies the hash; solid and open results
//!   for the same mesh are stored under separate keys
//! - **LRU eviction**: least recently used entry is disposed when full
//! - **Statistics**: hit, miss and eviction counters
//! - **Teardown**: disposes every cached result in one call
//!
//! A cached topology that was disposed by someone else counts as a miss and
//! is rebuilt on the next [`TopologyCache::get_or_build`].
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec3;
//! use mesh_topology::build;
//! use mesh_topology::cache::{CacheKey, TopologyCache};
//!
//! let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
//! let normals = [Vec3::Z; 3];
//! let indices = [0, 1, 2];
//!
//! let mut cache = TopologyCache::new(16);
//! let key = CacheKey::from_mesh(&positions, &indices, false);
//!
//! let triangles = cache
//!     .get_or_build(key, || build(&positions, &normals, &indices, false))?
//!     .triangle_count();
//! assert_eq!(triangles, 1);
//! assert_eq!(cache.stats().misses, 1);
//!
//! cache.get_or_build(key, || build(&positions, &normals, &indices, false))?;
//! assert_eq!(cache.stats().hits, 1);
//!
//! assert_eq!(cache.teardown(), 1);
//! # Ok::<(), mesh_topology::MeshTopologyError>(())
//! ```

use crate::error::TopologyResult;
use crate::result::MeshTopology;
use glam::Vec3;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Default number of cached topologies.
const DEFAULT_MAX_ENTRIES: usize = 256;

// =============================================================================
// KEYS
// =============================================================================

/// Cache key for topology lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    /// Hash identifying the mesh content
    pub content_hash: u64,
    /// Whether the cached result carries the solid variant
    pub solidified: bool,
}

impl CacheKey {
    /// Creates a key from a precomputed content hash.
    pub fn new(content_hash: u64, solidified: bool) -> Self {
        Self {
            content_hash,
            solidified,
        }
    }

    /// Hashes vertex positions and triangle indices into a key.
    ///
    /// Positions are hashed bit-for-bit, so `0.0` and `-0.0` differ.
    pub fn from_mesh(positions: &[Vec3], indices: &[u32], solidified: bool) -> Self {
        let mut hasher = DefaultHasher::new();
        positions.len().hash(&mut hasher);
        for p in positions {
            p.to_array().map(f32::to_bits).hash(&mut hasher);
        }
        indices.hash(&mut hasher);
        Self::new(hasher.finish(), solidified)
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Lookup interface for previously built topologies.
pub trait TopologyStore {
    /// Returns the cached topology for `key`, if any.
    fn get(&mut self, key: &CacheKey) -> Option<&MeshTopology>;

    /// Stores `topology` under `key`, replacing any previous entry.
    fn put(&mut self, key: CacheKey, topology: MeshTopology);
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Total entries stored
    pub total_stored: u64,
}

impl CacheStats {
    /// Hit rate in `[0, 1]`, or `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    topology: MeshTopology,
    access_count: u64,
}

/// In-memory topology store with LRU eviction.
#[derive(Debug)]
pub struct TopologyCache {
    entries: HashMap<CacheKey, CacheEntry>,
    max_entries: usize,
    total_accesses: u64,
    stats: CacheStats,
}

impl TopologyCache {
    /// Creates a cache holding at most `max_entries` topologies (at least one).
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: HashMap::with_capacity(max_entries),
            max_entries,
            total_accesses: 0,
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached topology for `key`, building and storing it on a miss.
    ///
    /// A failed build is returned as-is and leaves the cache unchanged apart
    /// from the miss counter.
    pub fn get_or_build<F>(&mut self, key: CacheKey, build: F) -> TopologyResult<&MeshTopology>
    where
        F: FnOnce() -> TopologyResult<MeshTopology>,
    {
        self.total_accesses += 1;
        let access = self.total_accesses;

        let built = if self.is_live(&key) {
            self.stats.hits += 1;
            None
        } else {
            self.stats.misses += 1;
            let topology = build()?;
            self.entries.remove(&key);
            self.make_room();
            self.stats.total_stored += 1;
            Some(topology)
        };

        let entry = match self.entries.entry(key) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => vacant.insert(CacheEntry {
                topology: built.unwrap_or_default(),
                access_count: access,
            }),
        };
        entry.access_count = access;
        Ok(&entry.topology)
    }

    /// Removes and returns the entry for `key` without disposing it.
    pub fn remove(&mut self, key: &CacheKey) -> Option<MeshTopology> {
        self.entries.remove(key).map(|entry| entry.topology)
    }

    /// Returns true if a usable topology is cached for `key`.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.is_live(key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cache statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Disposes and drops every cached topology, returning how many there were.
    ///
    /// Statistics are kept.
    pub fn teardown(&mut self) -> usize {
        let count = self.entries.len();
        for (_, mut entry) in self.entries.drain() {
            entry.topology.dispose();
        }
        debug!(disposed = count, "tore down topology cache");
        count
    }

    fn is_live(&self, key: &CacheKey) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.topology.is_disposed())
    }

    fn make_room(&mut self) {
        while self.entries.len() >= self.max_entries {
            if !self.evict_lru() {
                break;
            }
        }
    }

    fn evict_lru(&mut self) -> bool {
        let lru_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.access_count)
            .map(|(key, _)| *key);

        match lru_key.and_then(|key| self.entries.remove(&key)) {
            Some(mut entry) => {
                entry.topology.dispose();
                self.stats.evictions += 1;
                true
            }
            None => false,
        }
    }
}

impl TopologyStore for TopologyCache {
    fn get(&mut self, key: &CacheKey) -> Option<&MeshTopology> {
        self.total_accesses += 1;

        if !self.is_live(key) {
            self.entries.remove(key);
            self.stats.misses += 1;
            return None;
        }

        self.stats.hits += 1;
        let access = self.total_accesses;
        self.entries.get_mut(key).map(|entry| {
            entry.access_count = access;
            &entry.topology
        })
    }

    fn put(&mut self, key: CacheKey, topology: MeshTopology) {
        if let Some(mut previous) = self.entries.remove(&key) {
            previous.topology.dispose();
        }
        self.make_room();

        self.total_accesses += 1;
        self.entries.insert(
            key,
            CacheEntry {
                topology,
                access_count: self.total_accesses,
            },
        );
        self.stats.total_stored += 1;
    }
}

impl Default for TopologyCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
