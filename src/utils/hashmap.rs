//! Hash-maps and hash-sets used for topological bookkeeping.
//!
//! Iteration order of these containers is unspecified: algorithms that need a
//! reproducible order only use them for lookups.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`].
pub type HashSet<K> = hashbrown::HashSet<K>;
