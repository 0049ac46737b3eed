use crate::io::error::Result;
use crate::noise::lattice::Lattice;
use std::collections::HashMap;

/// Identifies a lattice by everything that determines its contents
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LatticeKey {
    /// Generator seed
    pub seed: u64,
    /// Lattice rows
    pub grid_y: usize,
    /// Lattice columns
    pub grid_x: usize,
}

impl LatticeKey {
    /// Create a key from seed and dimensions
    pub const fn new(seed: u64, grid_y: usize, grid_x: usize) -> Self {
        Self {
            seed,
            grid_y,
            grid_x,
        }
    }
}

/// Memoization of generated lattices
///
/// Sliders that only touch shaping or palette leave the lattice key unchanged,
/// so repeated renders skip regeneration.
#[derive(Default)]
pub struct LatticeCache {
    lattices: HashMap<LatticeKey, Lattice>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl LatticeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached lattice or generate and store it
    ///
    /// # Errors
    ///
    /// Returns an error if generation rejects the dimensions; nothing is cached then
    pub fn get_or_generate(&mut self, key: LatticeKey) -> Result<&Lattice> {
        use std::collections::hash_map::Entry;

        match self.lattices.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(&*entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let lattice = Lattice::generate(key.seed, key.grid_y, key.grid_x)?;
                self.stats.misses += 1;
                Ok(&*entry.insert(lattice))
            }
        }
    }

    /// Number of lattices held
    pub fn len(&self) -> usize {
        self.lattices.len()
    }

    /// Whether no lattice has been cached yet
    pub fn is_empty(&self) -> bool {
        self.lattices.is_empty()
    }

    /// Drop all cached lattices, keeping the statistics
    pub fn clear(&mut self) {
        self.lattices.clear();
    }
}
