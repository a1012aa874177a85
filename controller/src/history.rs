// history.rs - Hashes of recent generations, for spotting cycles

use conway::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const HISTORY_LEN: usize = 10;

/// Ring buffer of the last ten grid hashes.
#[derive(Clone, Debug, Default)]
pub struct History {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Remembers `grid`, returning whether it was already among the last ten.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.hashes = [0; HISTORY_LEN];
        self.count = 0;
    }
}
