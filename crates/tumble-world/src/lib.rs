//! World block storage: the `WorldStore` capability and a chunk-keyed in-memory store.
#![forbid(unsafe_code)]

use hashbrown::HashMap;
use log::trace;
use tumble_blocks::types::Block;
use tumble_geom::Vec3i;

/// Where placed blocks live. Writes are fire-and-forget.
pub trait WorldStore {
    fn block_at(&self, pos: Vec3i) -> Option<Block>;
    fn set_block_at(&mut self, pos: Vec3i, block: Block);
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditStoreStats {
    pub chunk_entries: usize,
    pub blocks: usize,
    pub writes: u64,
}

/// Chunk-aware block store with per-chunk change stamps.
#[derive(Debug, Clone)]
pub struct EditStore {
    sx: i32,
    sy: i32,
    sz: i32,
    // key=chunk coord -> map of world coords -> Block
    inner: HashMap<Vec3i, HashMap<Vec3i, Block>>,
    // latest write stamp per chunk
    rev: HashMap<Vec3i, u64>,
    counter: u64,
}

impl Default for EditStore {
    fn default() -> Self {
        Self::new(32, 32, 32)
    }
}

impl EditStore {
    pub fn new(sx: i32, sy: i32, sz: i32) -> Self {
        Self {
            sx: sx.max(1),
            sy: sy.max(1),
            sz: sz.max(1),
            inner: HashMap::new(),
            rev: HashMap::new(),
            counter: 0,
        }
    }

    pub fn stats(&self) -> EditStoreStats {
        EditStoreStats {
            chunk_entries: self.inner.len(),
            blocks: self.inner.values().map(|m| m.len()).sum(),
            writes: self.counter,
        }
    }

    #[inline]
    pub fn chunk_key(&self, pos: Vec3i) -> Vec3i {
        Vec3i::new(
            pos.x.div_euclid(self.sx),
            pos.y.div_euclid(self.sy),
            pos.z.div_euclid(self.sz),
        )
    }

    pub fn get(&self, pos: Vec3i) -> Option<Block> {
        self.inner
            .get(&self.chunk_key(pos))
            .and_then(|m| m.get(&pos).copied())
    }

    /// Stores `b` and returns the new change stamp for its chunk.
    pub fn set(&mut self, pos: Vec3i, b: Block) -> u64 {
        let k = self.chunk_key(pos);
        self.inner.entry(k).or_default().insert(pos, b);
        self.bump(k)
    }

    pub fn remove(&mut self, pos: Vec3i) -> Option<Block> {
        let k = self.chunk_key(pos);
        let chunk = self.inner.get_mut(&k)?;
        let old = chunk.remove(&pos)?;
        if chunk.is_empty() {
            self.inner.remove(&k);
        }
        self.bump(k);
        Some(old)
    }

    fn bump(&mut self, chunk: Vec3i) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        self.rev.insert(chunk, self.counter);
        self.counter
    }

    /// Latest change stamp for a chunk, 0 if never written.
    pub fn get_rev(&self, chunk: Vec3i) -> u64 {
        self.rev.get(&chunk).copied().unwrap_or(0)
    }

    /// Snapshot of all blocks in one chunk, sorted by position.
    pub fn snapshot_for_chunk(&self, chunk: Vec3i) -> Vec<(Vec3i, Block)> {
        let mut out: Vec<(Vec3i, Block)> = self
            .inner
            .get(&chunk)
            .map(|m| m.iter().map(|(k, v)| (*k, *v)).collect())
            .unwrap_or_default();
        out.sort_by_key(|(p, _)| *p);
        out
    }
}

impl WorldStore for EditStore {
    #[inline]
    fn block_at(&self, pos: Vec3i) -> Option<Block> {
        self.get(pos)
    }

    fn set_block_at(&mut self, pos: Vec3i, block: Block) {
        let stamp = self.set(pos, block);
        trace!(target: "world", "set {} -> {:?} rev={}", pos, block, stamp);
    }
}
