//! Trace-driven cache simulator.
//!
//! Models a set-associative cache with LRU replacement and counts hits,
//! misses and evictions for a stream of byte addresses. The default
//! geometry is the one the blocked strategies are tuned for: 1KB,
//! direct-mapped, 32-byte blocks (s = 5, E = 1, b = 5).
//!
//! Every access is a single load or store of one element; an element never
//! straddles two blocks because blocks are a multiple of 4 bytes.

pub mod traced;

use crate::error::{Result, TransposeError};

/// Cache geometry in the usual s / E / b form.
///
/// Only constructible through [`CacheConfig::new`] or `Default`, so every
/// value describes a cache [`Cache::new`] can allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    set_bits: u32,
    lines_per_set: usize,
    block_bits: u32,
}

impl CacheConfig {
    /// Most lines (sets × ways) a simulated cache may have.
    pub const MAX_LINES: usize = 1 << 20;

    /// Largest block: 64KB.
    pub const MAX_BLOCK_BITS: u32 = 16;

    /// Validated geometry.
    ///
    /// Blocks must hold at least one 4-byte element and be at most
    /// [`Self::MAX_BLOCK_BITS`] wide. There must be at least one line per
    /// set and no more than [`Self::MAX_LINES`] lines in total.
    pub fn new(set_bits: u32, lines_per_set: usize, block_bits: u32) -> Result<Self> {
        if lines_per_set == 0 {
            return Err(TransposeError::InvalidGeometry(
                "a set needs at least one line".to_string(),
            ));
        }
        if block_bits < 2 {
            return Err(TransposeError::InvalidGeometry(format!(
                "block of {} bytes cannot hold an i32",
                1u64 << block_bits
            )));
        }
        if block_bits > Self::MAX_BLOCK_BITS {
            return Err(TransposeError::InvalidGeometry(format!(
                "b = {} exceeds the {}-bit block limit",
                block_bits,
                Self::MAX_BLOCK_BITS
            )));
        }
        let total_lines = 1usize
            .checked_shl(set_bits)
            .and_then(|sets| sets.checked_mul(lines_per_set))
            .filter(|&lines| lines <= Self::MAX_LINES);
        if total_lines.is_none() {
            return Err(TransposeError::InvalidGeometry(format!(
                "2^{} sets x {} lines exceeds {} lines",
                set_bits,
                lines_per_set,
                Self::MAX_LINES
            )));
        }
        Ok(Self {
            set_bits,
            lines_per_set,
            block_bits,
        })
    }

    /// log2 of the number of sets.
    pub fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Lines per set (associativity). 1 means direct-mapped.
    pub fn lines_per_set(&self) -> usize {
        self.lines_per_set
    }

    /// log2 of the block size in bytes.
    pub fn block_bits(&self) -> u32 {
        self.block_bits
    }

    pub fn sets(&self) -> usize {
        1 << self.set_bits
    }

    pub fn block_size(&self) -> usize {
        1 << self.block_bits
    }

    /// Total data capacity in bytes.
    pub fn capacity(&self) -> u64 {
        (self.sets() * self.lines_per_set) as u64 * self.block_size() as u64
    }
}

impl Default for CacheConfig {
    /// 1KB direct-mapped, 32-byte blocks.
    fn default() -> Self {
        Self {
            set_bits: 5,
            lines_per_set: 1,
            block_bits: 5,
        }
    }
}

/// Outcome of one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Hit,
    Miss,
    /// Miss that displaced a valid line.
    MissEviction,
}

/// Running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Line {
    valid: bool,
    tag: u64,
    last_used: u64,
}

/// The simulated cache.
#[derive(Debug, Clone)]
pub struct Cache {
    config: CacheConfig,
    lines: Vec<Line>,
    clock: u64,
    stats: CacheStats,
}

impl Cache {
    /// Empty cache.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            lines: vec![Line::default(); config.sets() * config.lines_per_set],
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Invalidate every line and zero the counters.
    pub fn reset(&mut self) {
        self.lines.fill(Line::default());
        self.clock = 0;
        self.stats = CacheStats::default();
    }

    /// Touch the block containing `addr`.
    pub fn access(&mut self, addr: u64) -> Access {
        let block = addr >> self.config.block_bits;
        let set_mask = (1u64 << self.config.set_bits) - 1;
        let set = (block & set_mask) as usize;
        let tag = block >> self.config.set_bits;

        self.clock += 1;
        let ways = self.config.lines_per_set;
        let lines = &mut self.lines[set * ways..(set + 1) * ways];

        if let Some(line) = lines.iter_mut().find(|l| l.valid && l.tag == tag) {
            line.last_used = self.clock;
            self.stats.hits += 1;
            return Access::Hit;
        }

        self.stats.misses += 1;

        // Prefer an invalid line, otherwise the least recently used one.
        let (slot, outcome) = match lines.iter().position(|l| !l.valid) {
            Some(free) => (free, Access::Miss),
            None => {
                let lru = lines
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, l)| l.last_used)
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.stats.evictions += 1;
                (lru, Access::MissEviction)
            }
        };

        lines[slot] = Line {
            valid: true,
            tag,
            last_used: self.clock,
        };
        outcome
    }
}
