//! No-repeat region sampler.
//!
//! The pool hands out regions from a shuffled permutation of the region set
//! and only reshuffles once every region of the current cycle was drawn.

use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::RngCore;
use rand::rngs::OsRng;

use super::catalog::GLOBAL_REGIONS;

/// Number of full Fisher-Yates passes per shuffle.
pub const SHUFFLE_PASSES: usize = 5;

/// Shuffles `items` in place with [`SHUFFLE_PASSES`] independent Fisher-Yates passes.
pub fn hardened_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for _ in 0..SHUFFLE_PASSES {
        for i in (1..items.len()).rev() {
            let j = rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }
}

/// Shuffled, non-repeating sequence of region names.
///
/// Pinned draws bypass the pool entirely. The pool is owned by whoever drives
/// synthesis and passed around explicitly; there is no global instance.
#[derive(Debug)]
pub struct RegionPool<R = OsRng> {
    universe: Vec<String>,
    queue: VecDeque<String>,
    rng: R,
}

impl RegionPool<OsRng> {
    /// Pool over the fixed global region list, shuffled from the OS random source.
    pub fn global() -> Self {
        Self::new(GLOBAL_REGIONS.iter().copied())
    }

    /// Pool over a custom region set, shuffled from the OS random source.
    pub fn new<I, S>(universe: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(universe, OsRng)
    }
}

impl Default for RegionPool<OsRng> {
    fn default() -> Self {
        Self::global()
    }
}

impl<R: RngCore> RegionPool<R> {
    /// Pool over a custom region set with an explicit random source.
    ///
    /// Duplicates are dropped (first occurrence wins). An empty set falls back to
    /// the global list so that drawing can never fail.
    pub fn with_rng<I, S>(universe: I, rng: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut regions: Vec<String> = universe
            .into_iter()
            .map(Into::into)
            .filter(|region: &String| seen.insert(region.clone()))
            .collect();

        if regions.is_empty() {
            tracing::warn!("[RegionPool] Empty region set, falling back to the global list");
            regions = GLOBAL_REGIONS.iter().map(|r| r.to_string()).collect();
        }

        Self {
            universe: regions,
            queue: VecDeque::new(),
            rng,
        }
    }

    /// Returns the next region.
    ///
    /// A pinned region is returned as-is without touching the pool. Otherwise
    /// the pool is refilled if it is exhausted and its front element is removed.
    pub fn next(&mut self, pinned: Option<&str>) -> String {
        if let Some(region) = pinned {
            return region.to_string();
        }

        if self.queue.is_empty() {
            self.refill();
        }

        match self.queue.pop_front() {
            Some(region) => region,
            // unreachable: the universe is never empty
            None => self.universe.first().cloned().unwrap_or_default(),
        }
    }

    /// Replaces the pending sequence with a fresh permutation of the full region set.
    pub fn refill(&mut self) {
        let mut order = self.universe.clone();
        hardened_shuffle(&mut order, &mut self.rng);
        self.queue = order.into();
        tracing::debug!(
            "[RegionPool] Refilled with {} regions",
            self.queue.len()
        );
    }

    /// Replaces the pending sequence with an explicit order.
    pub fn seed<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queue = order.into_iter().map(Into::into).collect();
    }

    /// Number of regions left before the next refill.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// The full region set this pool cycles through.
    pub fn universe(&self) -> &[String] {
        &self.universe
    }
}
