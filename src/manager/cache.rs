use hashbrown::HashMap as FastHashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::matcher::RouteMatch;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Bounded LRU of match outcomes keyed by normalized path. Misses are
/// cached too, so repeated 404 lookups skip the matcher scan.
#[derive(Debug)]
pub(crate) struct MatchCache {
    capacity: usize,
    map: FastHashMap<Box<str>, Option<RouteMatch>>,
    order: VecDeque<Box<str>>,
}

impl MatchCache {
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            map: FastHashMap::with_capacity(cap),
            order: VecDeque::with_capacity(cap),
        }
    }

    pub fn peek(&self, path: &str) -> Option<&Option<RouteMatch>> {
        self.map.get(path)
    }

    pub fn touch(&mut self, path: &str) {
        if self.map.contains_key(path) {
            self.promote(path);
        }
    }

    pub fn insert(&mut self, path: &str, outcome: Option<RouteMatch>) {
        if let Some(entry) = self.map.get_mut(path) {
            *entry = outcome;
            self.promote(path);
            return;
        }

        if self.order.len() == self.capacity
            && let Some(oldest) = self.order.pop_back()
        {
            self.map.remove(&oldest);
        }

        let key: Box<str> = path.into();
        self.order.push_front(key.clone());
        self.map.insert(key, outcome);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    fn promote(&mut self, path: &str) {
        if let Some(pos) = self.order.iter().position(|existing| existing.as_ref() == path) {
            if pos == 0 {
                return;
            }
            if let Some(key) = self.order.remove(pos) {
                self.order.push_front(key);
            }
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
