use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;

use super::ManagerOptions;
use super::cache::{CacheStats, MatchCache};
use crate::builder::compare_definitions;
use crate::definition::{DefinitionFilterSpec, RouteDefinition, find_first};
use crate::matcher::{RouteMatch, RouteMatcher};
use crate::path::{NormalizationOptions, PathResult, normalize_path};
use crate::pattern::PatternResult;

/// Immutable definition list plus the matchers compiled from it. A manager
/// publishes a new snapshot wholesale; nothing inside is mutated afterwards
/// except the optional match cache, which belongs to this snapshot alone.
#[derive(Debug)]
pub struct RouteSnapshot {
    definitions: Vec<Arc<RouteDefinition>>,
    matchers: Vec<RouteMatcher>,
    normalization: NormalizationOptions,
    cache: Option<RwLock<MatchCache>>,
    cache_stats: Option<CacheStats>,
    debug: bool,
}

impl RouteSnapshot {
    /// Every definition gets a matcher; the combined list is re-sorted by
    /// pathname then page so several providers share one precedence order.
    pub(crate) fn compile(
        mut definitions: Vec<RouteDefinition>,
        options: &ManagerOptions,
    ) -> PatternResult<Self> {
        definitions.sort_by(compare_definitions);

        let definitions: Vec<Arc<RouteDefinition>> =
            definitions.into_iter().map(Arc::new).collect();
        let matchers = definitions
            .iter()
            .map(|definition| RouteMatcher::new(Arc::clone(definition)))
            .collect::<PatternResult<Vec<_>>>()?;

        Ok(Self::from_parts(definitions, matchers, options))
    }

    pub(crate) fn from_parts(
        definitions: Vec<Arc<RouteDefinition>>,
        matchers: Vec<RouteMatcher>,
        options: &ManagerOptions,
    ) -> Self {
        let cache = options
            .cache_capacity
            .map(|capacity| RwLock::new(MatchCache::new(capacity)));
        let cache_stats = cache.as_ref().map(|_| CacheStats::default());

        Self {
            definitions,
            matchers,
            normalization: options.normalization(),
            cache,
            cache_stats,
            debug: options.debug,
        }
    }

    pub fn definitions(&self) -> &[Arc<RouteDefinition>] {
        &self.definitions
    }

    pub fn matchers(&self) -> &[RouteMatcher] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn normalize(&self, path: &str) -> PathResult<String> {
        normalize_path(path, &self.normalization)
    }

    pub fn match_path(&self, path: &str) -> PathResult<Option<RouteMatch>> {
        let normalized = self.normalize(path)?;
        Ok(self.match_normalized(&normalized))
    }

    #[tracing::instrument(level = "trace", skip(self), fields(matchers = self.matchers.len() as u64))]
    pub(crate) fn match_normalized(&self, normalized: &str) -> Option<RouteMatch> {
        let Some(cache) = self.cache.as_ref() else {
            return self.scan(normalized);
        };

        let guard = cache.upgradable_read();
        if let Some(hit) = guard.peek(normalized).cloned() {
            if let Some(stats) = &self.cache_stats {
                stats.record_hit();
            }
            if self.debug {
                tracing::debug!(cache = "hit", path = %normalized, "route cache hit");
            }
            let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
            guard.touch(normalized);
            return hit;
        }
        drop(guard);

        if let Some(stats) = &self.cache_stats {
            stats.record_miss();
        }
        if self.debug {
            tracing::debug!(cache = "miss", path = %normalized, "route cache miss");
        }

        let outcome = self.scan(normalized);
        cache.write().insert(normalized, outcome.clone());
        outcome
    }

    fn scan(&self, normalized: &str) -> Option<RouteMatch> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.match_path(normalized))
    }

    pub fn find_definition(&self, specs: &[DefinitionFilterSpec]) -> Option<Arc<RouteDefinition>> {
        find_first(specs, &self.definitions).cloned()
    }

    /// `(hits, misses)` when the match cache is enabled.
    pub fn cache_metrics(&self) -> Option<(u64, u64)> {
        self.cache_stats.as_ref().map(CacheStats::snapshot)
    }
}
