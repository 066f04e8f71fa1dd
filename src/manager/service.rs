use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;

use super::fixed::{FixedRouteOptions, fixed_snapshot};
use super::{ComponentsLoader, ManagerOptions, MatchAll, RouteSnapshot};
use crate::definition::{DefinitionFilterSpec, RouteDefinition};
use crate::errors::{RouteError, RouteResult};
use crate::matcher::RouteMatch;
use crate::provider::DefinitionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
    Stale,
}

enum ManagerSource {
    Fixed,
    Providers(Vec<Arc<dyn DefinitionProvider>>),
}

#[derive(Debug, Default)]
struct ManagerState {
    snapshot: Option<Arc<RouteSnapshot>>,
    stale: bool,
    loading: bool,
    /// Bumped by every `invalidate`.
    generation: u64,
    /// Bumped every time a reload starts deriving.
    reloads_started: u64,
}

impl ManagerState {
    fn fresh(&self) -> Option<Arc<RouteSnapshot>> {
        match &self.snapshot {
            Some(snapshot) if !self.stale => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }
}

/// Outcome of the last finished reload, tagged with its start sequence.
type ReloadOutcome = Option<(u64, RouteResult<Arc<RouteSnapshot>>)>;

/// Clears `loading` even when the refreshing future is dropped mid-derive.
struct LoadingFlag<'a>(&'a RwLock<ManagerState>);

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.0.write().loading = false;
    }
}

pub struct RouteManager<C = ()> {
    source: ManagerSource,
    options: ManagerOptions,
    state: RwLock<ManagerState>,
    reload_gate: AsyncMutex<ReloadOutcome>,
    components: Option<Arc<dyn ComponentsLoader<C>>>,
}

impl RouteManager {
    /// Reloadable manager over the given providers. Nothing is read until
    /// the first lookup or `load`.
    pub fn new(
        providers: Vec<Arc<dyn DefinitionProvider>>,
        options: ManagerOptions,
    ) -> RouteResult<Self> {
        options.validate()?;

        Ok(Self {
            source: ManagerSource::Providers(providers),
            options,
            state: RwLock::new(ManagerState::default()),
            reload_gate: AsyncMutex::new(None),
            components: None,
        })
    }

    /// Non-reloadable manager serving one statically known route.
    pub fn fixed(fixed: FixedRouteOptions, options: ManagerOptions) -> RouteResult<Self> {
        options.validate()?;
        let snapshot = fixed_snapshot(&fixed, &options)?;

        Ok(Self {
            source: ManagerSource::Fixed,
            options,
            state: RwLock::new(ManagerState {
                snapshot: Some(Arc::new(snapshot)),
                ..ManagerState::default()
            }),
            reload_gate: AsyncMutex::new(None),
            components: None,
        })
    }
}

impl<C: Send + 'static> RouteManager<C> {
    pub fn with_components_loader<D: Send + 'static>(
        self,
        loader: Arc<dyn ComponentsLoader<D>>,
    ) -> RouteManager<D> {
        RouteManager {
            source: self.source,
            options: self.options,
            state: self.state,
            reload_gate: self.reload_gate,
            components: Some(loader),
        }
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    pub fn is_reloadable(&self) -> bool {
        matches!(self.source, ManagerSource::Providers(_))
    }

    pub fn state(&self) -> LoadState {
        let state = self.state.read();
        if state.loading {
            LoadState::Loading
        } else if state.snapshot.is_none() {
            LoadState::Unloaded
        } else if state.stale {
            LoadState::Stale
        } else {
            LoadState::Loaded
        }
    }

    /// Last published snapshot, stale or not, without triggering a load.
    pub fn snapshot(&self) -> Option<Arc<RouteSnapshot>> {
        self.state.read().snapshot.clone()
    }

    pub async fn match_path(&self, path: &str) -> RouteResult<Option<RouteMatch>> {
        let snapshot = self.current().await?;
        let found = snapshot.match_path(path)?;

        if self.options.debug {
            tracing::debug!(
                path = %path,
                page = found.as_ref().map(|m| m.definition.page()),
                "route match"
            );
        }

        Ok(found)
    }

    pub async fn match_all(&self, path: &str) -> RouteResult<MatchAll> {
        let snapshot = self.current().await?;
        let normalized = snapshot.normalize(path)?;
        Ok(MatchAll::new(snapshot, normalized))
    }

    pub async fn find_definition(
        &self,
        specs: &[DefinitionFilterSpec],
    ) -> RouteResult<Option<Arc<RouteDefinition>>> {
        let snapshot = self.current().await?;
        Ok(snapshot.find_definition(specs))
    }

    pub async fn has_definition(&self, specs: &[DefinitionFilterSpec]) -> RouteResult<bool> {
        Ok(self.find_definition(specs).await?.is_some())
    }

    pub async fn load_components(&self, definition: &RouteDefinition) -> RouteResult<Option<C>> {
        let Some(loader) = self.components.as_ref() else {
            return Err(RouteError::Unimplemented {
                component: "RouteManager without a components loader",
                operation: "load_components",
            });
        };

        Ok(loader.load(definition).await?)
    }

    /// Marks the published snapshot stale; the next lookup rebuilds it.
    /// A reload already in flight does not clear an invalidation that
    /// arrives after it started.
    pub fn invalidate(&self) {
        if !self.is_reloadable() {
            return;
        }

        let mut state = self.state.write();
        state.generation += 1;
        state.stale = true;
        tracing::debug!(generation = state.generation, "route definitions invalidated");
    }

    pub async fn load(&self) -> RouteResult<()> {
        if !self.is_reloadable() {
            return Ok(());
        }
        self.current().await.map(|_| ())
    }

    pub async fn force_reload(&self) -> RouteResult<()> {
        if !self.is_reloadable() {
            return Ok(());
        }
        self.refresh(true).await.map(|_| ())
    }

    async fn current(&self) -> RouteResult<Arc<RouteSnapshot>> {
        let fresh = self.state.read().fresh();
        match fresh {
            Some(snapshot) => Ok(snapshot),
            None => self.refresh(false).await,
        }
    }

    async fn refresh(&self, force: bool) -> RouteResult<Arc<RouteSnapshot>> {
        let ManagerSource::Providers(providers) = &self.source else {
            return self.current_fixed();
        };

        let observed = self.state.read().reloads_started;
        let mut last_outcome = self.reload_gate.lock().await;

        // a reload started after this caller arrived; share its result
        if let Some((started, outcome)) = last_outcome.as_ref()
            && *started > observed
        {
            return outcome.clone();
        }

        let (sequence, generation, reset_sources) = {
            let mut state = self.state.write();
            if !force && let Some(snapshot) = state.fresh() {
                return Ok(snapshot);
            }
            state.loading = true;
            state.reloads_started += 1;
            (
                state.reloads_started,
                state.generation,
                force || state.snapshot.is_some(),
            )
        };

        let loading = LoadingFlag(&self.state);
        let outcome = self.derive(providers, reset_sources).await;

        {
            let mut state = self.state.write();
            state.loading = false;
            if let Ok(snapshot) = &outcome {
                state.snapshot = Some(Arc::clone(snapshot));
                state.stale = state.generation != generation;
            }
        }
        drop(loading);

        match &outcome {
            Ok(snapshot) => tracing::info!(
                definitions = snapshot.len(),
                forced = force,
                "route definitions published"
            ),
            Err(err) => tracing::warn!(error = %err, forced = force, "route definition reload failed"),
        }

        *last_outcome = Some((sequence, outcome.clone()));
        outcome
    }

    async fn derive(
        &self,
        providers: &[Arc<dyn DefinitionProvider>],
        reset_sources: bool,
    ) -> RouteResult<Arc<RouteSnapshot>> {
        let mut definitions = Vec::new();
        for provider in providers {
            if reset_sources && provider.is_reloadable() {
                provider.reload()?;
            }
            let built = provider.to_array().await?;
            definitions.extend(built.iter().cloned());
        }

        Ok(Arc::new(RouteSnapshot::compile(definitions, &self.options)?))
    }

    fn current_fixed(&self) -> RouteResult<Arc<RouteSnapshot>> {
        self.state
            .read()
            .snapshot
            .clone()
            .ok_or(RouteError::Unimplemented {
                component: "fixed RouteManager",
                operation: "refresh",
            })
    }
}

impl<C> std::fmt::Debug for RouteManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("RouteManager")
            .field("reloadable", &matches!(self.source, ManagerSource::Providers(_)))
            .field("definitions", &state.snapshot.as_ref().map(|s| s.len()))
            .field("stale", &state.stale)
            .field("options", &self.options)
            .finish()
    }
}
