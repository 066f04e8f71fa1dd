use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex as AsyncMutex;

use super::manifest::{APP_PATHS_MANIFEST, FilenameNormalizer, ManifestLoader, PAGES_MANIFEST};
use super::predicates::accepts;
use super::DefinitionProvider;
use crate::builder::DefinitionBuilder;
use crate::definition::{DefinitionInput, RouteDefinition};
use crate::enums::RouteKind;
use crate::errors::RouteResult;
use crate::types::Manifest;

/// Reads one manifest through the injected loader and turns the entries of
/// one route kind into built definitions. The built list is cached until
/// `reload`.
pub struct ManifestDefinitionProvider {
    kind: RouteKind,
    manifest_name: String,
    loader: Arc<dyn ManifestLoader>,
    normalizer: Arc<dyn FilenameNormalizer>,
    built_in_prefix: Option<String>,
    cached: RwLock<Option<Arc<[RouteDefinition]>>>,
    generation: AtomicU64,
    load_gate: AsyncMutex<()>,
}

impl ManifestDefinitionProvider {
    pub fn new(
        kind: RouteKind,
        loader: Arc<dyn ManifestLoader>,
        normalizer: Arc<dyn FilenameNormalizer>,
    ) -> Self {
        let manifest_name = match kind {
            RouteKind::AppPage | RouteKind::AppRoute => APP_PATHS_MANIFEST,
            RouteKind::Pages | RouteKind::InternalPages => PAGES_MANIFEST,
        };

        Self {
            kind,
            manifest_name: manifest_name.to_string(),
            loader,
            normalizer,
            built_in_prefix: None,
            cached: RwLock::new(None),
            generation: AtomicU64::new(0),
            load_gate: AsyncMutex::new(()),
        }
    }

    pub fn manifest_name<S: Into<String>>(mut self, name: S) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Raw artifact paths starting with `prefix` mark framework-provided
    /// internal pages.
    pub fn built_in_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.built_in_prefix = Some(prefix.into());
        self
    }

    fn transform(&self, manifest: &Manifest) -> Arc<[RouteDefinition]> {
        let mut builder = DefinitionBuilder::for_kind(self.kind);
        for (page, raw) in manifest.iter().filter(|(page, _)| accepts(self.kind, page)) {
            let built_in = self
                .built_in_prefix
                .as_deref()
                .is_some_and(|prefix| raw.starts_with(prefix));
            let filename = self.normalizer.normalize(raw);

            builder.add(DefinitionInput::new(page.as_str(), filename).built_in(built_in));
        }

        builder.build()
    }
}

impl std::fmt::Debug for ManifestDefinitionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestDefinitionProvider")
            .field("kind", &self.kind)
            .field("manifest_name", &self.manifest_name)
            .field("cached", &self.cached.read().as_ref().map(|list| list.len()))
            .finish()
    }
}

#[async_trait]
impl DefinitionProvider for ManifestDefinitionProvider {
    fn kind(&self) -> RouteKind {
        self.kind
    }

    async fn to_array(&self) -> RouteResult<Arc<[RouteDefinition]>> {
        let cached = self.cached.read().clone();
        if let Some(definitions) = cached {
            return Ok(definitions);
        }

        let _gate = self.load_gate.lock().await;

        // filled by the load we queued behind
        let cached = self.cached.read().clone();
        if let Some(definitions) = cached {
            return Ok(definitions);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let manifest = self.loader.load(&self.manifest_name).await?;
        let definitions = self.transform(&manifest);

        tracing::debug!(
            kind = %self.kind,
            manifest = %self.manifest_name,
            definitions = definitions.len(),
            "built route definitions from manifest"
        );

        if self.generation.load(Ordering::Acquire) == generation {
            *self.cached.write() = Some(Arc::clone(&definitions));
        }

        Ok(definitions)
    }

    fn reload(&self) -> RouteResult<()> {
        self.generation.fetch_add(1, Ordering::AcqRel);
        *self.cached.write() = None;
        Ok(())
    }
}
