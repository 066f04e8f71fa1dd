use async_trait::async_trait;
use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

use crate::errors::LoadError;
use crate::types::Manifest;

pub const APP_PATHS_MANIFEST: &str = "app-paths-manifest.json";
pub const PAGES_MANIFEST: &str = "pages-manifest.json";

#[async_trait]
pub trait ManifestLoader: Send + Sync {
    async fn load(&self, name: &str) -> Result<Manifest, LoadError>;
}

pub trait FilenameNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl FilenameNormalizer for IdentityNormalizer {
    fn normalize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Resolves manifest artifact paths against a build directory.
#[derive(Debug, Clone)]
pub struct PrefixNormalizer {
    dir: String,
}

impl PrefixNormalizer {
    pub fn new<S: Into<String>>(dir: S) -> Self {
        let mut dir = dir.into();
        while dir.len() > 1 && dir.ends_with('/') {
            dir.pop();
        }
        Self { dir }
    }
}

impl FilenameNormalizer for PrefixNormalizer {
    fn normalize(&self, raw: &str) -> String {
        format!("{}/{}", self.dir, raw.trim_start_matches('/'))
    }
}

/// In-memory manifests keyed by name. Replacing an entry is visible to the
/// next `load`.
#[derive(Debug, Default)]
pub struct StaticManifestLoader {
    manifests: RwLock<FastHashMap<String, Manifest>>,
}

impl StaticManifestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest<S: Into<String>>(self, name: S, manifest: Manifest) -> Self {
        self.replace(name, manifest);
        self
    }

    pub fn replace<S: Into<String>>(&self, name: S, manifest: Manifest) {
        self.manifests.write().insert(name.into(), manifest);
    }

    pub fn remove(&self, name: &str) -> Option<Manifest> {
        self.manifests.write().remove(name)
    }
}

#[async_trait]
impl ManifestLoader for StaticManifestLoader {
    async fn load(&self, name: &str) -> Result<Manifest, LoadError> {
        let manifest = self.manifests.read().get(name).cloned();
        manifest.ok_or_else(|| LoadError::new(format!("manifest '{name}'"), "manifest not found"))
    }
}
