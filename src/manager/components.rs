use async_trait::async_trait;

use crate::definition::RouteDefinition;
use crate::errors::LoadError;

/// Resolves a definition to its runtime modules. `Ok(None)` means the
/// definition has no components.
#[async_trait]
pub trait ComponentsLoader<C: Send>: Send + Sync {
    async fn load(&self, definition: &RouteDefinition) -> Result<Option<C>, LoadError>;
}
