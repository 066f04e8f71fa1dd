use async_trait::async_trait;
use std::sync::Arc;

use crate::definition::{DefinitionFilterSpec, RouteDefinition};
use crate::enums::RouteKind;
use crate::errors::RouteResult;

#[async_trait]
pub trait DefinitionProvider: Send + Sync {
    fn kind(&self) -> RouteKind;

    /// Current built list; may load it on first access.
    async fn to_array(&self) -> RouteResult<Arc<[RouteDefinition]>>;

    /// Drops any cached list so the next access re-reads the source.
    fn reload(&self) -> RouteResult<()>;

    /// Whether `reload` re-reads anything. Managers skip `reload` on
    /// providers that answer `false` and reuse their list as is.
    fn is_reloadable(&self) -> bool {
        true
    }

    async fn find(&self, spec: &DefinitionFilterSpec) -> RouteResult<Option<RouteDefinition>> {
        let definitions = self.to_array().await?;
        Ok(definitions
            .iter()
            .find(|definition| spec.matches(definition))
            .cloned())
    }

    async fn filter(&self, spec: &DefinitionFilterSpec) -> RouteResult<Vec<RouteDefinition>> {
        let definitions = self.to_array().await?;
        Ok(definitions
            .iter()
            .filter(|definition| spec.matches(definition))
            .cloned()
            .collect())
    }
}
