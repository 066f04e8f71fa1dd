use async_trait::async_trait;
use std::sync::Arc;

use super::DefinitionProvider;
use crate::builder::DefinitionBuilder;
use crate::definition::RouteDefinition;
use crate::enums::RouteKind;
use crate::errors::{RouteError, RouteResult};

/// Serves a list built ahead of time. There is no source to re-read, so
/// `reload` fails instead of pretending to succeed.
#[derive(Debug, Clone)]
pub struct StaticDefinitionProvider {
    kind: RouteKind,
    definitions: Arc<[RouteDefinition]>,
}

impl StaticDefinitionProvider {
    pub fn new(kind: RouteKind, definitions: Arc<[RouteDefinition]>) -> Self {
        Self { kind, definitions }
    }

    pub fn from_builder(builder: &DefinitionBuilder) -> Self {
        Self::new(builder.kind(), builder.build())
    }
}

#[async_trait]
impl DefinitionProvider for StaticDefinitionProvider {
    fn kind(&self) -> RouteKind {
        self.kind
    }

    async fn to_array(&self) -> RouteResult<Arc<[RouteDefinition]>> {
        Ok(Arc::clone(&self.definitions))
    }

    fn is_reloadable(&self) -> bool {
        false
    }

    fn reload(&self) -> RouteResult<()> {
        Err(RouteError::Unimplemented {
            component: "StaticDefinitionProvider",
            operation: "reload",
        })
    }
}
