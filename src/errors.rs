use crate::enums::PagesType;
use crate::manager::ManagerOptionsError;
use crate::path::PathError;
use crate::pattern::PatternError;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RouteError {
    #[error("invalid manager options: {0}")]
    InvalidOptions(#[from] ManagerOptionsError),
    #[error("unsupported pages type '{pages_type}'")]
    UnsupportedPagesType { pages_type: PagesType },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("{component} does not implement {operation}")]
    Unimplemented {
        component: &'static str,
        operation: &'static str,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;

/// Failure reported by an external loader (manifest or components). The
/// source is shared so one failed reload can be handed to every waiter.
#[derive(Debug, Clone, Error)]
#[error("{context}: {source}")]
pub struct LoadError {
    context: String,
    #[source]
    source: Arc<dyn StdError + Send + Sync>,
}

impl LoadError {
    pub fn new<C, E>(context: C, source: E) -> Self
    where
        C: Into<String>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self {
            context: context.into(),
            source: Arc::from(source.into()),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn source_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }
}
