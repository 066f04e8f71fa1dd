use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ManagerOptions, RouteSnapshot};
use crate::definition::{DefinitionDetails, RouteDefinition};
use crate::enums::PagesType;
use crate::errors::{RouteError, RouteResult};
use crate::matcher::RouteMatcher;

/// A single route known up front, for deployments that bundle one entry
/// per handler and have no manifest to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRouteOptions {
    pub page: String,
    pub pathname: String,
    pub pages_type: PagesType,
    /// Also expose the `/500` internal page.
    #[serde(default)]
    pub error_500: bool,
    /// Also expose the `/_error` internal page.
    #[serde(default)]
    pub error: bool,
}

impl FixedRouteOptions {
    pub fn new<P: Into<String>, N: Into<String>>(
        pages_type: PagesType,
        page: P,
        pathname: N,
    ) -> Self {
        Self {
            page: page.into(),
            pathname: pathname.into(),
            pages_type,
            error_500: false,
            error: false,
        }
    }

    pub fn error_500(mut self, value: bool) -> Self {
        self.error_500 = value;
        self
    }

    pub fn error(mut self, value: bool) -> Self {
        self.error = value;
        self
    }
}

/// Only the primary route is matchable; the internal error pages are
/// findable through filters but never answer a request path.
pub(crate) fn fixed_snapshot(
    fixed: &FixedRouteOptions,
    options: &ManagerOptions,
) -> RouteResult<RouteSnapshot> {
    let details = match fixed.pages_type {
        PagesType::Pages => DefinitionDetails::Pages,
        PagesType::App => DefinitionDetails::AppPage {
            app_paths: vec![fixed.page.clone()],
        },
        PagesType::Root => {
            return Err(RouteError::UnsupportedPagesType {
                pages_type: fixed.pages_type,
            });
        }
    };

    let primary = Arc::new(RouteDefinition::detached(
        details,
        &fixed.page,
        &fixed.pathname,
    ));
    let matcher = RouteMatcher::new(Arc::clone(&primary))?;

    let mut definitions = vec![primary];
    let internal = [(fixed.error_500, "/500"), (fixed.error, "/_error")];
    for (_, page) in internal.into_iter().filter(|(enabled, _)| *enabled) {
        definitions.push(Arc::new(RouteDefinition::detached(
            DefinitionDetails::InternalPages { built_in: false },
            page,
            page,
        )));
    }

    Ok(RouteSnapshot::from_parts(definitions, vec![matcher], options))
}
