use std::sync::Arc;

use crate::definition::RouteDefinition;
use crate::pattern::{CompiledPattern, PatternResult, compile_pathname};
use crate::types::{ParamValue, RouteParams};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub definition: Arc<RouteDefinition>,
    /// `None` when the matched pathname has no dynamic segments.
    pub params: Option<RouteParams>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.as_ref()?.get(name)
    }
}

/// One definition bound to its compiled pathname.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    definition: Arc<RouteDefinition>,
    pattern: CompiledPattern,
}

impl RouteMatcher {
    pub fn new(definition: Arc<RouteDefinition>) -> PatternResult<Self> {
        let pattern = compile_pathname(definition.pathname())?;
        Ok(Self {
            definition,
            pattern,
        })
    }

    pub fn definition(&self) -> &Arc<RouteDefinition> {
        &self.definition
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn is_dynamic(&self) -> bool {
        self.pattern.is_dynamic()
    }

    pub fn match_path(&self, pathname: &str) -> Option<RouteMatch> {
        match &self.pattern {
            CompiledPattern::Static(expected) => {
                (expected.as_ref() == pathname).then(|| RouteMatch {
                    definition: Arc::clone(&self.definition),
                    params: None,
                })
            }
            CompiledPattern::Dynamic(dynamic) => {
                dynamic.captures(pathname).map(|params| RouteMatch {
                    definition: Arc::clone(&self.definition),
                    params: Some(params),
                })
            }
        }
    }
}
