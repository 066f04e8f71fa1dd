use hashbrown::HashMap as FastHashMap;
use std::cmp::Ordering;
use std::sync::Arc;

use super::merge::PARALLEL_ROUTES;
use crate::definition::{DefinitionInput, RouteDefinition};
use crate::enums::RouteKind;

/// Key function plus resolution policy used to fold related inputs into one
/// staged definition.
#[derive(Debug, Clone, Copy)]
pub struct MergeStrategy {
    pub key: fn(&RouteDefinition) -> &str,
    pub resolve: fn(&mut RouteDefinition, RouteDefinition),
}

#[derive(Debug, Clone)]
pub struct DefinitionBuilder {
    kind: RouteKind,
    staged: Vec<RouteDefinition>,
    positions: FastHashMap<String, usize>,
    merge: Option<MergeStrategy>,
}

impl DefinitionBuilder {
    pub fn new(kind: RouteKind) -> Self {
        Self {
            kind,
            staged: Vec::new(),
            positions: FastHashMap::new(),
            merge: None,
        }
    }

    pub fn with_merge(kind: RouteKind, merge: MergeStrategy) -> Self {
        Self {
            merge: Some(merge),
            ..Self::new(kind)
        }
    }

    /// App pages group their parallel-route variants; every other kind
    /// appends verbatim.
    pub fn for_kind(kind: RouteKind) -> Self {
        match kind {
            RouteKind::AppPage => Self::with_merge(kind, PARALLEL_ROUTES),
            _ => Self::new(kind),
        }
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Without a merge strategy a repeated page replaces the earlier input,
    /// so a built list never holds the same page twice.
    pub fn add(&mut self, input: DefinitionInput) {
        let definition = RouteDefinition::from_input(self.kind, input);

        let key = match self.merge {
            Some(merge) => (merge.key)(&definition),
            None => definition.page(),
        };
        match self.positions.get(key) {
            Some(&position) => match self.merge {
                Some(merge) => (merge.resolve)(&mut self.staged[position], definition),
                None => self.staged[position] = definition,
            },
            None => {
                self.positions.insert(key.to_string(), self.staged.len());
                self.staged.push(definition);
            }
        }
    }

    /// Sorted by pathname, then page. Staged state is left untouched so the
    /// builder can keep accepting inputs and be built again.
    pub fn build(&self) -> Arc<[RouteDefinition]> {
        let mut definitions = self.staged.clone();
        definitions.sort_by(compare_definitions);
        definitions.into()
    }
}

pub(crate) fn compare_definitions(a: &RouteDefinition, b: &RouteDefinition) -> Ordering {
    a.pathname()
        .cmp(b.pathname())
        .then_with(|| a.page().cmp(b.page()))
}
