use serde::{Deserialize, Serialize};

use super::RouteDefinition;
use crate::enums::RouteKind;

/// Partial set of definition fields. A definition satisfies the spec when
/// every field that is set equals the definition's value; an empty spec is
/// satisfied by every definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionFilterSpec {
    pub kind: Option<RouteKind>,
    pub page: Option<String>,
    pub pathname: Option<String>,
    pub filename: Option<String>,
    pub bundle_path: Option<String>,
}

impl DefinitionFilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: RouteKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn page<S: Into<String>>(mut self, page: S) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn pathname<S: Into<String>>(mut self, pathname: S) -> Self {
        self.pathname = Some(pathname.into());
        self
    }

    pub fn filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn bundle_path<S: Into<String>>(mut self, bundle_path: S) -> Self {
        self.bundle_path = Some(bundle_path.into());
        self
    }

    pub fn matches(&self, definition: &RouteDefinition) -> bool {
        self.kind.is_none_or(|kind| kind == definition.kind())
            && field_matches(self.page.as_deref(), definition.page())
            && field_matches(self.pathname.as_deref(), definition.pathname())
            && field_matches(self.filename.as_deref(), definition.filename())
            && field_matches(self.bundle_path.as_deref(), definition.bundle_path())
    }
}

#[inline]
fn field_matches(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|expected| expected == actual)
}

/// First definition satisfying any spec; specs are tried in order, and for
/// each spec the definitions are tried in order.
pub(crate) fn find_first<'a, D>(
    specs: &[DefinitionFilterSpec],
    definitions: &'a [D],
) -> Option<&'a D>
where
    D: AsRef<RouteDefinition>,
{
    specs.iter().find_map(|spec| {
        definitions
            .iter()
            .find(|definition| spec.matches(definition.as_ref()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DefinitionInput;

    fn definition(kind: RouteKind, page: &str) -> RouteDefinition {
        RouteDefinition::from_input(kind, DefinitionInput::new(page, format!("build{page}.js")))
    }

    #[test]
    fn every_named_field_must_match() {
        let about = definition(RouteKind::Pages, "/about");
        let spec = DefinitionFilterSpec::new()
            .kind(RouteKind::Pages)
            .pathname("/about");
        assert!(spec.matches(&about));

        let wrong_kind = spec.clone().kind(RouteKind::AppPage);
        assert!(!wrong_kind.matches(&about));

        let wrong_file = DefinitionFilterSpec::new()
            .pathname("/about")
            .filename("elsewhere.js");
        assert!(!wrong_file.matches(&about));
    }

    #[test]
    fn empty_spec_matches_anything() {
        assert!(DefinitionFilterSpec::new().matches(&definition(RouteKind::Pages, "/x")));
    }

    #[test]
    fn find_first_walks_specs_before_definitions() {
        let definitions = vec![
            definition(RouteKind::Pages, "/a"),
            definition(RouteKind::Pages, "/b"),
        ];
        let specs = [
            DefinitionFilterSpec::new().page("/missing"),
            DefinitionFilterSpec::new().page("/b"),
            DefinitionFilterSpec::new().page("/a"),
        ];

        let found = find_first(&specs, &definitions).unwrap();
        assert_eq!(found.page(), "/b");
    }
}
