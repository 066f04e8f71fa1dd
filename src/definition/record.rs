use serde::{Deserialize, Serialize};

use super::page::{normalize_app_path, normalize_pages_path, strip_parallel_segments};
use crate::enums::RouteKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefinitionDetails {
    AppPage {
        #[serde(rename = "appPaths")]
        app_paths: Vec<String>,
    },
    AppRoute,
    Pages,
    InternalPages {
        #[serde(rename = "builtIn")]
        built_in: bool,
    },
}

impl DefinitionDetails {
    pub fn kind(&self) -> RouteKind {
        match self {
            Self::AppPage { .. } => RouteKind::AppPage,
            Self::AppRoute => RouteKind::AppRoute,
            Self::Pages => RouteKind::Pages,
            Self::InternalPages { .. } => RouteKind::InternalPages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDefinition {
    #[serde(flatten)]
    details: DefinitionDetails,
    page: String,
    pathname: String,
    filename: String,
    bundle_path: String,
}

impl RouteDefinition {
    pub fn from_input(kind: RouteKind, input: DefinitionInput) -> Self {
        let DefinitionInput {
            page,
            filename,
            built_in,
        } = input;

        let (pathname, bundle_key, details) = match kind {
            RouteKind::AppPage => (
                normalize_app_path(&page),
                strip_parallel_segments(&page),
                DefinitionDetails::AppPage {
                    app_paths: vec![page.clone()],
                },
            ),
            RouteKind::AppRoute => (
                normalize_app_path(&page),
                strip_parallel_segments(&page),
                DefinitionDetails::AppRoute,
            ),
            RouteKind::Pages => (
                normalize_pages_path(&page),
                if page == "/" {
                    "/index".to_string()
                } else {
                    page.clone()
                },
                DefinitionDetails::Pages,
            ),
            RouteKind::InternalPages => (
                page.clone(),
                page.clone(),
                DefinitionDetails::InternalPages { built_in },
            ),
        };

        Self {
            details,
            bundle_path: format!("{}{}", kind.bundle_root(), bundle_key),
            page,
            pathname,
            filename,
        }
    }

    /// Definitions that are never backed by a build artifact, such as the
    /// single route served by a fixed manager.
    pub fn detached(details: DefinitionDetails, page: &str, pathname: &str) -> Self {
        Self {
            details,
            page: page.to_string(),
            pathname: pathname.to_string(),
            filename: String::new(),
            bundle_path: String::new(),
        }
    }

    pub fn kind(&self) -> RouteKind {
        self.details.kind()
    }

    pub fn details(&self) -> &DefinitionDetails {
        &self.details
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bundle_path(&self) -> &str {
        &self.bundle_path
    }

    pub fn app_paths(&self) -> Option<&[String]> {
        match &self.details {
            DefinitionDetails::AppPage { app_paths } => Some(app_paths),
            _ => None,
        }
    }

    pub fn built_in(&self) -> Option<bool> {
        match &self.details {
            DefinitionDetails::InternalPages { built_in } => Some(*built_in),
            _ => None,
        }
    }

    pub(crate) fn app_paths_mut(&mut self) -> Option<&mut Vec<String>> {
        match &mut self.details {
            DefinitionDetails::AppPage { app_paths } => Some(app_paths),
            _ => None,
        }
    }

    pub(crate) fn replace_representative(&mut self, other: &RouteDefinition) {
        self.page.clone_from(&other.page);
        self.pathname.clone_from(&other.pathname);
        self.filename.clone_from(&other.filename);
    }
}

impl AsRef<RouteDefinition> for RouteDefinition {
    fn as_ref(&self) -> &RouteDefinition {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefinitionInput {
    pub page: String,
    pub filename: String,
    #[serde(default)]
    pub built_in: bool,
}

impl DefinitionInput {
    pub fn new<P: Into<String>, F: Into<String>>(page: P, filename: F) -> Self {
        Self {
            page: page.into(),
            filename: filename.into(),
            built_in: false,
        }
    }

    pub fn built_in(mut self, value: bool) -> Self {
        self.built_in = value;
        self
    }
}
