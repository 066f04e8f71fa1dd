use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteKind {
    AppPage = 0,
    AppRoute = 1,
    Pages = 2,
    InternalPages = 3,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppPage => "APP_PAGE",
            Self::AppRoute => "APP_ROUTE",
            Self::Pages => "PAGES",
            Self::InternalPages => "INTERNAL_PAGES",
        }
    }

    pub fn bundle_root(&self) -> &'static str {
        match self {
            Self::AppPage | Self::AppRoute => "app",
            Self::Pages | Self::InternalPages => "pages",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagesType {
    App,
    Pages,
    Root,
}

impl std::fmt::Display for PagesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::App => f.write_str("app"),
            Self::Pages => f.write_str("pages"),
            Self::Root => f.write_str("root"),
        }
    }
}
