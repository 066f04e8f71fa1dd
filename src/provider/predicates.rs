use crate::definition::page::{is_app_page_page, is_app_route_page, is_internal_page};
use crate::enums::RouteKind;

/// Whether a manifest entry belongs to the given route kind.
pub fn accepts(kind: RouteKind, page: &str) -> bool {
    match kind {
        RouteKind::AppPage => is_app_page_page(page),
        RouteKind::AppRoute => is_app_route_page(page),
        RouteKind::Pages => !is_internal_page(page),
        RouteKind::InternalPages => is_internal_page(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_app_manifest_between_pages_and_routes() {
        assert!(accepts(RouteKind::AppPage, "/blog/page"));
        assert!(!accepts(RouteKind::AppPage, "/api/route"));
        assert!(accepts(RouteKind::AppRoute, "/api/route"));
    }

    #[test]
    fn splits_pages_manifest_between_user_and_internal_pages() {
        assert!(accepts(RouteKind::Pages, "/about"));
        assert!(!accepts(RouteKind::Pages, "/_app"));
        assert!(accepts(RouteKind::InternalPages, "/_app"));
    }
}
