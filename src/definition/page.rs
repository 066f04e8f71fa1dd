//! Helpers over file-system route syntax (`/blog/(marketing)/@modal/[slug]/page`).

pub const INTERNAL_PAGES: [&str; 3] = ["/_app", "/_document", "/_error"];

#[inline]
pub fn is_parallel_segment(segment: &str) -> bool {
    segment.starts_with('@')
}

#[inline]
pub fn is_group_segment(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('(') && segment.ends_with(')')
}

pub fn has_parallel_segment(page: &str) -> bool {
    page.split('/').any(is_parallel_segment)
}

/// Drops `@slot` segments and nothing else; route groups stay.
pub fn strip_parallel_segments(page: &str) -> String {
    let kept: Vec<&str> = page
        .split('/')
        .filter(|segment| !is_parallel_segment(segment))
        .collect();
    let joined = kept.join("/");
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}

/// `/(shop)/@modal/items/[id]/page` -> `/items/[id]`
pub fn normalize_app_path(page: &str) -> String {
    let segments: Vec<&str> = page.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    let mut pathname = String::with_capacity(page.len());
    for (idx, segment) in segments.into_iter().enumerate() {
        if is_group_segment(segment) || is_parallel_segment(segment) {
            continue;
        }
        if idx == last && (segment == "page" || segment == "route") {
            continue;
        }
        pathname.push('/');
        pathname.push_str(segment);
    }

    if pathname.is_empty() {
        pathname.push('/');
    }
    pathname
}

/// `/index` -> `/`, `/blog/index` -> `/blog`
pub fn normalize_pages_path(page: &str) -> String {
    if page == "/index" || page.is_empty() {
        return "/".to_string();
    }
    match page.strip_suffix("/index") {
        Some(parent) => parent.to_string(),
        None => page.to_string(),
    }
}

fn last_segment(page: &str) -> &str {
    page.rsplit('/').next().unwrap_or(page)
}

pub fn is_app_page_page(page: &str) -> bool {
    last_segment(page) == "page"
}

pub fn is_app_route_page(page: &str) -> bool {
    last_segment(page) == "route"
}

pub fn is_internal_page(page: &str) -> bool {
    INTERNAL_PAGES.contains(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_drop_groups_slots_and_leaf() {
        assert_eq!(normalize_app_path("/page"), "/");
        assert_eq!(normalize_app_path("/p/@slot/foo/page"), "/p/foo");
        assert_eq!(normalize_app_path("/(shop)/items/[id]/page"), "/items/[id]");
        assert_eq!(normalize_app_path("/api/health/route"), "/api/health");
        assert_eq!(normalize_app_path("/p/[...slug]/page"), "/p/[...slug]");
    }

    #[test]
    fn bundle_key_keeps_groups() {
        assert_eq!(strip_parallel_segments("/p/@slot/foo/page"), "/p/foo/page");
        assert_eq!(strip_parallel_segments("/(shop)/@cart/page"), "/(shop)/page");
        assert_eq!(strip_parallel_segments("/@modal"), "/");
    }

    #[test]
    fn pages_index_collapses() {
        assert_eq!(normalize_pages_path("/index"), "/");
        assert_eq!(normalize_pages_path("/blog/index"), "/blog");
        assert_eq!(normalize_pages_path("/blog/[slug]"), "/blog/[slug]");
    }

    #[test]
    fn classifies_pages() {
        assert!(is_app_page_page("/dashboard/page"));
        assert!(!is_app_page_page("/dashboard/route"));
        assert!(is_app_route_page("/api/route"));
        assert!(is_internal_page("/_document"));
        assert!(!is_internal_page("/_hidden"));
        assert!(has_parallel_segment("/p/@slot/page"));
        assert!(!has_parallel_segment("/p/email@host/page"));
    }
}
