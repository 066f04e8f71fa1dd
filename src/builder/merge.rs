use super::MergeStrategy;
use crate::definition::RouteDefinition;
use crate::definition::page::has_parallel_segment;

/// Groups `@slot` variants of the same logical route under their shared
/// bundle path. The slot-free page represents the group.
pub const PARALLEL_ROUTES: MergeStrategy = MergeStrategy {
    key: bundle_key,
    resolve: merge_parallel_route,
};

fn bundle_key(definition: &RouteDefinition) -> &str {
    definition.bundle_path()
}

fn merge_parallel_route(existing: &mut RouteDefinition, incoming: RouteDefinition) {
    if let Some(app_paths) = existing.app_paths_mut()
        && let Err(position) = app_paths.binary_search_by(|p| p.as_str().cmp(incoming.page()))
    {
        app_paths.insert(position, incoming.page().to_string());
    }

    if takes_precedence(&incoming, existing) {
        existing.replace_representative(&incoming);
    }
}

fn takes_precedence(incoming: &RouteDefinition, existing: &RouteDefinition) -> bool {
    match (
        has_parallel_segment(incoming.page()),
        has_parallel_segment(existing.page()),
    ) {
        (false, true) => true,
        (true, false) => false,
        _ => incoming.page() < existing.page(),
    }
}
