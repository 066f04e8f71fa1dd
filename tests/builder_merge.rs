use bunner_route_resolver::{
    DefinitionBuilder, DefinitionInput, RouteKind, StaticDefinitionProvider,
};
use bunner_route_resolver::provider::DefinitionProvider;

fn slot_fixture() -> DefinitionBuilder {
    let mut builder = DefinitionBuilder::for_kind(RouteKind::AppPage);
    // deliberately out of order
    builder.add(DefinitionInput::new(
        "/p/@slot/[...slug]/page",
        "app/p/@slot/[...slug]/page.js",
    ));
    builder.add(DefinitionInput::new(
        "/p/[...slug]/page",
        "app/p/[...slug]/page.js",
    ));
    builder.add(DefinitionInput::new("/p/foo/page", "app/p/foo/page.js"));
    builder.add(DefinitionInput::new(
        "/p/@slot/foo/page",
        "app/p/@slot/foo/page.js",
    ));
    builder
}

#[test]
fn builder_when_parallel_slots_share_bundle_path_then_merges_into_one_definition() {
    let definitions = slot_fixture().build();

    assert_eq!(definitions.len(), 2);

    let catch_all = &definitions[0];
    assert_eq!(catch_all.page(), "/p/[...slug]/page");
    assert_eq!(catch_all.pathname(), "/p/[...slug]");
    assert_eq!(catch_all.filename(), "app/p/[...slug]/page.js");
    assert_eq!(catch_all.bundle_path(), "app/p/[...slug]/page");
    assert_eq!(
        catch_all.app_paths(),
        Some(&["/p/@slot/[...slug]/page".to_string(), "/p/[...slug]/page".to_string()][..])
    );

    let fixed = &definitions[1];
    assert_eq!(fixed.page(), "/p/foo/page");
    assert_eq!(fixed.pathname(), "/p/foo");
    assert_eq!(fixed.bundle_path(), "app/p/foo/page");
    assert_eq!(
        fixed.app_paths(),
        Some(&["/p/@slot/foo/page".to_string(), "/p/foo/page".to_string()][..])
    );
}

#[test]
fn builder_when_serialized_then_uses_camel_case_definition_shape() {
    let definitions = slot_fixture().build();
    let value = serde_json::to_value(&definitions[1]).expect("definition should serialize");

    assert_eq!(
        value,
        serde_json::json!({
            "kind": "APP_PAGE",
            "appPaths": ["/p/@slot/foo/page", "/p/foo/page"],
            "bundlePath": "app/p/foo/page",
            "filename": "app/p/foo/page.js",
            "page": "/p/foo/page",
            "pathname": "/p/foo",
        })
    );
}

#[test]
fn builder_when_build_called_twice_then_returns_identical_sorted_lists() {
    let builder = slot_fixture();
    let first = builder.build();
    let second = builder.build();

    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| {
        (pair[0].pathname(), pair[0].page()) <= (pair[1].pathname(), pair[1].page())
    }));
}

#[test]
fn builder_when_kind_has_no_merge_then_keeps_every_distinct_page() {
    let mut builder = DefinitionBuilder::for_kind(RouteKind::AppRoute);
    builder.add(DefinitionInput::new("/api/b/route", "app/api/b/route.js"));
    builder.add(DefinitionInput::new("/api/@x/a/route", "app/api/@x/a/route.js"));
    builder.add(DefinitionInput::new("/api/a/route", "app/api/a/route.js"));
    builder.add(DefinitionInput::new("/api/a/route", "app/api/a/route.js"));

    let definitions = builder.build();
    let pages: Vec<&str> = definitions.iter().map(|d| d.page()).collect();

    assert_eq!(pages, ["/api/@x/a/route", "/api/a/route", "/api/b/route"]);
    assert!(definitions.iter().all(|d| d.app_paths().is_none()));
}

#[test]
fn builder_when_pages_root_added_then_bundles_as_index() {
    let mut builder = DefinitionBuilder::for_kind(RouteKind::Pages);
    builder.add(DefinitionInput::new("/", "pages/index.js"));
    builder.add(DefinitionInput::new("/blog/[slug]", "pages/blog/[slug].js"));

    let definitions = builder.build();

    assert_eq!(definitions[0].pathname(), "/");
    assert_eq!(definitions[0].bundle_path(), "pages/index");
    assert_eq!(definitions[1].pathname(), "/blog/[slug]");
    assert_eq!(definitions[1].bundle_path(), "pages/blog/[slug]");
}

#[tokio::test]
async fn static_provider_when_reload_called_then_reports_unimplemented() {
    let provider = StaticDefinitionProvider::from_builder(&slot_fixture());

    assert_eq!(provider.kind(), RouteKind::AppPage);
    assert!(!provider.is_reloadable());
    assert_eq!(provider.to_array().await.expect("list").len(), 2);

    let err = provider.reload().expect_err("static provider cannot reload");
    match err {
        bunner_route_resolver::RouteError::Unimplemented { operation, .. } => {
            assert_eq!(operation, "reload");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn static_provider_when_filtered_then_returns_matching_definitions() {
    use bunner_route_resolver::DefinitionFilterSpec;

    let provider = StaticDefinitionProvider::from_builder(&slot_fixture());

    let found = provider
        .find(&DefinitionFilterSpec::new().pathname("/p/foo"))
        .await
        .expect("find should succeed");
    assert_eq!(found.map(|d| d.page().to_string()).as_deref(), Some("/p/foo/page"));

    let all = provider
        .filter(&DefinitionFilterSpec::new().kind(RouteKind::AppPage))
        .await
        .expect("filter should succeed");
    assert_eq!(all.len(), 2);

    let none = provider
        .filter(&DefinitionFilterSpec::new().kind(RouteKind::Pages))
        .await
        .expect("filter should succeed");
    assert!(none.is_empty());
}
