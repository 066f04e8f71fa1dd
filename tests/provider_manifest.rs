use std::sync::Arc;

use bunner_route_resolver::provider::{APP_PATHS_MANIFEST, PAGES_MANIFEST};
use bunner_route_resolver::{
    DefinitionFilterSpec, DefinitionProvider, IdentityNormalizer, Manifest, ManagerOptions,
    ManifestDefinitionProvider, PrefixNormalizer, RouteError, RouteKind, RouteManager,
    StaticManifestLoader,
};

fn manifest(entries: &[(&str, &str)]) -> Manifest {
    entries
        .iter()
        .map(|(page, file)| (page.to_string(), file.to_string()))
        .collect()
}

fn app_loader() -> Arc<StaticManifestLoader> {
    Arc::new(
        StaticManifestLoader::new()
            .with_manifest(
                APP_PATHS_MANIFEST,
                manifest(&[
                    ("/page", "app/page.js"),
                    ("/@modal/photos/[id]/page", "app/@modal/photos/[id]/page.js"),
                    ("/photos/[id]/page", "app/photos/[id]/page.js"),
                    ("/api/health/route", "app/api/health/route.js"),
                ]),
            )
            .with_manifest(
                PAGES_MANIFEST,
                manifest(&[
                    ("/_app", "pages/_app.js"),
                    ("/_document", "pages/_document.js"),
                    ("/_error", "pages/_error.js"),
                    ("/blog/[slug]", "pages/blog/[slug].js"),
                    ("/index", "pages/index.js"),
                ]),
            ),
    )
}

fn provider(kind: RouteKind, loader: Arc<StaticManifestLoader>) -> ManifestDefinitionProvider {
    ManifestDefinitionProvider::new(kind, loader, Arc::new(PrefixNormalizer::new(".build/server")))
}

#[tokio::test]
async fn app_page_provider_when_manifest_has_slots_then_merges_and_skips_routes() {
    let definitions = provider(RouteKind::AppPage, app_loader())
        .to_array()
        .await
        .expect("manifest should load");

    let pathnames: Vec<&str> = definitions.iter().map(|d| d.pathname()).collect();
    assert_eq!(pathnames, ["/", "/photos/[id]"]);

    let photos = &definitions[1];
    assert_eq!(photos.page(), "/photos/[id]/page");
    assert_eq!(photos.filename(), ".build/server/app/photos/[id]/page.js");
    assert_eq!(photos.app_paths().map(<[String]>::len), Some(2));
}

#[tokio::test]
async fn app_route_provider_when_loaded_then_keeps_only_route_handlers() {
    let definitions = provider(RouteKind::AppRoute, app_loader())
        .to_array()
        .await
        .expect("manifest should load");

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].pathname(), "/api/health");
    assert_eq!(definitions[0].bundle_path(), "app/api/health/route");
}

#[tokio::test]
async fn pages_providers_when_loaded_then_split_internal_pages_from_user_pages() {
    let loader = app_loader();

    let pages = provider(RouteKind::Pages, Arc::clone(&loader))
        .to_array()
        .await
        .expect("manifest should load");
    let pages: Vec<&str> = pages.iter().map(|d| d.pathname()).collect();
    assert_eq!(pages, ["/", "/blog/[slug]"]);

    let internal = provider(RouteKind::InternalPages, loader)
        .to_array()
        .await
        .expect("manifest should load");
    let internal: Vec<&str> = internal.iter().map(|d| d.page()).collect();
    assert_eq!(internal, ["/_app", "/_document", "/_error"]);
}

#[tokio::test]
async fn provider_when_reloaded_then_rereads_manifest() {
    let loader = Arc::new(StaticManifestLoader::new().with_manifest(
        PAGES_MANIFEST,
        manifest(&[("/a", "pages/a.js")]),
    ));
    let provider = ManifestDefinitionProvider::new(
        RouteKind::Pages,
        loader.clone(),
        Arc::new(IdentityNormalizer),
    );

    assert_eq!(provider.to_array().await.expect("load").len(), 1);

    loader.replace(PAGES_MANIFEST, manifest(&[("/a", "pages/a.js"), ("/b", "pages/b.js")]));
    assert_eq!(provider.to_array().await.expect("cached").len(), 1);

    provider.reload().expect("reload should succeed");
    assert_eq!(provider.to_array().await.expect("reload").len(), 2);

    let found = provider
        .find(&DefinitionFilterSpec::new().filename("pages/b.js"))
        .await
        .expect("find should succeed");
    assert_eq!(found.map(|d| d.page().to_string()).as_deref(), Some("/b"));
}

#[tokio::test]
async fn provider_when_manifest_missing_then_surfaces_load_error() {
    let provider = ManifestDefinitionProvider::new(
        RouteKind::AppPage,
        Arc::new(StaticManifestLoader::new()),
        Arc::new(IdentityNormalizer),
    );

    let err = provider.to_array().await.expect_err("manifest is missing");
    match err {
        RouteError::Load(load) => {
            assert_eq!(load.context(), "manifest 'app-paths-manifest.json'");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn manager_when_several_providers_then_orders_definitions_globally() {
    let loader = app_loader();
    let providers: Vec<Arc<dyn DefinitionProvider>> = vec![
        Arc::new(provider(RouteKind::Pages, Arc::clone(&loader))),
        Arc::new(provider(RouteKind::AppRoute, Arc::clone(&loader))),
        Arc::new(provider(RouteKind::AppPage, loader)),
    ];
    let manager = RouteManager::new(providers, ManagerOptions::default()).expect("manager");
    manager.load().await.expect("load should succeed");

    let snapshot = manager.snapshot().expect("snapshot should be published");
    let order: Vec<(&str, &str)> = snapshot
        .definitions()
        .iter()
        .map(|d| (d.pathname(), d.page()))
        .collect();
    assert_eq!(
        order,
        [
            ("/", "/index"),
            ("/", "/page"),
            ("/api/health", "/api/health/route"),
            ("/blog/[slug]", "/blog/[slug]"),
            ("/photos/[id]", "/photos/[id]/page"),
        ]
    );

    let health = manager
        .match_path("/api/health")
        .await
        .expect("lookup should succeed")
        .expect("route handler should match");
    assert_eq!(health.definition.kind(), RouteKind::AppRoute);

    let app_root = manager
        .find_definition(&[DefinitionFilterSpec::new().kind(RouteKind::AppPage).pathname("/")])
        .await
        .expect("lookup should succeed")
        .expect("app root should be findable");
    assert_eq!(app_root.bundle_path(), "app/page");
}
