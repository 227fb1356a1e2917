//! Integration tests for search-router
//!
//! Tests are organized by feature area and cover:
//! - The default rule table (redirect, editor, page)
//! - Rule-order precedence
//! - No-match behaviour
//! - Config-driven routers
//! - Navigation sessions with redirects
//! - View dispatch under a theme

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use search_router::*;

fn page(name: &str) -> Option<ResolvedRoute> {
    Some(ResolvedRoute::Page(PageParams::new(name)))
}

fn dataset(name: &str, dataset_id: &str) -> Option<ResolvedRoute> {
    Some(ResolvedRoute::Page(
        PageParams::new(name).with_dataset(dataset_id),
    ))
}

// ============================================================================
// Default rule table
// ============================================================================

#[test]
fn test_root_redirects_to_explore() {
    assert_eq!(
        resolve("/"),
        Some(ResolvedRoute::Redirect {
            to: "/explore".to_string()
        })
    );
}

#[test]
fn test_editor_has_no_params() {
    let resolved = resolve("/editor").unwrap();
    assert_eq!(resolved, ResolvedRoute::Editor);
    assert_eq!(resolved.kind(), OutcomeKind::RenderEditor);
    assert!(resolved.params().is_empty());
}

#[test]
fn test_explore_without_dataset() {
    let resolved = resolve("/explore").unwrap();
    assert_eq!(resolved.kind(), OutcomeKind::RenderPage);
    assert_eq!(resolved.params().get("page"), Some(&"explore".to_string()));
    assert_eq!(resolved.params().get("datasetId"), None);
}

#[test]
fn test_explore_with_dataset() {
    let resolved = resolve("/explore/ds123").unwrap();
    let params = resolved.params();
    assert_eq!(params.get("page"), Some(&"explore".to_string()));
    assert_eq!(params.get("datasetId"), Some(&"ds123".to_string()));
}

#[rstest]
#[case("/explore", page("explore"))]
#[case("/about", page("about"))]
#[case("/upload", page("upload"))]
#[case("/explore/ds123", dataset("explore", "ds123"))]
#[case("/dataset/abc-42", dataset("dataset", "abc-42"))]
#[case("/editors", page("editors"))]
fn test_page_shapes(#[case] path: &str, #[case] expected: Option<ResolvedRoute>) {
    assert_eq!(resolve(path), expected);
}

#[test]
fn test_resolution_is_deterministic() {
    for path in ["/", "/editor", "/explore", "/explore/ds123", "/a/b/c"] {
        assert_eq!(resolve(path), resolve(path));
    }
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_editor_rule_wins_over_page_template() {
    let router = Router::search_app();
    let page_rule = &router.routes()[2];

    // The page template would accept /editor as a one-segment page...
    assert!(page_rule.matches("/editor").is_some());
    // ...but the earlier editor rule wins
    assert_eq!(router.resolve("/editor"), Some(ResolvedRoute::Editor));
}

#[test]
fn test_only_exact_editor_path_is_the_editor() {
    assert_eq!(resolve("/editor/x"), dataset("editor", "x"));
}

#[test]
fn test_rule_order_is_declaration_order() {
    let router = Router::search_app();
    let kinds: Vec<OutcomeKind> = router.routes().iter().map(Route::kind).collect();
    assert_eq!(
        kinds,
        vec![
            OutcomeKind::Redirect,
            OutcomeKind::RenderEditor,
            OutcomeKind::RenderPage
        ]
    );
}

// ============================================================================
// No match
// ============================================================================

#[rstest]
#[case("/a/b/c")]
#[case("/explore/ds123/extra")]
#[case("explore")]
#[case("")]
#[case("/explore//ds123")]
#[case("//")]
fn test_irregular_paths_render_nothing(#[case] path: &str) {
    assert_eq!(resolve(path), None);
}

// ============================================================================
// Config-driven routers
// ============================================================================

#[test]
fn test_router_from_custom_config() {
    let config = Config::from_toml(
        r#"
        [routing]
        case_insensitive = false

        [routes]
        landing = "/search"
        editor = "/context-editor"
        "#,
    )
    .unwrap();
    let router = Router::from_config(&config).unwrap();

    assert_eq!(
        router.resolve("/"),
        Some(ResolvedRoute::Redirect {
            to: "/search".to_string()
        })
    );
    assert_eq!(router.resolve("/context-editor"), Some(ResolvedRoute::Editor));
    assert_eq!(router.resolve("/editor"), page("editor"));
    assert_eq!(
        router.resolve("/Context-Editor"),
        page("Context-Editor")
    );
}

#[test]
fn test_router_from_config_rejects_bad_templates() {
    let mut config = Config::default();
    config.routes.page = "/:view".to_string();
    assert!(matches!(
        Router::from_config(&config),
        Err(RouterError::MissingParam { .. })
    ));

    let mut config = Config::default();
    config.routes.landing = "explore".to_string();
    assert!(matches!(
        Router::from_config(&config),
        Err(RouterError::InvalidRedirectTarget { .. })
    ));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_landing_session() {
    let mut nav = Navigator::new(Arc::new(Router::search_app()), MemoryHistory::default());

    assert_eq!(nav.sync().unwrap().cloned(), page("explore"));
    assert_eq!(nav.history().len(), 1);
    assert_eq!(nav.history().location().pathname, "/explore");

    assert_eq!(
        nav.navigate("/explore/ds123").unwrap().cloned(),
        dataset("explore", "ds123")
    );
    assert_eq!(nav.navigate("/editor").unwrap().cloned(), Some(ResolvedRoute::Editor));
    assert_eq!(nav.history().len(), 3);

    // Navigating home again redirects in place
    assert_eq!(nav.navigate("/").unwrap().cloned(), page("explore"));
    assert_eq!(nav.history().len(), 4);
    assert_eq!(nav.back().unwrap().cloned(), Some(ResolvedRoute::Editor));
}

// ============================================================================
// View dispatch
// ============================================================================

struct Screens;

impl Views for Screens {
    type Output = String;

    fn editor(&self) -> String {
        "agcontext-editor".to_string()
    }

    fn page(&self, params: &PageParams) -> String {
        match params.dataset_id {
            Some(ref id) => format!("navbar[{}] dataset {}", params.page, id),
            None => format!("navbar[{}]", params.page),
        }
    }
}

#[test]
fn test_themed_rendering_per_outcome() {
    let provider = ThemeProvider::new(Theme::default());

    let editor = provider.render(&resolve("/editor").unwrap(), &Screens).unwrap();
    assert_eq!(editor.content, "agcontext-editor");
    assert_eq!(editor.theme.name, "default");

    let page = provider
        .render(&resolve("/explore/ds1").unwrap(), &Screens)
        .unwrap();
    assert_eq!(page.content, "navbar[explore] dataset ds1");

    assert!(provider.render(&resolve("/").unwrap(), &Screens).is_none());
}
