use bunner_mvc_router::{Router, RouterError, RouterOptions, RouteTarget, TableError};

fn sealed(patterns: &[&str]) -> Router {
    let router = Router::new(None);
    for pattern in patterns {
        router
            .connect(pattern, "pages/show", Vec::<(String, String)>::new())
            .expect("static route should register");
    }
    router.seal();
    router
}

#[test]
fn router_when_static_route_registered_then_returns_match() {
    let router = sealed(&["/about"]);

    let found = router.find("/about").expect("static route should match");
    assert_eq!(found.route_id, 0);
    assert_eq!(found.target(), ("pages", "show"));
    assert!(found.params.is_empty());
}

#[test]
fn router_when_static_route_then_matches_only_equal_normalized_paths() {
    let router = sealed(&["/about/team"]);

    for path in ["/about/team", "/about/team/", "about/team", "/about/team?x=1", "/about/team#top"] {
        assert!(router.match_path(path).is_some(), "{path} should match");
    }
    for path in ["/about", "/about/team/lead", "/about/teams", "/about//team", "/About/team"] {
        assert!(router.match_path(path).is_none(), "{path} should not match");
    }
}

#[test]
fn router_when_root_route_registered_then_matches_root_only() {
    let router = sealed(&["/"]);

    assert!(router.match_path("/").is_some());
    assert!(router.match_path("").is_some());
    assert!(router.match_path("/?page=2").is_some());
    assert!(router.match_path("/index").is_none());
}

#[test]
fn router_when_literal_contains_regex_metacharacters_then_matches_literally() {
    let router = sealed(&["/feed.xml", "/a+b"]);

    assert!(router.match_path("/feed.xml").is_some());
    assert!(router.match_path("/feedxxml").is_none());
    assert!(router.match_path("/a+b").is_some());
    assert!(router.match_path("/aab").is_none());
}

#[test]
fn router_when_case_insensitive_then_matches_different_case() {
    let router = Router::new(Some(
        RouterOptions::builder()
            .case_sensitive(false)
            .build()
            .expect("options should build"),
    ));
    router
        .add(bunner_mvc_router::RouteSpec::new(
            "/Users/Profile",
            RouteTarget::action("users", "profile"),
        ))
        .expect("route should register");
    router.seal();

    assert!(router.match_path("/users/PROFILE").is_some());
}

#[test]
fn router_when_no_route_matches_then_find_reports_not_found() {
    let router = sealed(&["/about"]);

    match router.find("/contact").expect_err("expected route not found") {
        RouterError::Table(TableError::RouteNotFound { path }) => assert_eq!(path, "/contact"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(router.match_path("/contact").is_none());
}

#[test]
fn router_when_path_contains_parent_traversal_then_no_match() {
    let router = sealed(&["/about"]);

    assert!(router.match_path("/x/../about").is_none());
    match router.find("/x/../about").expect_err("expected path error") {
        RouterError::Table(TableError::Path(_)) => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_duplicate_slashes_collapsed_then_matches() {
    let router = Router::new(Some(
        RouterOptions::builder()
            .collapse_duplicate_slashes(true)
            .build()
            .expect("options should build"),
    ));
    router
        .connect("/about/team", "pages/team", Vec::<(String, String)>::new())
        .expect("route should register");
    router.seal();

    assert!(router.match_path("//about///team").is_some());
}
