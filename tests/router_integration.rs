use std::sync::Arc;

use bunner_mvc_router::{
    DispatchError, Dispatcher, RouteMatch, RouteTable, Router, RouterError, RouterResult,
    TableError, path::PathError,
};

fn application_table() -> RouterResult<Arc<RouteTable>> {
    let router = Router::new(None);
    router.connect(
        "/{:lang::?}/news/{:id:\\d+}",
        "news/view",
        [("module", "news")],
    )?;
    router.connect(
        "/{:lang::?}/news/{:action::?}",
        "news",
        [("module", "news")],
    )?;
    router.connect("/{:controller}/{:action::?}", "", Vec::<(String, String)>::new())?;
    router.connect("/", "home/index", Vec::<(String, String)>::new())?;
    Ok(router.seal())
}

fn expect_path_error<T: std::fmt::Debug>(result: RouterResult<T>) -> PathError {
    match result.expect_err("expected error") {
        RouterError::Table(TableError::Path(err)) => err,
        other => panic!("expected path error, got {other:?}"),
    }
}

#[test]
fn router_when_news_item_requested_then_resolves_view_with_language() {
    let table = application_table().unwrap();

    let found = table.match_path("/fr/news/12").expect("news item should match");
    assert_eq!(found.route_id, 0);
    assert_eq!(found.target(), ("news", "view"));
    assert_eq!(found.get("lang"), Some("fr"));
    assert_eq!(found.get("id"), Some("12"));
    assert_eq!(found.module(), Some("news"));
}

#[test]
fn router_when_news_action_requested_then_resolves_action_from_path() {
    let table = application_table().unwrap();

    let found = table.match_path("/en/news/archive").unwrap();
    assert_eq!(found.route_id, 1);
    assert_eq!(found.target(), ("news", "archive"));
    assert_eq!(found.get("lang"), Some("en"));
}

#[test]
fn router_when_bare_news_requested_then_defaults_apply() {
    let table = application_table().unwrap();

    let found = table.match_path("/news").unwrap();
    assert_eq!(found.route_id, 1);
    assert_eq!(found.target(), ("news", "index"));
    assert!(!found.params.contains_key("lang"));
    assert!(!found.params.contains_key("action"));
    assert_eq!(found.module(), Some("news"));
}

#[test]
fn router_when_generic_route_requested_then_controller_comes_from_path() {
    let table = application_table().unwrap();

    assert_eq!(table.match_path("/users/edit").unwrap().target(), ("users", "edit"));
    assert_eq!(table.match_path("/users").unwrap().target(), ("users", "index"));
    assert_eq!(table.match_path("/").unwrap().target(), ("home", "index"));
    assert!(table.match_path("/a/b/c").is_none());
}

#[test]
fn router_when_query_and_fragment_present_then_they_are_ignored() {
    let table = application_table().unwrap();

    let found = table.match_path("/fr/news/12?utm=feed#comments").unwrap();
    assert_eq!(found.get("id"), Some("12"));
    assert!(!found.params.contains_key("utm"));
}

#[test]
fn router_when_path_has_control_character_then_find_reports_path_error() {
    let router = Router::new(None);
    router
        .connect("/news", "news/index", Vec::<(String, String)>::new())
        .unwrap();
    router.seal();

    match expect_path_error(router.find("/ne\tws")) {
        PathError::ControlOrWhitespace { byte, .. } => assert_eq!(byte, b'\t'),
        other => panic!("unexpected path error: {other:?}"),
    }
    assert!(router.match_path("/ne\tws").is_none());
}

#[test]
fn router_when_url_built_then_matching_it_yields_same_target_and_params() {
    let table = application_table().unwrap();
    let cases: Vec<(&str, &str, Vec<(&str, &str)>)> = vec![
        ("news", "view", vec![("lang", "fr"), ("id", "12")]),
        ("news", "view", vec![("id", "3")]),
        ("news", "archive", vec![("lang", "en")]),
        ("news", "index", vec![]),
        ("users", "edit", vec![]),
        ("users", "index", vec![]),
        ("home", "index", vec![]),
    ];

    for (controller, action, params) in cases {
        let url = table
            .url_for((controller, action), params.iter().copied())
            .unwrap_or_else(|err| panic!("{controller}/{action}: {err}"));
        let found = table
            .match_path(&url)
            .unwrap_or_else(|| panic!("{url} should match"));

        assert_eq!(found.target(), (controller, action), "url {url}");
        for (key, value) in params {
            assert_eq!(found.get(key), Some(value), "url {url} param {key}");
        }
    }
}

#[test]
fn router_when_match_serialized_then_round_trips_through_json() {
    let table = application_table().unwrap();
    let found = table.match_path("/fr/news/12").unwrap();

    let json = serde_json::to_string(&found).unwrap();
    let decoded: RouteMatch = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, found);
}

#[test]
fn dispatcher_when_handler_registered_then_receives_match() {
    let table = application_table().unwrap();
    let mut dispatcher: Dispatcher<String> = Dispatcher::new();
    dispatcher
        .register("news", "view", |found: &RouteMatch| {
            format!("news #{} ({})", found.get("id").unwrap_or("?"), found.get("lang").unwrap_or("-"))
        })
        .unwrap();
    dispatcher
        .register("news", "index", |_: &RouteMatch| "news index".to_string())
        .unwrap();

    assert_eq!(dispatcher.len(), 2);
    assert_eq!(dispatcher.dispatch_path(&table, "/fr/news/12").unwrap(), "news #12 (fr)");
    assert_eq!(dispatcher.dispatch_path(&table, "/news").unwrap(), "news index");
}

#[test]
fn dispatcher_when_no_handler_or_route_then_returns_errors() {
    let table = application_table().unwrap();
    let mut dispatcher: Dispatcher<()> = Dispatcher::default();
    dispatcher.register("news", "view", |_: &RouteMatch| ()).unwrap();

    assert_eq!(
        dispatcher.dispatch_path(&table, "/users/edit"),
        Err(DispatchError::HandlerNotFound {
            controller: "users".to_string(),
            action: "edit".to_string(),
        })
    );
    assert_eq!(
        dispatcher.dispatch_path(&table, "/a/b/c"),
        Err(DispatchError::NotFound {
            path: "/a/b/c".to_string()
        })
    );
    assert_eq!(
        dispatcher.register("news", "view", |_: &RouteMatch| ()),
        Err(DispatchError::DuplicateHandler {
            controller: "news".to_string(),
            action: "view".to_string(),
        })
    );
}
