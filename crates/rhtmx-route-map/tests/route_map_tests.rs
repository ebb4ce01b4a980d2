//! Integration tests for route map path generation
//!
//! Covers:
//! - Static routes
//! - Path parameters (all placeholder styles, custom matchers)
//! - Search parameters and percent-encoding
//! - Base paths
//! - Loading tables from TOML and JSON

use pretty_assertions::assert_eq;
use regex::Regex;
use rhtmx_route_map::*;
use rstest::rstest;

fn app_table() -> RouteTable {
    RouteTable::new()
        .with_route("home", RouteDescriptor::new("/home"))
        .with_route("user", RouteDescriptor::new("/user/:id").with_param("id"))
        .with_route(
            "search",
            RouteDescriptor::new("/search")
                .with_search("q", true)
                .with_search("page", false),
        )
        .with_route(
            "user_posts",
            RouteDescriptor::new("/user/:id/posts/:post_id")
                .with_params(["id", "post_id"])
                .with_search("sort", false),
        )
}

// ============================================================================
// Static Routes
// ============================================================================

#[test]
fn test_static_route_returns_literal_path() {
    let routes = RouteMap::new(&app_table());
    let home = routes.get("home").unwrap();

    assert_eq!(home.signature(), RouteSignature::NoArgs);
    for _ in 0..3 {
        assert_eq!(home.build_static(), "/home");
        assert_eq!(home.build(&RouteArgs::none()), "/home");
    }
}

#[test]
fn test_unknown_route() {
    let routes = RouteMap::new(&app_table());
    assert!(routes.get("missing").is_none());

    let err = routes.path("missing", &RouteArgs::none()).unwrap_err();
    assert!(matches!(err, RouteError::UnknownRoute(ref name) if name == "missing"));
    assert_eq!(err.to_string(), "unknown route `missing`");
}

// ============================================================================
// Path Parameters
// ============================================================================

#[rstest]
#[case(ParamValue::from(42), "/user/42")]
#[case(ParamValue::from("abc"), "/user/abc")]
#[case(ParamValue::from(2.5), "/user/2.5")]
fn test_param_substitution(#[case] id: ParamValue, #[case] expected: &str) {
    let routes = RouteMap::new(&app_table());
    let path = routes.path("user", &RouteArgs::new().param("id", id)).unwrap();
    assert_eq!(path, expected);
}

#[test]
fn test_multiple_params_any_order() {
    let routes = RouteMap::new(&app_table());

    let forward = routes
        .path("user_posts", &RouteArgs::new().param("id", 1).param("post_id", 9))
        .unwrap();
    let backward = routes
        .path("user_posts", &RouteArgs::new().param("post_id", 9).param("id", 1))
        .unwrap();

    assert_eq!(forward, "/user/1/posts/9");
    assert_eq!(backward, forward);
}

#[test]
fn test_params_are_not_percent_encoded() {
    let routes = RouteMap::new(&app_table());
    let path = routes.path("user", &RouteArgs::new().param("id", "a b")).unwrap();
    assert_eq!(path, "/user/a b");
}

#[test]
fn test_unrecognized_param_is_ignored() {
    let routes = RouteMap::new(&app_table());

    let path = routes
        .path("user", &RouteArgs::new().param("nope", 1))
        .unwrap();
    assert_eq!(path, "/user/:id");

    let path = routes
        .path("home", &RouteArgs::new().param("id", 1))
        .unwrap();
    assert_eq!(path, "/home");
}

#[test]
fn test_missing_args_leave_template_unmodified() {
    let routes = RouteMap::new(&app_table());
    assert_eq!(routes.path("user", &RouteArgs::none()).unwrap(), "/user/:id");
    assert_eq!(
        routes.path("user_posts", &RouteArgs::none()).unwrap(),
        "/user/:id/posts/:post_id"
    );
}

#[rstest]
#[case("/user/:user-id", "user-id", ParamValue::from(42), "/user/42")]
#[case("/f/:file.name", "file.name", ParamValue::from("x"), "/f/x")]
#[case("/f/:file.name/raw", "file.name", ParamValue::from("a.txt"), "/f/a.txt/raw")]
fn test_declared_names_with_punctuation(
    #[case] template: &str,
    #[case] name: &str,
    #[case] value: ParamValue,
    #[case] expected: &str,
) {
    let table = RouteTable::new().with_route("route", RouteDescriptor::new(template).with_param(name));
    let routes = RouteMap::new(&table);

    let path = routes.path("route", &RouteArgs::new().param(name, value)).unwrap();
    assert_eq!(path, expected);
    assert!(table.validate(&ParamMatcher::default()).is_ok());
}

#[test]
fn test_declared_short_name_does_not_split_longer_token() {
    let table = RouteTable::new().with_route(
        "item",
        RouteDescriptor::new("/items/:idx/:id").with_param("id"),
    );
    let routes = RouteMap::new(&table);

    let path = routes.path("item", &RouteArgs::new().param("id", 7)).unwrap();
    assert_eq!(path, "/items/:idx/7");
}

#[test]
fn test_partial_params() {
    let routes = RouteMap::new(&app_table());
    let path = routes
        .path("user_posts", &RouteArgs::new().param("id", 3))
        .unwrap();
    assert_eq!(path, "/user/3/posts/:post_id");
}

#[rstest]
#[case(ParamStyle::Colon, "/files/:bucket/:key")]
#[case(ParamStyle::Bracket, "/files/[bucket]/[key]")]
#[case(ParamStyle::Brace, "/files/{bucket}/{key}")]
fn test_param_styles(#[case] style: ParamStyle, #[case] template: &str) {
    let table = RouteTable::new().with_route(
        "file",
        RouteDescriptor::new(template).with_params(["bucket", "key"]),
    );
    let routes = RouteMap::with_options(&table, RouteMapOptions::new().with_param_style(style));

    let path = routes
        .path("file", &RouteArgs::new().param("bucket", "media").param("key", 7))
        .unwrap();
    assert_eq!(path, "/files/media/7");
}

#[test]
fn test_custom_param_matcher() {
    let table = RouteTable::new().with_route(
        "user",
        RouteDescriptor::new("/user/$id/$name").with_params(["id", "name"]),
    );
    let options = RouteMapOptions::new()
        .with_param_matcher(|name| Regex::new(&format!(r"\${}", regex::escape(name))).unwrap());
    let routes = RouteMap::with_options(&table, options);

    let path = routes
        .path("user", &RouteArgs::new().param("name", "ada").param("id", 1))
        .unwrap();
    assert_eq!(path, "/user/1/ada");
}

// ============================================================================
// Search Parameters
// ============================================================================

#[test]
fn test_search_is_percent_encoded() {
    let routes = RouteMap::new(&app_table());
    let path = routes
        .path("search", &RouteArgs::new().search("q", "hello world"))
        .unwrap();
    assert_eq!(path, "/search?q=hello%20world");
}

#[test]
fn test_search_omitted_has_no_question_mark() {
    let routes = RouteMap::new(&app_table());
    assert_eq!(routes.path("search", &RouteArgs::none()).unwrap(), "/search");
}

#[test]
fn test_search_keeps_given_order() {
    let routes = RouteMap::new(&app_table());
    let path = routes
        .path(
            "search",
            &RouteArgs::new().search("page", 2).search("q", "rust & htmx"),
        )
        .unwrap();
    assert_eq!(path, "/search?page=2&q=rust%20%26%20htmx");
}

#[test]
fn test_required_search_keys_are_not_enforced() {
    let routes = RouteMap::new(&app_table());
    let path = routes
        .path("search", &RouteArgs::new().search("page", 1))
        .unwrap();
    assert_eq!(path, "/search?page=1");
}

#[test]
fn test_present_but_empty_search_appends_question_mark() {
    let routes = RouteMap::new(&app_table());
    let args = RouteArgs::new().with_search(Vec::<(String, ParamValue)>::new());
    assert_eq!(routes.path("search", &args).unwrap(), "/search?");
}

#[test]
fn test_params_and_search_together() {
    let routes = RouteMap::new(&app_table());
    let path = routes
        .path(
            "user_posts",
            &RouteArgs::new()
                .with_params([("id", 5), ("post_id", 6)])
                .search("sort", "new"),
        )
        .unwrap();
    assert_eq!(path, "/user/5/posts/6?sort=new");
}

#[test]
fn test_generation_is_idempotent() {
    let routes = RouteMap::new(&app_table());
    let args = RouteArgs::new()
        .param("id", 1)
        .param("post_id", 2)
        .search("sort", "a b");

    let first = routes.path("user_posts", &args).unwrap();
    let second = routes.path("user_posts", &args).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Base Path
// ============================================================================

#[test]
fn test_base_path_prefixes_every_route() {
    let routes = RouteMap::with_options(&app_table(), RouteMapOptions::new().with_base_path("/app/"));

    assert_eq!(routes.path("home", &RouteArgs::none()).unwrap(), "/app/home");
    assert_eq!(
        routes
            .path("search", &RouteArgs::new().search("q", "x"))
            .unwrap(),
        "/app/search?q=x"
    );
}

// ============================================================================
// Loading Tables
// ============================================================================

#[test]
fn test_route_map_from_toml_config() {
    let config = RouteConfig::from_toml_str(
        r#"
        [options]
        param_style = "bracket"

        [routes.user]
        path = "/user/[id]"
        params = ["id"]
        search = { tab = false }
        "#,
    )
    .unwrap();

    let routes = config.build();
    let user = routes.get("user").unwrap();
    assert_eq!(user.signature(), RouteSignature::ParamsAndSearch);
    assert_eq!(
        user.build(&RouteArgs::new().param("id", 3).search("tab", "posts")),
        "/user/3?tab=posts"
    );
}

#[test]
fn test_route_table_from_json() {
    let table = RouteTable::from_json_str(
        r#"{
            "home": { "path": "/home" },
            "user": { "path": "/user/:id", "params": ["id"] },
            "search": { "path": "/search", "search": { "q": true } }
        }"#,
    )
    .unwrap();

    let routes = RouteMap::new(&table);
    assert_eq!(routes.names().collect::<Vec<_>>(), vec!["home", "user", "search"]);
    assert_eq!(routes.path("user", &RouteArgs::new().param("id", 8)).unwrap(), "/user/8");
}

#[test]
fn test_route_table_from_toml_shortcut() {
    let table = RouteTable::from_toml_str("[routes.home]\npath = \"/home\"").unwrap();
    assert_eq!(table.get("home").unwrap().path, "/home");
}
