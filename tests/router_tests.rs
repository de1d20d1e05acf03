use std::sync::Arc;

use http::Method;
use routecast::{Action, Params, Request, RouteData, RouterError, Router};

mod common;
use common::TestTracing;

fn verb_router() -> Router<&'static str> {
    let mut router = Router::new();

    router.get("/", |_| "test-get").unwrap();
    router.post("test/post", |_| "test-post").unwrap();
    router.put("test/put", |_| "test-put").unwrap();
    router.delete("test/delete", |_| "test-delete").unwrap();
    router.any("test/any", |_| "test-any").unwrap();

    router.get("foo", |_| "foo").unwrap();
    router.get("bar/", |_| "bar").unwrap();

    router
}

#[test]
fn routes_dispatch_per_method() {
    let _tracing = TestTracing::init();
    let router = verb_router();

    assert_eq!(router.handle(&Method::GET, "/").unwrap(), "test-get");
    assert_eq!(router.handle(&Method::POST, "test/post").unwrap(), "test-post");
    assert_eq!(router.handle(&Method::PUT, "test/put").unwrap(), "test-put");
    assert_eq!(
        router.handle(&Method::DELETE, "test/delete").unwrap(),
        "test-delete"
    );
}

#[test]
fn get_also_answers_head() {
    let _tracing = TestTracing::init();
    let router = verb_router();

    assert_eq!(router.handle(&Method::HEAD, "/").unwrap(), "test-get");
}

#[test]
fn any_answers_every_method() {
    let _tracing = TestTracing::init();
    let router = verb_router();

    for method in [
        Method::HEAD,
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
    ] {
        assert_eq!(router.handle(&method, "test/any").unwrap(), "test-any");
    }
}

#[test]
fn trailing_slash_routes_are_distinct() {
    let _tracing = TestTracing::init();
    let router = verb_router();

    assert_eq!(router.handle(&Method::GET, "foo").unwrap(), "foo");
    assert_eq!(router.handle(&Method::GET, "bar/").unwrap(), "bar");

    assert!(matches!(
        router.handle(&Method::GET, "foo/"),
        Err(RouterError::RouteNotFound { .. })
    ));
    assert!(matches!(
        router.handle(&Method::GET, "bar"),
        Err(RouterError::RouteNotFound { .. })
    ));
}

#[test]
fn unmatched_path_is_not_found() {
    let _tracing = TestTracing::init();
    let router = verb_router();

    assert!(matches!(
        router.handle(&Method::GET, "404"),
        Err(RouterError::RouteNotFound { .. })
    ));
}

#[test]
fn method_without_routes_is_distinguishable() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();
    router.get("foo", |_| "foo").unwrap();

    assert!(matches!(
        router.handle(&Method::POST, "foo"),
        Err(RouterError::MethodNotSupported { .. })
    ));
}

#[test]
fn empty_router_supports_no_method() {
    let _tracing = TestTracing::init();
    let router: Router<()> = Router::new();

    assert!(matches!(
        router.handle(&Method::GET, "/"),
        Err(RouterError::MethodNotSupported { .. })
    ));
}

#[test]
fn path_parameters_reach_the_handler() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();

    router
        .get("hello/:name", |params| {
            format!("Hello, {}", params.get("name").unwrap_or_default())
        })
        .unwrap();

    assert_eq!(router.handle(&Method::GET, "hello/Sam").unwrap(), "Hello, Sam");
    assert_eq!(
        router.handle(&Method::GET, "hello/Bill").unwrap(),
        "Hello, Bill"
    );
}

#[test]
fn raw_regex_route_end_to_end() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();

    router
        .get(r"~foo-(\w+)-bar/(\w+)/abc/(\d+)~", |params| {
            params.values().collect::<Vec<_>>().join("-")
        })
        .unwrap();

    assert_eq!(
        router.handle(&Method::GET, "foo-baz-bar/buzz/abc/15").unwrap(),
        "baz-buzz-15"
    );

    // The digits group rejects "dd".
    assert!(matches!(
        router.handle(&Method::GET, "foo-baz-bar/buzz/abc/dd"),
        Err(RouterError::RouteNotFound { .. })
    ));
}

#[test]
fn first_match_follows_registration_order() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();

    router.get("stuff/:word", |_| "stuff").unwrap();
    router.get("stuff/search", |_| "search").unwrap();

    assert_eq!(router.handle(&Method::GET, "stuff/search").unwrap(), "stuff");

    router.clear();

    router.get("stuff/search", |_| "search").unwrap();
    router.get("stuff/:word", |_| "stuff").unwrap();

    assert_eq!(router.handle(&Method::GET, "stuff/search").unwrap(), "search");
}

#[test]
fn clear_leaves_no_stale_state() {
    let _tracing = TestTracing::init();
    let mut router = verb_router();

    assert_eq!(router.handle(&Method::GET, "foo").unwrap(), "foo");

    router.clear();

    assert!(matches!(
        router.handle(&Method::GET, "foo"),
        Err(RouterError::MethodNotSupported { .. })
    ));
    assert!(router.patterns().is_empty());
}

#[test]
fn invalid_pattern_fails_registration_not_matching() {
    let _tracing = TestTracing::init();
    let mut router: Router<&str> = Router::new();

    assert!(matches!(
        router.get("", |_| "never"),
        Err(RouterError::Configuration(_))
    ));
    assert!(matches!(
        router.get("/something", |_| "never"),
        Err(RouterError::Configuration(_))
    ));
    assert!(matches!(
        router.get("~users/(~", |_| "never"),
        Err(RouterError::PatternCompilation { .. })
    ));

    // Nothing was registered by the failing calls.
    assert!(router.patterns().is_empty());
}

#[test]
fn abstract_action_without_invoker_is_invalid() {
    let _tracing = TestTracing::init();
    let mut router: Router<String> = Router::new();

    router
        .add(&[Method::GET], "profile", Action::named("profile#show"), None)
        .unwrap();

    assert!(matches!(
        router.handle(&Method::GET, "profile"),
        Err(RouterError::InvalidHandler { .. })
    ));
}

fn tagging_invoker(
    action: &Action<String>,
    params: &Params,
    data: Option<&RouteData>,
) -> Result<String, RouterError> {
    let tag = data
        .and_then(|d| d.downcast_ref::<&str>())
        .copied()
        .unwrap_or("untagged");

    match action {
        Action::Handler(handler) => Ok(format!("{tag}:{}", handler(params))),
        Action::Abstract(name) => Err(RouterError::InvalidHandler {
            action: name.clone(),
        }),
    }
}

#[test]
fn route_data_reaches_the_route_invoker() {
    let _tracing = TestTracing::init();
    let mut router: Router<String> = Router::new();

    router
        .add(
            &[Method::GET],
            "pets/:id",
            Action::handler(|params| format!("pet-{}", params.get("id").unwrap_or_default())),
            Some(Arc::new("inventory") as RouteData),
        )
        .unwrap();

    router.set_route_invoker(Some(Arc::new(tagging_invoker)));

    assert_eq!(
        router.handle(&Method::GET, "pets/42").unwrap(),
        "inventory:pet-42"
    );
}

#[test]
fn custom_methods_go_through_add() {
    let _tracing = TestTracing::init();
    let purge = Method::from_bytes(b"PURGE").unwrap();
    let mut router: Router<&str> = Router::new();

    router
        .add(&[purge.clone()], "cache/:key", Action::handler(|_| "purged"), None)
        .unwrap();

    assert_eq!(router.handle(&purge, "cache/users").unwrap(), "purged");
    assert!(matches!(
        router.handle(&Method::GET, "cache/users"),
        Err(RouterError::MethodNotSupported { .. })
    ));
}

struct TestRequest {
    method: Method,
    path: &'static str,
}

impl Request for TestRequest {
    fn method(&self) -> Method {
        self.method.clone()
    }

    fn path(&self) -> &str {
        self.path
    }
}

#[test]
fn handle_request_normalizes_transport_paths() {
    let _tracing = TestTracing::init();
    let mut router = Router::new();

    router.get("/", |_| "root".to_string()).unwrap();
    router
        .get("hello/:name", |params| {
            format!("Hello, {}", params.get("name").unwrap_or_default())
        })
        .unwrap();

    let request = TestRequest {
        method: Method::GET,
        path: "/hello/Sam",
    };
    assert_eq!(router.handle_request(&request).unwrap(), "Hello, Sam");

    let root = TestRequest {
        method: Method::GET,
        path: "/",
    };
    assert_eq!(router.handle_request(&root).unwrap(), "root");
}

#[test]
fn patterns_reports_registered_sources() {
    let _tracing = TestTracing::init();
    let mut router: Router<&str> = Router::new();

    router.get("foo", |_| "foo").unwrap();
    router.post("bar/:id", |_| "bar").unwrap();

    let mut patterns = router.patterns();
    patterns.sort();
    patterns.dedup();

    assert_eq!(patterns, vec!["bar/:id".to_string(), "foo".to_string()]);
}
