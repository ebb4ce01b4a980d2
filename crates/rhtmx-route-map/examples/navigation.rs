// Example: Route map and navigation from a TOML route config
//
// Loads a route table, generates a few paths and "navigates" by pushing
// them onto an in-memory history stack.
//
// Run with:
//   RUST_LOG=debug cargo run -p rhtmx-route-map --example navigation

use rhtmx_route_map::{define_routes, RouteArgs, RouteConfig};
use std::cell::RefCell;

const ROUTES: &str = r#"
[options]
base_path = "/app"

[routes.home]
path = "/home"

[routes.user]
path = "/user/:id"
params = ["id"]

[routes.search]
path = "/search"
search = { q = true, page = false }
"#;

define_routes! {
    mod docs {
        index => "/docs";
        page => "/docs/:section/:slug", params(section, slug);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = RouteConfig::from_toml_str(ROUTES)?;
    config.routes.validate(config.options.matcher())?;

    let routes = config.build();
    for builder in &routes {
        println!("{:<8} {:?}", builder.name(), builder.signature());
    }

    let history = RefCell::new(Vec::new());
    let navigator = routes.navigator(|path| history.borrow_mut().push(path));

    navigator.navigate("home", &RouteArgs::none())?;
    navigator.navigate("user", &RouteArgs::new().param("id", 42))?;
    navigator.navigate("search", &RouteArgs::new().search("q", "hello world").search("page", 2))?;

    let docs = docs::Routes::new();
    docs.navigator(|path| history.borrow_mut().push(path))
        .page("routing", "named-routes");
    history.borrow_mut().push(docs.index());

    for (i, path) in history.borrow().iter().enumerate() {
        println!("{}: {}", i, path);
    }

    Ok(())
}
