// File: src/error.rs
// Purpose: Error type shared by route tables, route maps and navigators

use thiserror::Error;

/// Errors raised while loading, checking or looking up routes.
///
/// Generating a path never fails; these only come from table construction,
/// config parsing, the opt-in validation lint and by-name lookups.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("route `{0}` is defined more than once")]
    DuplicateRoute(String),

    #[error("route `{route}` has a placeholder for `{param}` that is not declared in params")]
    UndeclaredPlaceholder { route: String, param: String },

    #[error("route `{route}` declares param `{param}` but its path has no placeholder for it")]
    MissingPlaceholder { route: String, param: String },

    #[error("invalid route config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid route table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
