//! Path utilities: template parsing, placeholder matching, query encoding
//! and base-path joining.
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod matcher;
pub mod query;
pub mod template;

pub use matcher::{CustomMatcher, ParamMatcher, ParamStyle};
pub use query::encode_query;
pub use template::{Template, TemplateSegment};

/// Validates if a base path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::path::is_canonical_base;
///
/// assert!(is_canonical_base("/"));
/// assert!(is_canonical_base("/app"));
///
/// assert!(!is_canonical_base(""));
/// assert!(!is_canonical_base("app"));
/// assert!(!is_canonical_base("/app/"));
/// assert!(!is_canonical_base("/app//v2"));
/// ```
pub fn is_canonical_base(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a base path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/app/` → `/app`
/// - Missing leading slash: `app` → `/app`
/// - Double slashes: `/app//v2` → `/app/v2`
/// - Backslashes: `\app\v2` → `/app/v2`
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::path::normalize_base;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_base("/app"), Cow::Borrowed("/app")));
/// assert_eq!(normalize_base("app/"), "/app");
/// assert_eq!(normalize_base(""), "/");
/// ```
pub fn normalize_base(path: &str) -> Cow<'_, str> {
    if is_canonical_base(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Prefixes a generated path with a canonical base path.
///
/// A root base leaves the path untouched.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::path::join_base;
///
/// assert_eq!(join_base("/app", "/users/1"), "/app/users/1");
/// assert_eq!(join_base("/app", "users"), "/app/users");
/// assert_eq!(join_base("/", "/users"), "/users");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    if base == "/" {
        return path.to_string();
    }

    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
