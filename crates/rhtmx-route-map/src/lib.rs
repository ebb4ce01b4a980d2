//! # RHTMX Route Map
//!
//! A single source of truth for the routes of an application. Declare every
//! route once, then generate paths and navigate by name:
//! - Static routes (`/about`)
//! - Path parameters (`/users/:id`, `/users/[id]`, `/users/{id}`)
//! - Query parameters (`/search?q=hello%20world`)
//! - Navigation callbacks (push the generated path onto a history stack)
//! - Compile-time checked route modules via [`define_routes!`]
//!
//! Paths are only generated here, never matched.
//!
//! ## Example
//!
//! ```
//! use rhtmx_route_map::{RouteArgs, RouteDescriptor, RouteMap, RouteTable};
//!
//! let table = RouteTable::new()
//!     .with_route("home", RouteDescriptor::new("/home"))
//!     .with_route("user", RouteDescriptor::new("/user/:id").with_param("id"))
//!     .with_route("search", RouteDescriptor::new("/search").with_search("q", true));
//!
//! let routes = RouteMap::new(&table);
//!
//! assert_eq!(routes.get("home").unwrap().build_static(), "/home");
//! assert_eq!(
//!     routes.path("user", &RouteArgs::new().param("id", 42)).unwrap(),
//!     "/user/42"
//! );
//! assert_eq!(
//!     routes.path("search", &RouteArgs::new().search("q", "hello world")).unwrap(),
//!     "/search?q=hello%20world"
//! );
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
mod macros;
pub mod navigate;
pub mod path;
pub mod route;
pub mod value;

pub use config::{RouteConfig, RouteMapOptions};
pub use error::{Result, RouteError};
pub use navigate::{Navigate, Navigator};
pub use path::{encode_query, CustomMatcher, ParamMatcher, ParamStyle, Template, TemplateSegment};
pub use route::{RouteDescriptor, RouteSignature, RouteTable, SearchKey};
pub use value::{ParamValue, RouteArgs};

use path::join_base;

// ============================================================================
// Path Builder
// ============================================================================

#[derive(Debug, Clone)]
enum Substitution {
    /// Built-in style: template parsed once up front
    Template(Template),
    /// Caller regex, applied to the path as it is built
    Pattern(CustomMatcher),
}

/// The generated path function for one route.
///
/// Pure: the same arguments always produce the same path.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{PathBuilder, RouteArgs, RouteDescriptor, RouteMapOptions};
///
/// let user = PathBuilder::new(
///     "user",
///     RouteDescriptor::new("/user/:id").with_param("id"),
///     &RouteMapOptions::default(),
/// );
///
/// assert_eq!(user.build(&RouteArgs::new().param("id", "abc")), "/user/abc");
/// // No arguments: the template comes back as written
/// assert_eq!(user.build(&RouteArgs::none()), "/user/:id");
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    name: String,
    descriptor: RouteDescriptor,
    substitution: Substitution,
    base_path: Option<String>,
}

impl PathBuilder {
    pub fn new(name: impl Into<String>, descriptor: RouteDescriptor, options: &RouteMapOptions) -> Self {
        let substitution = match options.matcher() {
            ParamMatcher::Style(style) => Substitution::Template(Template::parse_with_names(
                &descriptor.path,
                *style,
                descriptor.params.iter().map(String::as_str),
            )),
            ParamMatcher::Custom(custom) => Substitution::Pattern(custom.clone()),
        };

        Self {
            name: name.into(),
            descriptor,
            substitution,
            base_path: options.base_path().map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &RouteDescriptor {
        &self.descriptor
    }

    pub fn signature(&self) -> RouteSignature {
        self.descriptor.signature()
    }

    /// The path with no params or search applied.
    pub fn build_static(&self) -> String {
        self.build(&RouteArgs::none())
    }

    /// Substitutes params into the template and appends the encoded search.
    ///
    /// Params without a matching placeholder are ignored. Search is appended
    /// only when present in `args`, after a literal `?`.
    pub fn build(&self, args: &RouteArgs) -> String {
        let mut path = match args.param_entries() {
            Some(params) => self.substitute(params),
            None => self.descriptor.path.clone(),
        };

        if let Some(base) = &self.base_path {
            path = join_base(base, &path);
        }

        if let Some(search) = args.search_entries() {
            path = format!("{}?{}", path, encode_query(search));
        }

        tracing::trace!("Generated path for route '{}': {}", self.name, path);
        path
    }

    fn substitute(&self, params: &[(String, ParamValue)]) -> String {
        match &self.substitution {
            Substitution::Template(template) => template.render(params),
            Substitution::Pattern(custom) => params.iter().fold(self.descriptor.path.clone(), |acc, (name, value)| {
                let value = value.to_string();
                let replaced = custom.regex_for(name).replace(&acc, regex::NoExpand(&value)).into_owned();
                if replaced == acc {
                    tracing::trace!("No placeholder for param '{}' in route '{}'", name, self.name);
                }
                replaced
            }),
        }
    }
}

// ============================================================================
// Route Map
// ============================================================================

/// One [`PathBuilder`] per route of a [`RouteTable`].
///
/// Builders keep the table's order; lookups by name go through an index.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    builders: Vec<PathBuilder>,
    by_name: HashMap<String, usize>,
}

impl RouteMap {
    /// Builds path functions with the default `:param` placeholders.
    pub fn new(table: &RouteTable) -> Self {
        Self::with_options(table, RouteMapOptions::default())
    }

    pub fn with_options(table: &RouteTable, options: RouteMapOptions) -> Self {
        let builders: Vec<PathBuilder> = table
            .iter()
            .map(|(name, descriptor)| PathBuilder::new(name, descriptor.clone(), &options))
            .collect();

        let by_name = builders
            .iter()
            .enumerate()
            .map(|(i, builder)| (builder.name.clone(), i))
            .collect();

        tracing::debug!("Built route map with {} routes", builders.len());

        Self { builders, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&PathBuilder> {
        self.by_name.get(name).map(|&i| &self.builders[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Generates the path for a named route.
    pub fn path(&self, name: &str, args: &RouteArgs) -> Result<String> {
        self.get(name)
            .map(|builder| builder.build(args))
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.iter().map(PathBuilder::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuilder> {
        self.builders.iter()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Wraps every route with a navigation callback.
    ///
    /// ```
    /// use rhtmx_route_map::{RouteArgs, RouteDescriptor, RouteMap, RouteTable};
    /// use std::cell::RefCell;
    ///
    /// let table = RouteTable::new()
    ///     .with_route("user", RouteDescriptor::new("/user/:id").with_param("id"));
    /// let routes = RouteMap::new(&table);
    ///
    /// let history = RefCell::new(Vec::new());
    /// let navigator = routes.navigator(|path| history.borrow_mut().push(path));
    ///
    /// navigator.route("user").unwrap().go(&RouteArgs::new().param("id", 7));
    /// assert_eq!(history.borrow().as_slice(), ["/user/7"]);
    /// ```
    pub fn navigator<F: Fn(String)>(&self, go_to: F) -> Navigator<'_, F> {
        Navigator::new(self, go_to)
    }
}

impl<'a> IntoIterator for &'a RouteMap {
    type Item = &'a PathBuilder;
    type IntoIter = std::slice::Iter<'a, PathBuilder>;

    fn into_iter(self) -> Self::IntoIter {
        self.builders.iter()
    }
}
