//! Ordered route tables.

use crate::error::{Result, RouteError};
use crate::path::{ParamMatcher, Template};
use crate::route::RouteDescriptor;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Mapping from unique route name to [`RouteDescriptor`], in insertion order.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{RouteDescriptor, RouteTable};
///
/// let table = RouteTable::new()
///     .with_route("home", RouteDescriptor::new("/home"))
///     .with_route("user", RouteDescriptor::new("/user/:id").with_param("id"));
///
/// assert_eq!(table.names().collect::<Vec<_>>(), vec!["home", "user"]);
/// assert_eq!(table.get("user").unwrap().path, "/user/:id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<(String, RouteDescriptor)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route (builder style). An existing route of the same name is replaced.
    pub fn with_route(mut self, name: impl Into<String>, route: RouteDescriptor) -> Self {
        self.insert(name, route);
        self
    }

    /// Inserts a route, returning the descriptor it replaced, if any.
    ///
    /// A replaced route keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, route: RouteDescriptor) -> Option<RouteDescriptor> {
        let name = name.into();
        match self.routes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, route)),
            None => {
                self.routes.push((name, route));
                None
            }
        }
    }

    /// Inserts a route, refusing names that are already taken.
    pub fn try_insert(&mut self, name: impl Into<String>, route: RouteDescriptor) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RouteError::DuplicateRoute(name));
        }
        self.routes.push((name, route));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, route)| route)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDescriptor)> {
        self.routes.iter().map(|(name, route)| (name.as_str(), route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Parses a JSON object of route name to descriptor.
    ///
    /// ```
    /// use rhtmx_route_map::RouteTable;
    ///
    /// let table = RouteTable::from_json_str(r#"{
    ///     "home": { "path": "/home" },
    ///     "search": { "path": "/search", "search": { "q": true } }
    /// }"#).unwrap();
    ///
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses the `[routes]` section of a TOML route config.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        crate::config::RouteConfig::from_toml_str(toml).map(|config| config.routes)
    }

    /// Checks that every placeholder is declared and every declared param has
    /// a placeholder. Stops at the first problem.
    ///
    /// Nothing calls this implicitly; generating paths never validates.
    /// Undeclared placeholders can only be detected for built-in styles.
    ///
    /// ```
    /// use rhtmx_route_map::{ParamMatcher, RouteDescriptor, RouteError, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route("user", RouteDescriptor::new("/user/:id"));
    ///
    /// let err = table.validate(&ParamMatcher::default()).unwrap_err();
    /// assert!(matches!(err, RouteError::UndeclaredPlaceholder { .. }));
    /// ```
    pub fn validate(&self, matcher: &ParamMatcher) -> Result<()> {
        for (name, route) in self.iter() {
            if let ParamMatcher::Style(style) = matcher {
                let template =
                    Template::parse_with_names(&route.path, *style, route.params.iter().map(String::as_str));
                let undeclared = template
                    .placeholder_names()
                    .find(|placeholder| !route.params.iter().any(|p| p == placeholder))
                    .map(str::to_string);

                if let Some(param) = undeclared {
                    return Err(RouteError::UndeclaredPlaceholder {
                        route: name.to_string(),
                        param,
                    });
                }
            }

            if let Some(param) = route
                .params
                .iter()
                .find(|param| !matcher.has_placeholder(&route.path, param))
            {
                return Err(RouteError::MissingPlaceholder {
                    route: name.to_string(),
                    param: param.clone(),
                });
            }
        }

        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, RouteDescriptor)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (K, RouteDescriptor)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for (name, route) in iter {
            table.insert(name, route);
        }
        table
    }
}

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, route) in self.iter() {
            map.serialize_entry(name, route)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RouteTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RouteTableVisitor;

        impl<'de> Visitor<'de> for RouteTableVisitor {
            type Value = RouteTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of route names to route descriptors")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = RouteTable::new();
                while let Some((name, route)) = access.next_entry::<String, RouteDescriptor>()? {
                    table.try_insert(name, route).map_err(de::Error::custom)?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(RouteTableVisitor)
    }
}
