//! Route descriptors: a path template plus the params and query keys it takes.

use serde::{Deserialize, Serialize};

/// A declared query-string key.
///
/// `required` is documentation for callers and the typed layer; it is never
/// enforced when a path is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey {
    pub name: String,
    pub required: bool,
}

/// Which arguments a route's generated function takes.
///
/// Derived from whether the descriptor declares params and/or search keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSignature {
    /// `() -> path`
    NoArgs,
    /// `(params) -> path`
    Params,
    /// `(search?) -> path`
    Search,
    /// `(params, search?) -> path`
    ParamsAndSearch,
}

impl RouteSignature {
    pub fn takes_params(self) -> bool {
        matches!(self, RouteSignature::Params | RouteSignature::ParamsAndSearch)
    }

    pub fn takes_search(self) -> bool {
        matches!(self, RouteSignature::Search | RouteSignature::ParamsAndSearch)
    }
}

/// Declarative description of a single route.
///
/// In TOML:
///
/// ```toml
/// [routes.user]
/// path = "/user/:id"
/// params = ["id"]
/// search = { tab = false }
/// ```
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{RouteDescriptor, RouteSignature};
///
/// let route = RouteDescriptor::new("/user/:id")
///     .with_param("id")
///     .with_search("tab", false);
///
/// assert_eq!(route.signature(), RouteSignature::ParamsAndSearch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Path template like "/user/:id"
    pub path: String,

    /// Declared parameter names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,

    /// Declared query keys, in declaration order
    #[serde(default, with = "search_keys", skip_serializing_if = "Vec::is_empty")]
    pub search: Vec<SearchKey>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            search: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>) -> Self {
        self.params.push(name.into());
        self
    }

    pub fn with_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_search(mut self, name: impl Into<String>, required: bool) -> Self {
        self.search.push(SearchKey {
            name: name.into(),
            required,
        });
        self
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn signature(&self) -> RouteSignature {
        match (self.has_params(), self.has_search()) {
            (false, false) => RouteSignature::NoArgs,
            (true, false) => RouteSignature::Params,
            (false, true) => RouteSignature::Search,
            (true, true) => RouteSignature::ParamsAndSearch,
        }
    }

    pub fn required_search_keys(&self) -> impl Iterator<Item = &str> {
        self.search
            .iter()
            .filter(|key| key.required)
            .map(|key| key.name.as_str())
    }
}

/// (De)serializes search keys as an ordered `name -> required` table.
mod search_keys {
    use super::SearchKey;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(keys: &[SearchKey], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            map.serialize_entry(&key.name, &key.required)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SearchKey>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SearchKeysVisitor;

        impl<'de> Visitor<'de> for SearchKeysVisitor {
            type Value = Vec<SearchKey>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of query keys to required flags")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut keys = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, required)) = access.next_entry::<String, bool>()? {
                    keys.push(SearchKey { name, required });
                }
                Ok(keys)
            }
        }

        deserializer.deserialize_map(SearchKeysVisitor)
    }
}
