// File: src/config.rs
// Purpose: Route map options and route config parsing from TOML

use crate::error::Result;
use crate::path::{normalize_base, ParamMatcher, ParamStyle};
use crate::route::RouteTable;
use crate::RouteMap;
use regex::Regex;
use serde::Deserialize;

/// Options controlling how a [`RouteMap`] generates paths.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{ParamStyle, RouteMapOptions};
///
/// let options = RouteMapOptions::new()
///     .with_param_style(ParamStyle::Bracket)
///     .with_base_path("app/");
///
/// assert_eq!(options.base_path(), Some("/app"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "OptionsConfig")]
pub struct RouteMapOptions {
    matcher: ParamMatcher,
    base_path: Option<String>,
}

impl RouteMapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param_style(mut self, style: ParamStyle) -> Self {
        self.matcher = ParamMatcher::Style(style);
        self
    }

    /// Locates placeholders with a caller-built regex instead of a built-in style.
    ///
    /// The regex returned for a param name is matched against the path being
    /// built and only its first match is replaced.
    pub fn with_param_matcher<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Regex + Send + Sync + 'static,
    {
        self.matcher = ParamMatcher::custom(f);
        self
    }

    pub fn with_matcher(mut self, matcher: ParamMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Prefix for every generated path. `/` (or an empty string) means no prefix.
    pub fn with_base_path(mut self, base_path: impl AsRef<str>) -> Self {
        let normalized = normalize_base(base_path.as_ref());
        self.base_path = (normalized != "/").then(|| normalized.into_owned());
        self
    }

    pub fn matcher(&self) -> &ParamMatcher {
        &self.matcher
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }
}

/// `[options]` as written in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
struct OptionsConfig {
    #[serde(default)]
    param_style: ParamStyle,

    #[serde(default)]
    base_path: Option<String>,
}

impl From<OptionsConfig> for RouteMapOptions {
    fn from(config: OptionsConfig) -> Self {
        let options = RouteMapOptions::new().with_param_style(config.param_style);
        match config.base_path {
            Some(base_path) => options.with_base_path(base_path),
            None => options,
        }
    }
}

/// A route table together with the options to build it with.
///
/// ```toml
/// [options]
/// param_style = "colon"
/// base_path = "/app"
///
/// [routes.home]
/// path = "/home"
///
/// [routes.user]
/// path = "/user/:id"
/// params = ["id"]
/// search = { tab = false }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub options: RouteMapOptions,

    #[serde(default)]
    pub routes: RouteTable,
}

impl RouteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RouteConfig = toml::from_str(content)?;
        tracing::debug!("Loaded route config with {} routes", config.routes.len());
        Ok(config)
    }

    pub fn build(&self) -> RouteMap {
        RouteMap::with_options(&self.routes, self.options.clone())
    }
}
