//! How parameter placeholders are located inside path templates.

use crate::path::Template;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

static COLON_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("colon placeholder pattern"));

static BRACKET_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Za-z0-9_]+)\]").expect("bracket placeholder pattern"));

static BRACE_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("brace placeholder pattern"));

/// Built-in placeholder syntaxes.
///
/// | Style     | Template         |
/// |-----------|------------------|
/// | `Colon`   | `/users/:id`     |
/// | `Bracket` | `/users/[id]`    |
/// | `Brace`   | `/users/{id}`    |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamStyle {
    #[default]
    Colon,
    Bracket,
    Brace,
}

impl ParamStyle {
    /// Pattern matching one placeholder; capture group 1 is the param name.
    pub fn pattern(self) -> &'static Regex {
        match self {
            ParamStyle::Colon => &COLON_PLACEHOLDER,
            ParamStyle::Bracket => &BRACKET_PLACEHOLDER,
            ParamStyle::Brace => &BRACE_PLACEHOLDER,
        }
    }

    /// The placeholder token for `name` in this style.
    ///
    /// ```
    /// use rhtmx_route_map::ParamStyle;
    ///
    /// assert_eq!(ParamStyle::Colon.token("id"), ":id");
    /// assert_eq!(ParamStyle::Bracket.token("id"), "[id]");
    /// assert_eq!(ParamStyle::Brace.token("id"), "{id}");
    /// ```
    pub fn token(self, name: &str) -> String {
        match self {
            ParamStyle::Colon => format!(":{}", name),
            ParamStyle::Bracket => format!("[{}]", name),
            ParamStyle::Brace => format!("{{{}}}", name),
        }
    }
}

/// A caller-supplied function mapping a param name to the regex that finds
/// its placeholder. Only the first match is replaced.
#[derive(Clone)]
pub struct CustomMatcher(Arc<dyn Fn(&str) -> Regex + Send + Sync>);

impl CustomMatcher {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Regex + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn regex_for(&self, name: &str) -> Regex {
        (self.0)(name)
    }
}

impl fmt::Debug for CustomMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomMatcher(..)")
    }
}

/// Strategy for locating placeholders.
///
/// Built-in styles pre-parse each template once, so a value is only ever
/// written into a real placeholder token. `Custom` runs the caller's regex
/// against the path as it is being built.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{ParamMatcher, ParamStyle};
/// use regex::Regex;
///
/// let default = ParamMatcher::default();
/// assert!(matches!(default, ParamMatcher::Style(ParamStyle::Colon)));
///
/// let custom = ParamMatcher::custom(|name| {
///     Regex::new(&format!("<{}>", regex::escape(name))).unwrap()
/// });
/// assert!(matches!(custom, ParamMatcher::Custom(_)));
/// ```
#[derive(Debug, Clone)]
pub enum ParamMatcher {
    Style(ParamStyle),
    Custom(CustomMatcher),
}

impl ParamMatcher {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Regex + Send + Sync + 'static,
    {
        ParamMatcher::Custom(CustomMatcher::new(f))
    }

    /// Whether `path` contains a placeholder for `name`.
    pub fn has_placeholder(&self, path: &str, name: &str) -> bool {
        match self {
            ParamMatcher::Style(style) => Template::parse_with_names(path, *style, [name]).has_placeholder(name),
            ParamMatcher::Custom(custom) => custom.regex_for(name).is_match(path),
        }
    }
}

impl Default for ParamMatcher {
    fn default() -> Self {
        ParamMatcher::Style(ParamStyle::Colon)
    }
}

impl From<ParamStyle> for ParamMatcher {
    fn from(style: ParamStyle) -> Self {
        ParamMatcher::Style(style)
    }
}
