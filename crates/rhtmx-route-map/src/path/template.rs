//! Pre-parsed path templates.

use crate::path::ParamStyle;
use crate::value::ParamValue;
use std::collections::HashMap;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    /// Text copied verbatim
    Literal(String),
    /// A placeholder; `token` is the text as written, kept when no value is supplied
    Placeholder { name: String, token: String },
}

/// A path template split into literal text and placeholders.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{ParamStyle, ParamValue, Template};
///
/// let template = Template::parse("/users/:id/posts/:post", ParamStyle::Colon);
/// assert_eq!(template.placeholder_names().collect::<Vec<_>>(), vec!["id", "post"]);
///
/// let path = template.render(&[("id".to_string(), ParamValue::from(7))]);
/// assert_eq!(path, "/users/7/posts/:post");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parses `path`, recognising only names the style's pattern accepts.
    pub fn parse(path: &str, style: ParamStyle) -> Self {
        Self::parse_with_names(path, style, std::iter::empty::<&str>())
    }

    /// Parses `path`, also recognising the literal token of every name in
    /// `names`, whatever characters it contains (`:user-id`, `[file.name]`).
    ///
    /// Where several tokens start at the same position the longest wins, so
    /// a declared `id` never splits `:idx`.
    pub fn parse_with_names<'n, I>(path: &str, style: ParamStyle, names: I) -> Self
    where
        I: IntoIterator<Item = &'n str>,
    {
        let declared: Vec<(&str, String)> = names
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(|name| (name, style.token(name)))
            .collect();

        let matched: HashMap<usize, (&str, usize)> = style
            .pattern()
            .captures_iter(path)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some((whole.start(), (name.as_str(), whole.len())))
            })
            .collect();

        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        while pos < path.len() {
            let rest = &path[pos..];
            let by_name = declared
                .iter()
                .filter(|(_, token)| rest.starts_with(token.as_str()))
                .map(|(name, token)| (*name, token.len()))
                .max_by_key(|(_, len)| *len);

            let found = match (matched.get(&pos).copied(), by_name) {
                (Some(pattern), Some(name)) if name.1 > pattern.1 => Some(name),
                (Some(pattern), _) => Some(pattern),
                (None, name) => name,
            };

            match found {
                Some((name, len)) => {
                    if pos > literal_start {
                        segments.push(TemplateSegment::Literal(path[literal_start..pos].to_string()));
                    }
                    segments.push(TemplateSegment::Placeholder {
                        name: name.to_string(),
                        token: path[pos..pos + len].to_string(),
                    });
                    pos += len;
                    literal_start = pos;
                }
                None => pos += rest.chars().next().map_or(1, char::len_utf8),
            }
        }

        if literal_start < path.len() {
            segments.push(TemplateSegment::Literal(path[literal_start..].to_string()));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Placeholder names in template order; repeated names appear repeatedly.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Placeholder { name, .. } => Some(name.as_str()),
            TemplateSegment::Literal(_) => None,
        })
    }

    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholder_names().any(|n| n == name)
    }

    /// Substitutes values in the order given.
    ///
    /// Each value fills the first placeholder of that name that has not been
    /// filled yet. Values without a free placeholder are dropped, and
    /// placeholders without a value keep their token.
    pub fn render(&self, params: &[(String, ParamValue)]) -> String {
        let mut filled: Vec<Option<String>> = vec![None; self.segments.len()];

        for (name, value) in params {
            let slot = self.segments.iter().enumerate().position(|(i, segment)| {
                filled[i].is_none()
                    && matches!(segment, TemplateSegment::Placeholder { name: n, .. } if n == name)
            });

            match slot {
                Some(i) => filled[i] = Some(value.to_string()),
                None => tracing::trace!("No placeholder left for param '{}'", name),
            }
        }

        self.segments
            .iter()
            .zip(filled)
            .map(|(segment, value)| match (segment, value) {
                (_, Some(value)) => value,
                (TemplateSegment::Literal(text), None) => text.clone(),
                (TemplateSegment::Placeholder { token, .. }, None) => token.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, ParamValue)]) -> Vec<(String, ParamValue)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_parse_static() {
        let template = Template::parse("/about", ParamStyle::Colon);
        assert_eq!(
            template.segments(),
            &[TemplateSegment::Literal("/about".to_string())]
        );
    }

    #[test]
    fn test_parse_empty() {
        let template = Template::parse("", ParamStyle::Colon);
        assert!(template.segments().is_empty());
        assert_eq!(template.render(&[]), "");
    }

    #[test]
    fn test_parse_mixed() {
        let template = Template::parse("/users/:id/edit", ParamStyle::Colon);
        assert_eq!(
            template.segments(),
            &[
                TemplateSegment::Literal("/users/".to_string()),
                TemplateSegment::Placeholder {
                    name: "id".to_string(),
                    token: ":id".to_string()
                },
                TemplateSegment::Literal("/edit".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_fills_first_free_placeholder() {
        let template = Template::parse("/compare/:id/:id", ParamStyle::Colon);

        let once = template.render(&params(&[("id", 1.into())]));
        assert_eq!(once, "/compare/1/:id");

        let twice = template.render(&params(&[("id", 1.into()), ("id", 2.into())]));
        assert_eq!(twice, "/compare/1/2");
    }

    #[test]
    fn test_render_does_not_touch_longer_names() {
        let template = Template::parse("/items/:idx/:id", ParamStyle::Colon);
        let path = template.render(&params(&[("id", "a".into())]));
        assert_eq!(path, "/items/:idx/a");
    }

    #[test]
    fn test_render_ignores_unknown_params() {
        let template = Template::parse("/users/:id", ParamStyle::Colon);
        let path = template.render(&params(&[("nope", "x".into())]));
        assert_eq!(path, "/users/:id");
    }

    #[test]
    fn test_render_values_are_not_reparsed() {
        let template = Template::parse("/a/:first/:second", ParamStyle::Colon);
        let path = template.render(&params(&[("first", ":second".into()), ("second", "b".into())]));
        assert_eq!(path, "/a/:second/b");
    }

    #[test]
    fn test_bracket_and_brace_styles() {
        let bracket = Template::parse("/users/[id]", ParamStyle::Bracket);
        assert_eq!(bracket.render(&params(&[("id", 5.into())])), "/users/5");

        let brace = Template::parse("/users/{id}", ParamStyle::Brace);
        assert_eq!(brace.render(&params(&[("id", 5.into())])), "/users/5");
    }

    #[test]
    fn test_declared_names_outside_pattern_charset() {
        let template = Template::parse_with_names("/user/:user-id/:file.name", ParamStyle::Colon, ["user-id", "file.name"]);
        assert_eq!(
            template.placeholder_names().collect::<Vec<_>>(),
            vec!["user-id", "file.name"]
        );

        let undeclared = Template::parse("/user/:user-id", ParamStyle::Colon);
        assert_eq!(undeclared.placeholder_names().collect::<Vec<_>>(), vec!["user"]);
    }

    #[test]
    fn test_longest_token_wins() {
        let template = Template::parse_with_names("/items/:idx/:id", ParamStyle::Colon, ["id"]);
        assert_eq!(template.placeholder_names().collect::<Vec<_>>(), vec!["idx", "id"]);

        let template = Template::parse_with_names("/a/:user-id", ParamStyle::Colon, ["user", "user-id"]);
        assert_eq!(template.render(&params(&[("user", 1.into()), ("user-id", 2.into())])), "/a/2");
    }

    #[test]
    fn test_declared_names_in_bracket_style() {
        let template = Template::parse_with_names("/f/[file.name]", ParamStyle::Bracket, ["file.name"]);
        assert_eq!(template.render(&params(&[("file.name", "x".into())])), "/f/x");
    }
}
