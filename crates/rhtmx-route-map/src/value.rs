// File: src/value.rs
// Purpose: Parameter values and call-time route arguments

use std::fmt;

/// A value substituted into a path placeholder or a query string.
///
/// Routes accept strings or numbers. Numbers are stringified the way a
/// browser would render them in a URL: `42.0` becomes `42`, `1e21` becomes
/// `1e+21`, and non-finite floats become `NaN`, `Infinity` or `-Infinity`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::UInt(n) => write!(f, "{}", n),
            ParamValue::Float(n) if n.is_nan() => f.write_str("NaN"),
            ParamValue::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 renders as "0"
            ParamValue::Float(n) if *n == 0.0 => f.write_str("0"),
            ParamValue::Float(n) => write_number(f, *n),
        }
    }
}

/// Writes a finite, non-zero float the way ECMAScript's `Number::toString`
/// does: shortest round-trip digits, plain notation for decimal exponents in
/// `-6..21`, exponent notation (`1e+21`, `1.5e-7`) outside it.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n < 0.0 {
        f.write_str("-")?;
    }

    // `{:e}` yields the shortest digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits = mantissa.replace('.', "");

    // Value is 0.digits * 10^point
    let k = digits.len() as i32;
    let point = exponent + 1;

    if k <= point && point <= 21 {
        write!(f, "{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{}e{}{}", first, sign, exponent.abs())
        } else {
            write!(f, "{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::Text(s.clone())
    }
}

impl From<char> for ParamValue {
    fn from(c: char) -> Self {
        ParamValue::Text(c.to_string())
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(n: $ty) -> Self {
                    ParamValue::$variant(n as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

impl From<f32> for ParamValue {
    fn from(n: f32) -> Self {
        ParamValue::Float(f64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Float(n)
    }
}

/// Arguments for a single call of a generated path function.
///
/// `params` fill path placeholders, `search` becomes the query string. Both
/// keep insertion order, which is the order substitutions and query entries
/// are applied in. A `None` search means "no query string at all"; an empty
/// but present search still appends a bare `?`.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::RouteArgs;
///
/// let args = RouteArgs::new()
///     .param("id", 42)
///     .search("tab", "posts");
///
/// assert_eq!(args.param_entries().map(|p| p.len()), Some(1));
/// assert_eq!(args.search_entries().map(|s| s.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteArgs {
    params: Option<Vec<(String, ParamValue)>>,
    search: Option<Vec<(String, ParamValue)>>,
}

impl RouteArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments for routes that take none.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a path parameter value.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Adds path parameter values from an iterator, keeping its order.
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params
            .get_or_insert_with(Vec::new)
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds a query parameter.
    pub fn search(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.search
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Adds query parameters from an iterator. The search part is marked
    /// present even when the iterator is empty.
    pub fn with_search<I, K, V>(mut self, search: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.search
            .get_or_insert_with(Vec::new)
            .extend(search.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds the `Some` entries of an iterator as query parameters. When every
    /// entry is `None` the search part is left untouched.
    pub fn with_optional_search<I, K>(self, search: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<ParamValue>)>,
        K: Into<String>,
    {
        let present: Vec<(K, ParamValue)> = search
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();

        if present.is_empty() {
            self
        } else {
            self.with_search(present)
        }
    }

    pub fn param_entries(&self) -> Option<&[(String, ParamValue)]> {
        self.params.as_deref()
    }

    pub fn search_entries(&self) -> Option<&[(String, ParamValue)]> {
        self.search.as_deref()
    }
}
