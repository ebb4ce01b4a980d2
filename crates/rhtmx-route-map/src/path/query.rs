//! Query-string serialization.

use crate::value::ParamValue;

/// Encodes `pairs` as `key=value` entries joined with `&`.
///
/// Keys and values are percent-encoded; everything outside
/// `A-Z a-z 0-9 - _ . ~` is escaped, so a space becomes `%20`.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::{encode_query, ParamValue};
///
/// let query = encode_query(&[
///     ("q".to_string(), ParamValue::from("hello world")),
///     ("page".to_string(), ParamValue::from(2)),
/// ]);
/// assert_eq!(query, "q=hello%20world&page=2");
/// ```
pub fn encode_query(pairs: &[(String, ParamValue)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
