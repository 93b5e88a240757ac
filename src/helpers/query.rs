//! URL query-parameter helpers.
//!
//! Query strings are decoded as `application/x-www-form-urlencoded`: `+` is a
//! space and percent escapes are decoded, with invalid UTF-8 replaced.

use serde_json::{Map, Value};
use tracing::info;

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Decoded `(key, value)` pairs in the order they appear.
///
/// A leading `?` is ignored, as are empty segments. A segment without `=` has
/// an empty value.
#[must_use]
pub fn query_rows(query: &str) -> Vec<(String, String)> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Parse a query string into a JSON object of string values.
///
/// Keys keep the order of their first appearance. When a key repeats, the
/// last value wins.
///
/// ```
/// use frame_budget::helpers::parse_query;
///
/// let params = parse_query("?page=2&q=rust+lang&q=frames");
/// assert_eq!(params["page"], "2");
/// assert_eq!(params["q"], "frames");
/// ```
#[must_use]
pub fn parse_query(query: &str) -> Map<String, Value> {
    query_rows(query)
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Parse a query string and drop the named keys.
#[must_use]
pub fn delete_query_keys(query: &str, keys: &[&str]) -> Map<String, Value> {
    let mut params = parse_query(query);
    for key in keys {
        params.shift_remove(*key);
    }
    params
}

/// Log every parameter of a query string, one record per key, in query order.
///
/// Returns the number of records emitted.
pub fn log_query(query: &str) -> usize {
    let params = parse_query(query);
    for (key, value) in &params {
        let value = value.as_str().unwrap_or_default();
        info!(key = %key, value = %value, "query parameter");
    }
    params.len()
}
