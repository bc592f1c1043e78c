//! Query string building
//!
//! Navigation links on the dashboard carry state (selected account, page)
//! in the query string. [`form_url_query`] replaces one key and rebuilds the
//! link with keys in a stable, sorted order.

use std::collections::BTreeMap;

/// Parsed query: each key with its values in order of appearance
///
/// A `None` value is a bare key with no `=`.
type QueryMap = BTreeMap<String, Vec<Option<String>>>;

/// Set `key` to `value` in `params` and return `pathname?query`
///
/// Existing values of `key` are replaced. Keys are emitted in ascending
/// order, bare keys without a value are dropped, and keys and values are
/// percent-encoded. The `?` is omitted when nothing remains.
pub fn form_url_query(pathname: &str, params: &str, key: &str, value: &str) -> String {
    let mut query = parse_query(params);
    query.insert(key.to_string(), vec![Some(value.to_string())]);

    let pairs: Vec<String> = query
        .iter()
        .flat_map(|(k, values)| {
            values.iter().flatten().map(move |v| {
                format!("{}={}", urlencoding::encode(k), urlencoding::encode(v))
            })
        })
        .collect();

    if pairs.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, pairs.join("&"))
    }
}

/// Parse `a=1&b=2`, with or without a leading `?`
fn parse_query(params: &str) -> QueryMap {
    let mut query = QueryMap::new();
    let trimmed = params.trim().trim_start_matches(['?', '#', '&']);

    for part in trimmed.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = match part.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (part, None),
        };
        let key = decode_component(raw_key);
        if key.is_empty() {
            continue;
        }
        query
            .entry(key)
            .or_default()
            .push(raw_value.map(decode_component));
    }

    query
}

/// Decode `+` and percent escapes, keeping the raw text if it is not UTF-8
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
