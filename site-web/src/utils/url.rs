//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL (`window.location.search`).
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    parse_query_param(&search, key)
}

/// Find `key` in a query string, with or without the leading `?`.
///
/// A bare key (`?debug`) yields an empty string. Values are URL-decoded; a
/// value that fails to decode is returned as written.
pub fn parse_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        (param_key == key).then(|| {
            urlencoding::decode(param_value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| param_value.to_string())
        })
    })
}
