//! URL query parameter access
//!
//! Reads configuration overrides directly from `window.location.search`.
//! The parser itself is plain string work so it can be tested natively.

/// Find `key` in a raw query string (with or without the leading `?`).
/// A key present without a value resolves to the empty string.
pub fn parse_query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return None;
    }

    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((k, v)) if k == key => {
                return Some(
                    urlencoding::decode(v)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| v.to_string()),
                );
            }
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }
    None
}

/// Read a query parameter from the current page URL.
pub fn get_query_param(key: &str) -> Option<String> {
    parse_query_param(&current_search()?, key)
}

#[cfg(target_arch = "wasm32")]
fn current_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

// Off-browser builds (unit tests) have no location to read.
#[cfg(not(target_arch = "wasm32"))]
fn current_search() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_key_anywhere_in_the_query() {
        assert_eq!(
            parse_query_param("?a=1&api_key=abc123&b=2", "api_key").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            parse_query_param("api_key=abc123", "api_key").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn test_decodes_percent_encoding() {
        assert_eq!(
            parse_query_param("?note=hello%20world", "note").as_deref(),
            Some("hello world")
        );
    }

    #[test]
    fn test_missing_and_valueless_keys() {
        assert_eq!(parse_query_param("?a=1", "missing"), None);
        assert_eq!(parse_query_param("", "a"), None);
        assert_eq!(parse_query_param("?flag&a=1", "flag").as_deref(), Some(""));
    }
}
