//! Route pattern helpers

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::pagination::Params;

lazy_static! {
    static ref ROUTE_TOKEN: Regex = Regex::new(r"\[([^\]]+)\]").unwrap();
}

/// Substitute `[key]` tokens in a route pattern
///
/// Each token takes its value from `overrides`, then from `ambient`. Empty
/// values count as missing. Tokens with no value are left in place.
///
/// # Examples
/// ```
/// use quietparty::helpers::generate_route;
/// use quietparty::pagination::Params;
///
/// let mut overrides = Params::new();
/// overrides.insert("page".to_string(), "3".to_string());
/// let ambient = Params::new();
///
/// assert_eq!(generate_route("/blog/[page]/", &overrides, &ambient), "/blog/3/");
/// assert_eq!(generate_route("/[missing]/", &overrides, &ambient), "/[missing]/");
/// ```
pub fn generate_route(pattern: &str, overrides: &Params, ambient: &Params) -> String {
    ROUTE_TOKEN
        .replace_all(pattern, |caps: &Captures| {
            let key = &caps[1];
            let value = overrides
                .get(key)
                .filter(|v| !v.is_empty())
                .or_else(|| ambient.get(key).filter(|v| !v.is_empty()));

            match value {
                Some(value) => value.clone(),
                None => {
                    tracing::warn!("Unresolved route parameter [{}] in {}", key, pattern);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Route parameters referenced by a pattern, in order of appearance
pub fn route_keys(pattern: &str) -> Vec<String> {
    ROUTE_TOKEN
        .captures_iter(pattern)
        .map(|caps| caps[1].to_string())
        .collect()
}
