//! Request URL construction.
//!
//! The OpenAgenda endpoints take a long tail of optional filters. Callers
//! collect them into a [`QueryPairs`] and [`build_url`] serializes the
//! non-empty ones, so an unset filter never reaches the wire.

use url::Url;

use crate::error::FetchResult;

/// Query parameters awaiting serialization.
///
/// Pushing an empty value is a no-op: the parameter is omitted from the
/// final query string entirely, matching how the API treats absent filters.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Empty values are dropped.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.pairs.push((key, value));
        }
    }

    /// Add a parameter if present. `None` and empty values are dropped.
    pub fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(v) = value {
            self.push(key, v.to_string());
        }
    }

    /// Add a `1`-valued flag parameter when `set` is true.
    pub fn push_flag(&mut self, key: &'static str, set: bool) {
        if set {
            self.push(key, "1");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Build a fully qualified request URL.
///
/// Appends `path_suffix` (if any) to `base`, then serializes `params` with
/// standard form encoding. With no surviving parameters the result is the
/// bare resource URL, with no trailing `?`.
pub fn build_url(base: &str, path_suffix: Option<&str>, params: &QueryPairs) -> FetchResult<Url> {
    let resource = match path_suffix {
        Some(suffix) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            suffix.trim_start_matches('/')
        ),
        None => base.to_string(),
    };

    let mut url = Url::parse(&resource)?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_yield_bare_url() {
        let url = build_url("https://api.openagenda.com/v2/agendas", None, &QueryPairs::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.openagenda.com/v2/agendas");
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let mut params = QueryPairs::new();
        params.push("key", "abc");
        params.push("search", "");
        params.push_opt("slug", None::<String>);
        let url = build_url("https://api.openagenda.com/v2/agendas", None, &params).unwrap();
        assert_eq!(url.query(), Some("key=abc"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut params = QueryPairs::new();
        params.push("search", "fête de la musique");
        let url = build_url("https://api.openagenda.com/v2/agendas", None, &params).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("f%C3%AAte"));
        assert!(!query.contains(' '));
    }

    #[test]
    fn test_each_key_appears_once() {
        let mut params = QueryPairs::new();
        params.push("key", "abc");
        params.push("size", 10.to_string());
        params.push("sort", "createdAt.desc");
        let url = build_url("https://api.openagenda.com/v2/agendas", None, &params).unwrap();
        let query = url.query().unwrap();
        for key in ["key=", "size=", "sort="] {
            assert_eq!(query.matches(key).count(), 1);
        }
    }

    #[test]
    fn test_path_suffix_is_appended() {
        let mut params = QueryPairs::new();
        params.push("key", "abc");
        let url = build_url(
            "https://api.openagenda.com/v2/agendas/",
            Some("123/events"),
            &params,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openagenda.com/v2/agendas/123/events?key=abc"
        );
    }

    #[test]
    fn test_flag_param() {
        let mut params = QueryPairs::new();
        params.push_flag("official", true);
        params.push_flag("detailed", false);
        let url = build_url("https://api.openagenda.com/v2/agendas", None, &params).unwrap();
        assert_eq!(url.query(), Some("official=1"));
    }
}
