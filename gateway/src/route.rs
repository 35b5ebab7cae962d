//! Static prefix routing for the gateways.
//!
//! A [`Route`] owns a path prefix such as `/api/filtros-citas` and the base URL
//! of the service behind it. Requests are forwarded to
//! `<upstream>/api<remainder>`, where the remainder is whatever followed the
//! prefix in the inbound path.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub prefix: String,
    pub upstream: Url,
}

impl Route {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, upstream: Url) -> Self {
        let prefix: String = prefix.into();

        Self {
            name: name.into(),
            prefix: prefix.trim_end_matches('/').to_string(),
            upstream,
        }
    }

    /// Remainder of `path` after this prefix, if the prefix matches on a
    /// segment boundary.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        let remainder = path.strip_prefix(&self.prefix)?;

        if remainder.is_empty() || remainder.starts_with('/') {
            Some(remainder)
        } else {
            None
        }
    }

    pub fn target(&self, remainder: &str, query: Option<&str>) -> String {
        let base = self.upstream.as_str().trim_end_matches('/');

        match query {
            Some(query) if !query.is_empty() => format!("{base}/api{remainder}?{query}"),
            _ => format!("{base}/api{remainder}"),
        }
    }
}

/// Routes ordered longest prefix first.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(mut routes: Vec<Route>) -> Self {
        routes.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve<'a>(&self, path: &'a str) -> Option<(&Route, &'a str)> {
        self.routes
            .iter()
            .find_map(|route| route.strip(path).map(|remainder| (route, remainder)))
    }
}
