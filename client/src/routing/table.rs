//! Route table and path resolution.
//!
//! DESIGN
//! ======
//! Routes are tried in declaration order and the first structural match
//! wins. Two guarantees hold for every valid table, whatever that order:
//! the root path resolves to `home`, and every path resolves somewhere
//! (falling back to `not-found` when nothing matches). When a catch-all
//! swallows the root, the resolution carries a replace-style correction so
//! history is rewritten in place rather than gaining an entry.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;
use std::fmt;

use super::pattern::{RoutePattern, is_root_path};
use crate::seo::{self, SeoMetadata};

/// Named routes of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Showcase,
    NotFound,
}

impl RouteName {
    pub const ALL: [Self; 3] = [Self::Home, Self::Showcase, Self::NotFound];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Showcase => "showcase",
            Self::NotFound => "not-found",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared route. The view is looked up by name at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDefinition {
    pub name: RouteName,
    pub pattern: RoutePattern,
    pub meta: Option<SeoMetadata>,
}

impl RouteDefinition {
    pub fn new(name: RouteName, pattern: RoutePattern) -> Self {
        Self { name, pattern, meta: None }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: SeoMetadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Declared record, or the site defaults.
    pub fn metadata(&self) -> SeoMetadata {
        self.meta.clone().unwrap_or_else(SeoMetadata::site_default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route {0} is declared more than once")]
    Duplicate(RouteName),
    #[error("route table has no {0} route")]
    Missing(RouteName),
}

/// How a corrective navigation touches browser history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// Follow-up navigation the router must perform after resolving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Correction {
    pub path: String,
    pub history: HistoryMode,
}

impl Correction {
    pub fn replace(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            history: HistoryMode::Replace,
        }
    }

    pub fn replaces(&self) -> bool {
        self.history == HistoryMode::Replace
    }
}

/// Result of resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub name: RouteName,
    pub meta: SeoMetadata,
    /// Text captured by a wildcard segment.
    pub remainder: Option<String>,
    pub correction: Option<Correction>,
}

/// Ordered, validated route declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    home: usize,
    not_found: usize,
}

impl RouteTable {
    /// Validate `routes`: unique names, with `home` and `not-found` present.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.name) {
                return Err(RouteTableError::Duplicate(route.name));
            }
        }
        let position = |name| {
            routes
                .iter()
                .position(|route| route.name == name)
                .ok_or(RouteTableError::Missing(name))
        };
        let home = position(RouteName::Home)?;
        let not_found = position(RouteName::NotFound)?;
        Ok(Self { routes, home, not_found })
    }

    /// The site's routes: `/`, `/showcase` and the `/*path` catch-all.
    pub fn site() -> Self {
        let declare = |name, pattern| RouteDefinition::new(name, pattern).with_meta(seo::for_route(name));
        Self {
            routes: vec![
                declare(RouteName::Home, RoutePattern::root()),
                declare(RouteName::Showcase, RoutePattern::literal("showcase")),
                declare(RouteName::NotFound, RoutePattern::catch_all("path")),
            ],
            home: 0,
            not_found: 2,
        }
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn get(&self, name: RouteName) -> Option<&RouteDefinition> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolve a request path. Query strings and fragments are ignored.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = strip_suffixes(path);
        let matched = self
            .routes
            .iter()
            .find_map(|route| route.pattern.matches(path).map(|m| (route, m)));
        match matched {
            Some((route, m)) if !(route.pattern.is_catch_all() && is_root_path(path)) => {
                Self::resolution(route, m.wildcard.map(|(_, rest)| rest), None)
            }
            _ if is_root_path(path) => {
                let home = &self.routes[self.home];
                let target = home.pattern.static_path().unwrap_or_else(|| "/".to_owned());
                Self::resolution(home, None, Some(Correction::replace(&target)))
            }
            _ => Self::resolution(
                &self.routes[self.not_found],
                Some(path.trim_start_matches('/').to_owned()),
                None,
            ),
        }
    }

    fn resolution(route: &RouteDefinition, remainder: Option<String>, correction: Option<Correction>) -> Resolution {
        Resolution {
            name: route.name,
            meta: route.metadata(),
            remainder,
            correction,
        }
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
