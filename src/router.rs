//! Static route table
//!
//! Maps literal URL paths to named views. Resolution is an exact string
//! lookup; there is no prefix, pattern or parameter matching. A table is
//! assembled with [`RouteTableBuilder`], validated once in
//! [`RouteTableBuilder::build`], and is read-only from then on.

use std::collections::HashMap;

/// Structured error type for route table operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("Duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("Invalid route path '{0}': must be non-empty and start with '/'")]
    InvalidPath(String),

    #[error("Route for path '{0}' has an empty name")]
    EmptyName(String),

    #[error("No route matches path '{0}'")]
    PathNotFound(String),

    #[error("Route '{0}' not found")]
    NameNotFound(String),
}

impl RouteError {
    /// True for errors raised while building a table.
    ///
    /// These are fatal at startup, while lookup misses are recoverable.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RouteError::DuplicatePath(_)
                | RouteError::DuplicateName(_)
                | RouteError::InvalidPath(_)
                | RouteError::EmptyName(_)
        )
    }
}

/// Type alias for route table results
pub type RouteResult<T> = Result<T, RouteError>;

/// A binding between a URL path, a symbolic name and a view key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pub path: String,
    pub name: String,
    pub view: V,
}

/// Collects routes in order before validation
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<V> {
    entries: Vec<Route<V>>,
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a route
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.entries.push(Route {
            path: path.into(),
            name: name.into(),
            view,
        });
        self
    }

    /// Validate the collected routes and freeze them into a table
    pub fn build(self) -> RouteResult<RouteTable<V>> {
        let mut by_path = HashMap::with_capacity(self.entries.len());
        let mut by_name = HashMap::with_capacity(self.entries.len());

        for (index, route) in self.entries.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.clone()));
            }
            if route.name.is_empty() {
                return Err(RouteError::EmptyName(route.path.clone()));
            }
            if by_path.insert(route.path.clone(), index).is_some() {
                return Err(RouteError::DuplicatePath(route.path.clone()));
            }
            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }

        tracing::debug!("Built route table with {} routes", self.entries.len());

        Ok(RouteTable {
            routes: self.entries,
            by_path,
            by_name,
        })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable route table, keyed by path and by name
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Build a table from ordered `(path, name, view)` triples
    pub fn from_entries<P, N, I>(entries: I) -> RouteResult<Self>
    where
        P: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (P, N, V)>,
    {
        entries
            .into_iter()
            .fold(Self::builder(), |builder, (path, name, view)| {
                builder.route(path, name, view)
            })
            .build()
    }

    /// Resolve a requested path to its route
    pub fn resolve(&self, path: &str) -> RouteResult<&Route<V>> {
        self.by_path
            .get(path)
            .map(|&index| &self.routes[index])
            .ok_or_else(|| RouteError::PathNotFound(path.to_string()))
    }

    /// Look up the path bound to a route name, for link generation
    pub fn resolve_by_name(&self, name: &str) -> RouteResult<&str> {
        self.route_by_name(name).map(|route| route.path.as_str())
    }

    pub fn route_by_name(&self, name: &str) -> RouteResult<&Route<V>> {
        self.by_name
            .get(name)
            .map(|&index| &self.routes[index])
            .ok_or_else(|| RouteError::NameNotFound(name.to_string()))
    }

    /// Routes in the order they were registered
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RouteTable<u8> {
        RouteTable::builder()
            .route("/", "Home", 0)
            .route("/docs", "Docs", 1)
            .route("/docs/intro", "Intro", 2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_exact_path() {
        let table = sample_table();

        let route = table.resolve("/docs").unwrap();
        assert_eq!(route.name, "Docs");
        assert_eq!(route.view, 1);
    }

    #[test]
    fn test_resolve_by_name() {
        let table = sample_table();

        assert_eq!(table.resolve_by_name("Intro").unwrap(), "/docs/intro");
        assert_eq!(table.route_by_name("Home").unwrap().view, 0);
    }

    #[test]
    fn test_resolve_has_no_fuzzy_matching() {
        let table = sample_table();

        for path in ["/does/not/exist", "/docs/", "/doc", "/docs/intro/more", "", "/DOCS"] {
            let err = table.resolve(path).unwrap_err();
            assert_eq!(err, RouteError::PathNotFound(path.to_string()));
            assert!(!err.is_configuration());
        }
    }

    #[test]
    fn test_unknown_name() {
        let table = sample_table();

        let err = table.resolve_by_name("Missing").unwrap_err();
        assert_eq!(err, RouteError::NameNotFound("Missing".to_string()));
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::builder()
            .route("/a", "A", ())
            .route("/a", "B", ())
            .build();

        let err = result.unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/a".to_string()));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = RouteTable::builder()
            .route("/a", "Same", ())
            .route("/b", "Same", ())
            .build();

        let err = result.unwrap_err();
        assert_eq!(err, RouteError::DuplicateName("Same".to_string()));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_path_and_empty_name_rejected() {
        let relative = RouteTable::builder().route("docs", "Docs", ()).build();
        assert_eq!(
            relative.unwrap_err(),
            RouteError::InvalidPath("docs".to_string())
        );

        let empty = RouteTable::builder().route("", "Docs", ()).build();
        assert_eq!(empty.unwrap_err(), RouteError::InvalidPath(String::new()));

        let unnamed = RouteTable::builder().route("/docs", "", ()).build();
        assert_eq!(
            unnamed.unwrap_err(),
            RouteError::EmptyName("/docs".to_string())
        );
    }

    #[test]
    fn test_from_entries_keeps_order() {
        let table =
            RouteTable::from_entries([("/z", "Z", 'z'), ("/a", "A", 'a'), ("/m", "M", 'm')])
                .unwrap();

        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.resolve("/m").unwrap().view, 'm');
    }

    #[test]
    fn test_empty_table() {
        let table: RouteTable<()> = RouteTable::builder().build().unwrap();

        assert!(table.is_empty());
        assert!(table.resolve("/").is_err());
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let table = sample_table();

        let first = table.resolve("/").unwrap().clone();
        let second = table.resolve("/").unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(table.len(), 3);
    }
}
