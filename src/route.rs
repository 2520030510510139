//! Route declarations and the immutable route table.
//!
//! A [`Route`] binds one URL path segment to the page that renders it. Routes
//! are declared as plain data, collected by a [`RouteTableBuilder`], validated
//! once, and frozen into a [`RouteTable`] for the lifetime of the application.
//!
//! Lookup is an exact string match on the normalized segment: the first entry
//! whose path equals the request path wins, and uniqueness validation
//! guarantees there is never a second. An unmatched path is not an error at
//! this layer; [`RouteTable::resolve`] returns `None` and the caller decides
//! the fallback.
//!
//! # Examples
//!
//! ```ignore
//! use ehr_shell::{Route, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(Route::page("signup", SignUp::new).name("sign-up"))
//!     .route(Route::page("login", LogIn::new).name("log-in"))
//!     .build()?;
//!
//! assert!(table.resolve("login").is_some());
//! assert!(table.resolve("reports").is_none());
//! ```

use crate::error::RouteTableError;
use crate::{error_log, info_log, trace_log};
use gpui::{AnyElement, AnyView, App, AppContext, Context, Render, SharedString, Window};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Page References
// ============================================================================

/// Builder for a stateless view, re-invoked on every frame.
pub type ViewBuilder = Arc<dyn Fn(&mut Window, &mut App) -> AnyElement + Send + Sync>;

/// Factory for an entity-backed page, invoked once per activation.
pub type PageFactory = Arc<dyn Fn(&mut Window, &mut App) -> AnyView + Send + Sync>;

/// Tagged reference to the renderable unit a route activates.
#[derive(Clone)]
pub enum PageRef {
    /// Stateless element builder; the view is rebuilt every frame
    Element(ViewBuilder),
    /// Entity page factory; the entity lives until the route deactivates
    Entity(PageFactory),
}

impl fmt::Debug for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Element(_) => f.write_str("PageRef::Element(..)"),
            PageRef::Entity(_) => f.write_str("PageRef::Entity(..)"),
        }
    }
}

// ============================================================================
// Route
// ============================================================================

/// A declarative binding from one URL path segment to a page.
///
/// The path is normalized on construction (surrounding slashes stripped), so
/// `"login"`, `"/login"` and `"login/"` all declare the same segment.
#[derive(Clone)]
pub struct Route {
    path: SharedString,
    name: Option<SharedString>,
    page: PageRef,
}

impl Route {
    /// Declare a route rendering a stateless view.
    ///
    /// The builder runs on every frame the route is active, so it should hold
    /// no state of its own.
    pub fn view<F>(path: impl Into<SharedString>, builder: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + Send + Sync + 'static,
    {
        Self {
            path: normalize_segment(&path.into()).to_string().into(),
            name: None,
            page: PageRef::Element(Arc::new(builder)),
        }
    }

    /// Declare a route rendering an entity-backed page component.
    ///
    /// The constructor is invoked once when the route becomes active; the
    /// entity keeps its internal state until the active route changes.
    pub fn page<P, F>(path: impl Into<SharedString>, build: F) -> Self
    where
        P: Render + 'static,
        F: Fn(&mut Context<'_, P>) -> P + Send + Sync + 'static,
    {
        Self {
            path: normalize_segment(&path.into()).to_string().into(),
            name: None,
            page: PageRef::Entity(Arc::new(move |_window, cx| {
                let view = cx.new(|cx| build(cx));
                view.into()
            })),
        }
    }

    /// Attach a diagnostic name, reported in logs and usable for identity
    /// assertions in tests.
    pub fn name(mut self, name: impl Into<SharedString>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The normalized path segment this route binds.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The diagnostic name, if one was attached.
    pub fn route_name(&self) -> Option<&str> {
        self.name.as_ref().map(SharedString::as_str)
    }

    /// The page this route activates.
    pub fn page_ref(&self) -> &PageRef {
        &self.page
    }

    /// Check whether a request path addresses this route.
    pub fn matches(&self, path: &str) -> bool {
        normalize_segment(path) == self.path.as_ref()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("page", &self.page)
            .finish()
    }
}

// ============================================================================
// Path Normalization
// ============================================================================

/// Strip surrounding slashes from a request path, yielding the bare segment.
///
/// Routes store and match bare segments, so `"/login"`, `"login/"` and
/// `"login"` are the same address.
///
/// # Examples
///
/// ```
/// use ehr_shell::normalize_segment;
///
/// assert_eq!(normalize_segment("login"), "login");
/// assert_eq!(normalize_segment("/login"), "login");
/// assert_eq!(normalize_segment("//login/"), "login");
/// assert_eq!(normalize_segment("/"), "");
/// ```
#[inline]
#[must_use]
pub fn normalize_segment(path: &str) -> &str {
    path.trim_matches('/')
}

fn validate_segment(path: &str) -> Result<(), RouteTableError> {
    let invalid = |reason: &str| RouteTableError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.is_empty() {
        return Err(invalid("path must not be empty"));
    }
    if path.contains('/') {
        return Err(invalid("path must be a single segment"));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(invalid("whitespace is not allowed"));
    }
    if path.contains('?') || path.contains('#') {
        return Err(invalid("reserved URL characters are not allowed"));
    }
    Ok(())
}

// ============================================================================
// Route Table
// ============================================================================

/// Collects route declarations and validates them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Declaration order is preserved in the built table.
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate the declarations and freeze them into a table.
    ///
    /// Rejects malformed segments and duplicate paths; both are static
    /// configuration defects, so the error is terminal.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if let Err(err) = validate_segment(route.path()) {
                error_log!("Route table rejected: {}", err);
                return Err(err);
            }
            if !seen.insert(route.path().to_string()) {
                let err = RouteTableError::DuplicatePath {
                    path: route.path().to_string(),
                };
                error_log!("Route table rejected: {}", err);
                return Err(err);
            }
        }

        info_log!("Route table built with {} routes", self.routes.len());
        Ok(RouteTable {
            routes: self.routes.into_iter().map(Arc::new).collect(),
        })
    }
}

/// The immutable, ordered set of (path, page) bindings.
///
/// Built once at application start; the navigation runtime consults it per
/// navigation event and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
}

impl RouteTable {
    /// Start declaring a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Find the route bound to a request path, by exact segment match.
    ///
    /// Entries are scanned in declaration order; uniqueness validation
    /// guarantees at most one can match.
    pub fn resolve(&self, path: &str) -> Option<&Arc<Route>> {
        let segment = normalize_segment(path);
        let found = self
            .routes
            .iter()
            .find(|route| route.path() == segment);

        match found {
            Some(route) => {
                trace_log!(
                    "Resolved '{}' to route '{}'",
                    path,
                    route.route_name().unwrap_or_else(|| route.path())
                );
            }
            None => {
                trace_log!("No route matches '{}'", path);
            }
        }
        found
    }

    /// Check whether any route binds the given path.
    pub fn contains(&self, path: &str) -> bool {
        let segment = normalize_segment(path);
        self.routes.iter().any(|route| route.path() == segment)
    }

    /// All routes, in declaration order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Declared path segments, in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path())
    }

    /// Number of declared routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table declares no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{div, IntoElement, ParentElement};

    fn stub(path: &str) -> Route {
        Route::view(path.to_string(), |_, _| {
            div().child("stub").into_any_element()
        })
    }

    #[test]
    fn test_normalize_segment() {
        assert_eq!(normalize_segment("login"), "login");
        assert_eq!(normalize_segment("/login"), "login");
        assert_eq!(normalize_segment("login/"), "login");
        assert_eq!(normalize_segment("//login//"), "login");
        assert_eq!(normalize_segment("/"), "");
        assert_eq!(normalize_segment(""), "");
    }

    #[test]
    fn test_route_normalizes_path_on_construction() {
        let route = stub("/signup/");
        assert_eq!(route.path(), "signup");
        assert!(route.matches("signup"));
        assert!(route.matches("/signup"));
        assert!(!route.matches("login"));
    }

    #[test]
    fn test_route_name_builder() {
        let route = stub("signup").name("sign-up");
        assert_eq!(route.route_name(), Some("sign-up"));
        assert_eq!(stub("signup").route_name(), None);
    }

    #[test]
    fn test_build_accepts_distinct_paths() {
        let table = RouteTable::builder()
            .route(stub("signup"))
            .route(stub("login"))
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["signup", "login"]);
    }

    #[test]
    fn test_build_rejects_duplicate_path() {
        let result = RouteTable::builder()
            .route(stub("login"))
            .route(stub("login"))
            .build();

        assert_eq!(
            result.unwrap_err(),
            RouteTableError::DuplicatePath {
                path: "login".to_string()
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_after_normalization() {
        // "/login" and "login" address the same segment.
        let result = RouteTable::builder()
            .route(stub("/login"))
            .route(stub("login"))
            .build();

        assert!(matches!(
            result,
            Err(RouteTableError::DuplicatePath { path }) if path == "login"
        ));
    }

    #[test]
    fn test_build_rejects_malformed_paths() {
        for path in ["", "/", "a/b", "sign up", "login?next=1", "login#top"] {
            let result = RouteTable::builder().route(stub(path)).build();
            assert!(
                matches!(result, Err(RouteTableError::InvalidPath { .. })),
                "expected '{path}' to be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_exact_match() {
        let table = RouteTable::builder()
            .route(stub("signup").name("sign-up"))
            .route(stub("login").name("log-in"))
            .build()
            .unwrap();

        let route = table.resolve("signup").unwrap();
        assert_eq!(route.route_name(), Some("sign-up"));

        let route = table.resolve("/login/").unwrap();
        assert_eq!(route.route_name(), Some("log-in"));
    }

    #[test]
    fn test_resolve_unknown_path_is_none() {
        let table = RouteTable::builder()
            .route(stub("signup"))
            .route(stub("login"))
            .build()
            .unwrap();

        assert!(table.resolve("reports").is_none());
        assert!(table.resolve("").is_none());
        assert!(table.resolve("/").is_none());
    }

    #[test]
    fn test_resolve_returns_declaration_entry() {
        let table = RouteTable::builder()
            .route(stub("signup"))
            .route(stub("login"))
            .build()
            .unwrap();

        let resolved = table.resolve("login").unwrap();
        assert!(Arc::ptr_eq(resolved, &table.routes()[1]));
        assert!(!Arc::ptr_eq(resolved, &table.routes()[0]));
    }

    #[test]
    fn test_contains() {
        let table = RouteTable::builder().route(stub("login")).build().unwrap();
        assert!(table.contains("login"));
        assert!(table.contains("/login"));
        assert!(!table.contains("signup"));
    }

    #[test]
    fn test_empty_table_resolves_nothing() {
        let table = RouteTable::builder().build().unwrap();
        assert!(table.is_empty());
        assert!(table.resolve("login").is_none());
    }

    #[test]
    fn test_page_ref_debug() {
        let route = stub("login");
        assert_eq!(format!("{:?}", route.page_ref()), "PageRef::Element(..)");
    }
}
