//! Error handling for the route table and navigation.
//!
//! Two kinds of failure exist at this layer and they are deliberately kept
//! apart:
//!
//! - [`RouteTableError`] — a static-configuration defect (duplicate or
//!   malformed path) reported when the table is built. Terminal: the table
//!   is rejected, nothing recovers at runtime.
//! - [`NavigationOutcome`] — the report of a navigation attempt. An unmatched
//!   path is **not** an error here; it is `NotFound`, and the fallback policy
//!   belongs to [`RouterView`](crate::widgets::RouterView).
//!
//! # Examples
//!
//! ```
//! use ehr_shell::error::NavigationOutcome;
//!
//! let outcome = NavigationOutcome::Matched { path: "login".into() };
//! assert!(outcome.is_matched());
//! assert_eq!(outcome.path(), "login");
//! ```

use gpui::{AnyElement, App};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Route Table Errors
// ============================================================================

/// Defect found while building a [`RouteTable`](crate::route::RouteTable).
///
/// These are programmer errors in static configuration, surfaced once at
/// startup. Implements [`std::error::Error`] and [`Display`](std::fmt::Display)
/// for idiomatic error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two entries declare the same path
    DuplicatePath { path: String },

    /// Path is not a valid route segment
    InvalidPath { path: String, reason: String },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableError::DuplicatePath { path } => {
                write!(f, "Duplicate route path: {}", path)
            }
            RouteTableError::InvalidPath { path, reason } => {
                write!(f, "Invalid route path '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

// ============================================================================
// Navigation Outcome
// ============================================================================

/// Report returned by every navigation operation.
///
/// [`Navigator::push`](crate::router::Navigator::push) and friends always
/// update the navigation state; the outcome says whether the new path matched
/// a declared route or fell through to the not-found policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The path matched a declared route
    Matched { path: String },
    /// No route matches the path; the view renders its fallback
    NotFound { path: String },
}

impl NavigationOutcome {
    /// Check whether the path matched a declared route
    pub fn is_matched(&self) -> bool {
        matches!(self, NavigationOutcome::Matched { .. })
    }

    /// Check whether the path fell through to not-found
    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationOutcome::NotFound { .. })
    }

    /// The path the navigation landed on, either way
    pub fn path(&self) -> &str {
        match self {
            NavigationOutcome::Matched { path } | NavigationOutcome::NotFound { path } => path,
        }
    }
}

// ============================================================================
// Not-Found Handler
// ============================================================================

/// Renderer invoked when no route matches the current path.
///
/// Installed on [`RouterView`](crate::widgets::RouterView) via
/// [`with_not_found`](crate::widgets::RouterView::with_not_found); the default
/// implementation echoes the unmatched path.
pub type NotFoundHandler = Arc<dyn Fn(&mut App, &str) -> AnyElement + Send + Sync>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_matched() {
        let outcome = NavigationOutcome::Matched {
            path: "signup".to_string(),
        };
        assert!(outcome.is_matched());
        assert!(!outcome.is_not_found());
        assert_eq!(outcome.path(), "signup");
    }

    #[test]
    fn test_outcome_not_found() {
        let outcome = NavigationOutcome::NotFound {
            path: "reports".to_string(),
        };
        assert!(!outcome.is_matched());
        assert!(outcome.is_not_found());
        assert_eq!(outcome.path(), "reports");
    }

    #[test]
    fn test_duplicate_path_display() {
        let error = RouteTableError::DuplicatePath {
            path: "login".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate route path: login");
    }

    #[test]
    fn test_invalid_path_display() {
        let error = RouteTableError::InvalidPath {
            path: "sign up".to_string(),
            reason: "whitespace is not allowed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid route path 'sign up': whitespace is not allowed"
        );
    }

    #[test]
    fn test_route_table_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let error = RouteTableError::DuplicatePath {
            path: "login".to_string(),
        };
        assert_error(&error);
    }
}
