//! Router runtime integration for GPUI.
//!
//! This module wires the immutable [`RouteTable`] and the mutable
//! [`NavigationState`] into GPUI's global system:
//!
//! - [`AppRouter`] — the routing object stored as a GPUI `Global`. It owns
//!   the table and the history and answers "which route is active".
//! - [`Navigator`] — static convenience API (`Navigator::push(cx, "login")`,
//!   …) that reads and writes the `AppRouter` through `cx` and refreshes all
//!   windows after every navigation.
//!
//! # Initialization
//!
//! Build the table once and install it before any navigation:
//!
//! ```ignore
//! use ehr_shell::{init_router, app_routes};
//!
//! init_router(cx, app_routes());
//! Navigator::replace(cx, "signup");
//! ```

use crate::error::NavigationOutcome;
use crate::route::{Route, RouteTable};
use crate::state::{NavigationState, RouteChangeEvent};
use crate::{debug_log, info_log, warn_log};
use gpui::{App, BorrowAppContext, Global};
use std::sync::Arc;

// ============================================================================
// AppRouter
// ============================================================================

/// Global router state accessible from any component.
///
/// Holds the route table built at startup (never mutated afterwards) and the
/// navigation history. Stored as a GPUI global by [`init_router`].
#[derive(Debug, Clone)]
pub struct AppRouter {
    table: Arc<RouteTable>,
    state: NavigationState,
}

impl AppRouter {
    /// Wrap a validated table with a fresh navigation state.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(table),
            state: NavigationState::new(),
        }
    }

    /// The immutable route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The path of the current history entry.
    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    /// The route bound to the current path, if any.
    pub fn active_route(&self) -> Option<&Arc<Route>> {
        self.table.resolve(self.state.current_path())
    }

    /// Whether history can move back.
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Whether history can move forward.
    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    /// Push a new history entry.
    pub fn push(&mut self, path: &str) -> NavigationOutcome {
        let event = self.state.push(path);
        self.outcome_for(&event)
    }

    /// Replace the current history entry.
    pub fn replace(&mut self, path: &str) -> NavigationOutcome {
        let event = self.state.replace(path);
        self.outcome_for(&event)
    }

    /// Move back in history, if possible.
    pub fn back(&mut self) -> Option<NavigationOutcome> {
        let event = self.state.back()?;
        Some(self.outcome_for(&event))
    }

    /// Move forward in history, if possible.
    pub fn forward(&mut self) -> Option<NavigationOutcome> {
        let event = self.state.forward()?;
        Some(self.outcome_for(&event))
    }

    fn outcome_for(&self, event: &RouteChangeEvent) -> NavigationOutcome {
        let from = event.from.as_deref().unwrap_or("");
        if self.table.contains(&event.to) {
            debug_log!(
                "Navigation {:?}: '{}' -> '{}'",
                event.direction,
                from,
                event.to
            );
            NavigationOutcome::Matched {
                path: event.to.clone(),
            }
        } else {
            warn_log!(
                "Navigation {:?}: '{}' -> '{}' matches no route",
                event.direction,
                from,
                event.to
            );
            NavigationOutcome::NotFound {
                path: event.to.clone(),
            }
        }
    }
}

impl Global for AppRouter {}

// ============================================================================
// init_router
// ============================================================================

/// Install the global router over a validated route table.
///
/// Must run before any [`Navigator`] call or [`RouterView`] render; typically
/// the first thing the application does inside `Application::run`.
///
/// ```ignore
/// use ehr_shell::{app_routes, init_router};
///
/// init_router(cx, app_routes());
/// ```
pub fn init_router(cx: &mut App, table: RouteTable) {
    info_log!("Router initialized with {} routes", table.len());
    cx.set_global(AppRouter::new(table));
}

// ============================================================================
// Navigator
// ============================================================================

/// Navigation API for convenient route navigation.
///
/// Provides static methods over the global [`AppRouter`]:
/// - `Navigator::push(cx, "login")` — navigate to a new page
/// - `Navigator::replace(cx, "signup")` — swap the current page
/// - `Navigator::back(cx)` / `Navigator::forward(cx)` — walk history
///
/// Every mutating call refreshes all windows so views re-render against the
/// new state. The global must be installed by [`init_router`] first.
///
/// # Example
///
/// ```ignore
/// use ehr_shell::Navigator;
///
/// Navigator::push(cx, "login");
/// Navigator::back(cx);
/// ```
pub struct Navigator;

impl Navigator {
    /// Push a new path and refresh windows.
    pub fn push(cx: &mut App, path: &str) -> NavigationOutcome {
        debug_log!("Navigator::push '{}'", path);
        let outcome = cx.update_global::<AppRouter, _>(|router, _cx| router.push(path));
        cx.refresh_windows();
        outcome
    }

    /// Replace the current path and refresh windows.
    pub fn replace(cx: &mut App, path: &str) -> NavigationOutcome {
        debug_log!("Navigator::replace '{}'", path);
        let outcome = cx.update_global::<AppRouter, _>(|router, _cx| router.replace(path));
        cx.refresh_windows();
        outcome
    }

    /// Go back one history entry, if possible, and refresh windows.
    pub fn back(cx: &mut App) -> Option<NavigationOutcome> {
        let outcome = cx.update_global::<AppRouter, _>(|router, _cx| router.back());
        cx.refresh_windows();
        outcome
    }

    /// Go forward one history entry, if possible, and refresh windows.
    pub fn forward(cx: &mut App) -> Option<NavigationOutcome> {
        let outcome = cx.update_global::<AppRouter, _>(|router, _cx| router.forward());
        cx.refresh_windows();
        outcome
    }

    /// The current path.
    pub fn current_path(cx: &App) -> String {
        cx.global::<AppRouter>().current_path().to_string()
    }

    /// The route bound to the current path, if any.
    pub fn active_route(cx: &App) -> Option<Arc<Route>> {
        cx.global::<AppRouter>().active_route().cloned()
    }

    /// Whether history can move back.
    pub fn can_go_back(cx: &App) -> bool {
        cx.global::<AppRouter>().can_go_back()
    }

    /// Whether history can move forward.
    pub fn can_go_forward(cx: &App) -> bool {
        cx.global::<AppRouter>().can_go_forward()
    }
}

// ============================================================================
// Tests
// ============================================================================
