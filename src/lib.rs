//! Routing and page scaffolding for an EHR desktop client built on GPUI.
//!
//! Three concerns, kept apart:
//!
//! - **Route table** — an immutable registry of path segment to page
//!   bindings, validated once when the app composes it ([`route`],
//!   [`routes`]).
//! - **Navigation** — history state plus the [`Navigator`] facade over
//!   the [`AppRouter`] global ([`state`], [`router`]).
//! - **Presentation** — the [`RouterView`] outlet, [`RouterLink`]s, and
//!   the page components themselves ([`widgets`], [`pages`]).
//!
//! A shell wires them together at startup:
//!
//! ```ignore
//! Application::new().run(|cx| {
//!     init_router(cx, app_routes());
//!     Navigator::replace(cx, "signup");
//!     // ...open a window whose root view renders a RouterView
//! });
//! ```
//!
//! Unmatched paths are not errors: the router records them, and the
//! [`RouterView`] renders its not-found page until navigation moves on.

pub mod error;
mod logging;
pub mod pages;
pub mod route;
pub mod router;
pub mod routes;
pub mod state;
pub mod widgets;

#[cfg(any(test, feature = "test-support"))]
pub mod fixture;

pub use error::{NavigationOutcome, NotFoundHandler, RouteTableError};
pub use route::{
    normalize_segment, PageFactory, PageRef, Route, RouteTable, RouteTableBuilder, ViewBuilder,
};
pub use router::{init_router, AppRouter, Navigator};
pub use routes::app_routes;
pub use state::{NavigationDirection, NavigationState, RouteChangeEvent};
pub use widgets::{default_not_found_page, router_link, RouterLink, RouterView};

#[cfg(any(test, feature = "test-support"))]
pub use fixture::PageFixture;
