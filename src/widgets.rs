//! Router widgets for rendering routes.
//!
//! This module provides the GPUI components that turn the route table into
//! rendered UI:
//!
//! - [`RouterView`] — renders the page bound to the current path. Place one
//!   in your top-level layout; it instantiates entity pages once per
//!   activation and drops them when the active route changes.
//! - [`RouterLink`] / [`router_link`] — clickable navigation link with
//!   optional active-state styling.
//! - A built-in not-found page, replaceable via
//!   [`RouterView::with_not_found`], is the fallback policy for unmatched
//!   paths.

use crate::error::NotFoundHandler;
use crate::route::{normalize_segment, PageRef};
use crate::router::{AppRouter, Navigator};
use crate::{debug_log, trace_log, warn_log};
use gpui::*;
use std::sync::Arc;

// ============================================================================
// RouterView
// ============================================================================

/// The page entity currently hosted by a [`RouterView`].
struct ActivePage {
    path: String,
    view: AnyView,
}

/// Component that renders the page bound to the current path.
///
/// On every frame the view resolves the current path against the global
/// [`AppRouter`]:
///
/// - a route with an entity page is instantiated once when it becomes active;
///   the entity (and its internal state) lives until the active route
///   changes, then its handle is dropped;
/// - a route with a stateless view builder is re-invoked every frame;
/// - an unmatched path renders the not-found fallback.
pub struct RouterView {
    active: Option<ActivePage>,
    not_found: Option<NotFoundHandler>,
}

impl RouterView {
    /// Create a view with the built-in not-found fallback.
    pub fn new() -> Self {
        Self {
            active: None,
            not_found: None,
        }
    }

    /// Replace the not-found fallback.
    ///
    /// ```ignore
    /// RouterView::new().with_not_found(|_cx, path| {
    ///     gpui::div().child(format!("Nothing at '{path}'")).into_any_element()
    /// })
    /// ```
    pub fn with_not_found<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut App, &str) -> AnyElement + Send + Sync + 'static,
    {
        self.not_found = Some(Arc::new(handler));
        self
    }

    /// Path of the page currently instantiated, if any.
    pub fn active_path(&self) -> Option<&str> {
        self.active.as_ref().map(|page| page.path.as_str())
    }

    fn render_fallback(&self, cx: &mut App, path: &str) -> AnyElement {
        match &self.not_found {
            Some(handler) => handler(cx, path),
            None => default_not_found_page(path).into_any_element(),
        }
    }

    fn needs_activation(&self, path: &str) -> bool {
        self.active.as_ref().map_or(true, |page| page.path != path)
    }
}

impl Default for RouterView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for RouterView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        // Extract data from the router, then drop the borrow.
        let resolved = {
            let Some(router) = cx.try_global::<AppRouter>() else {
                trace_log!("RouterView: no router installed");
                return div().child("No router configured").into_any_element();
            };

            let current_path = router.current_path().to_string();
            (current_path, router.active_route().cloned())
        };
        let (current_path, route) = resolved;

        let Some(route) = route else {
            warn_log!("RouterView: no route matches '{}'", current_path);
            // Drop any stale page entity from the previous route.
            self.active = None;
            return self.render_fallback(cx, &current_path);
        };

        match route.page_ref() {
            PageRef::Element(builder) => {
                self.active = None;
                builder(window, cx)
            }
            PageRef::Entity(factory) => {
                if self.needs_activation(&current_path) {
                    debug_log!(
                        "RouterView: activating page for '{}' (route '{}')",
                        current_path,
                        route.route_name().unwrap_or_else(|| route.path())
                    );
                    let view = factory(window, cx);
                    self.active = Some(ActivePage {
                        path: current_path.clone(),
                        view,
                    });
                }
                match &self.active {
                    Some(page) => page.view.clone().into_any_element(),
                    None => self.render_fallback(cx, &current_path),
                }
            }
        }
    }
}

// ============================================================================
// RouterLink
// ============================================================================

/// A clickable link component that navigates to a route on click.
///
/// Supports optional active-state styling via [`active_class`](Self::active_class).
///
/// # Examples
///
/// ```ignore
/// RouterLink::new("login")
///     .child("Log In")
///     .active_class(|div| div.text_color(gpui::rgb(0x2196f3)))
///     .build(cx)
/// ```
pub struct RouterLink {
    /// Target route path
    path: SharedString,
    /// Optional custom styling when link is active
    active_class: Option<Box<dyn Fn(Div) -> Div>>,
    /// Child elements
    children: Vec<AnyElement>,
}

impl RouterLink {
    /// Create a new link to the specified path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            active_class: None,
            children: Vec::new(),
        }
    }

    /// Add a child element.
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set custom styling for when this link's path is the current route.
    pub fn active_class(mut self, style: impl Fn(Div) -> Div + 'static) -> Self {
        self.active_class = Some(Box::new(style));
        self
    }

    /// Build the link element with the given context.
    pub fn build<V: 'static>(self, cx: &mut Context<'_, V>) -> Div {
        let path = self.path.clone();
        let current_path = Navigator::current_path(cx);
        let is_active = current_path == normalize_segment(&self.path);

        let mut link = div().cursor_pointer().on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, _event, _window, cx| {
                Navigator::push(cx, &path);
            }),
        );

        if is_active {
            if let Some(active_fn) = self.active_class {
                link = active_fn(link);
            }
        }

        for child in self.children {
            link = link.child(child);
        }

        link
    }
}

/// Create a simple text link with built-in active-state color.
///
/// For more control (custom children, styling), use [`RouterLink`] directly.
pub fn router_link<V: 'static>(
    cx: &mut Context<'_, V>,
    path: impl Into<SharedString>,
    label: impl Into<SharedString>,
) -> Div {
    let path_str: SharedString = path.into();
    let label_str: SharedString = label.into();
    let current_path = Navigator::current_path(cx);
    let is_active = current_path == normalize_segment(&path_str);

    div()
        .cursor_pointer()
        .text_color(if is_active {
            rgb(0x2196f3)
        } else {
            rgb(0x333333)
        })
        .hover(|this| this.text_color(rgb(0x2196f3)))
        .child(label_str)
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |_view, _event, _window, cx| {
                Navigator::push(cx, &path_str);
            }),
        )
}

// ============================================================================
// Built-in Not-Found Page
// ============================================================================

/// Built-in minimalist not-found page, the default fallback policy.
pub fn default_not_found_page(path: &str) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .size_full()
        .bg(rgb(0x1e1e1e))
        .p_8()
        .gap_6()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child("404 — Page Not Found"),
        )
        .child(
            div()
                .text_base()
                .text_color(rgb(0xcccccc))
                .child(format!("No route matches: /{}", path)),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[test]
    fn test_router_view_starts_without_active_page() {
        let view = RouterView::new();
        assert!(view.active_path().is_none());
        assert!(view.not_found.is_none());
    }

    #[test]
    fn test_with_not_found_installs_handler() {
        let view = RouterView::new()
            .with_not_found(|_cx, path| div().child(format!("404: {path}")).into_any_element());
        assert!(view.not_found.is_some());
    }

    struct Blank;

    impl Render for Blank {
        fn render(
            &mut self,
            _window: &mut Window,
            _cx: &mut Context<'_, Self>,
        ) -> impl IntoElement {
            div()
        }
    }

    #[gpui::test]
    fn test_needs_activation(cx: &mut TestAppContext) {
        let mut view = RouterView::new();
        assert!(view.needs_activation("signup"));

        let page: AnyView = cx.update(|cx| cx.new(|_| Blank)).into();
        view.active = Some(ActivePage {
            path: "signup".to_string(),
            view: page,
        });
        assert!(!view.needs_activation("signup"));
        assert!(view.needs_activation("login"));
    }

    #[gpui::test]
    fn test_render_fallback_uses_custom_handler(cx: &mut TestAppContext) {
        let view = RouterView::new()
            .with_not_found(|_cx, path| div().child(format!("404: {path}")).into_any_element());

        // Building the element must not panic; content inspection is not
        // part of this layer's contract.
        cx.update(|cx| {
            let _element = view.render_fallback(cx, "reports");
        });
    }

    #[gpui::test]
    fn test_render_fallback_defaults_to_builtin_page(cx: &mut TestAppContext) {
        let view = RouterView::new();
        cx.update(|cx| {
            let _element = view.render_fallback(cx, "reports");
        });
    }

    #[test]
    fn test_router_link_collects_children() {
        let link = RouterLink::new("login")
            .child(div().child("Log In"))
            .active_class(|this| this.text_color(rgb(0x2196f3)));
        assert_eq!(link.path.as_ref(), "login");
        assert_eq!(link.children.len(), 1);
        assert!(link.active_class.is_some());
    }
}
