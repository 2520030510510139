//! Test fixture for page components.
//!
//! Wraps the three steps every page test repeats: acquire an isolated
//! app with a router global in place, instantiate the page as the root
//! view of a fresh window, and force a render pass so bindings settle.
//! Teardown is guaranteed by the test harness, which disposes the app
//! when the test returns, whether it passed or failed.
//!
//! ```ignore
//! #[gpui::test]
//! fn test_sidebar_creates(cx: &mut TestAppContext) {
//!     let fixture = PageFixture::build(cx, |_window, cx| Sidebar::new(cx));
//!     fixture.detect_changes(cx);
//!     assert!(fixture.exists(cx));
//! }
//! ```

use crate::route::RouteTable;
use crate::router::{init_router, AppRouter};
use crate::{debug_log, trace_log};
use gpui::{App, Context, Entity, Render, TestAppContext, WeakEntity, Window};

/// One page instance in its own window, with handles for driving it.
///
/// Each fixture owns one window and one root entity. Build a new
/// fixture per test rather than sharing one across cases.
pub struct PageFixture<P: Render + 'static> {
    page: Entity<P>,
    weak: WeakEntity<P>,
}

impl<P: Render + 'static> PageFixture<P> {
    /// Instantiate `build` as the root view of a new test window.
    ///
    /// If no router global has been installed yet, an empty route table
    /// is provisioned first so pages that render navigation widgets do
    /// not need one-off setup in every test.
    pub fn build(
        cx: &mut TestAppContext,
        build: impl FnOnce(&mut Window, &mut Context<'_, P>) -> P,
    ) -> Self {
        cx.update(|cx| {
            if cx.try_global::<AppRouter>().is_none() {
                init_router(cx, RouteTable::default());
            }
        });

        let (page, _) = cx.add_window_view(build);
        debug_log!("Fixture window opened for {}", std::any::type_name::<P>());
        let weak = page.downgrade();
        Self { page, weak }
    }

    /// Handle to the page entity.
    pub fn page(&self) -> &Entity<P> {
        &self.page
    }

    /// Run one synchronous render pass over the page.
    pub fn detect_changes(&self, cx: &mut TestAppContext) {
        trace_log!("Fixture render pass for {}", std::any::type_name::<P>());
        self.page.update(cx, |_page, cx| cx.notify());
        cx.run_until_parked();
    }

    /// Whether the page instance is still alive.
    pub fn exists(&self, cx: &TestAppContext) -> bool {
        match self.weak.upgrade() {
            Some(page) => cx.read(|app| {
                let _ = page.read(app);
                true
            }),
            None => false,
        }
    }

    /// Read from the page state.
    pub fn read_with<R>(&self, cx: &TestAppContext, f: impl FnOnce(&P, &App) -> R) -> R {
        cx.read(|app| f(self.page.read(app), app))
    }

    /// Mutate the page state.
    pub fn update<R>(
        &self,
        cx: &mut TestAppContext,
        f: impl FnOnce(&mut P, &mut Context<'_, P>) -> R,
    ) -> R {
        self.page.update(cx, f)
    }
}

// ============================================================================
// Tests
// ============================================================================
