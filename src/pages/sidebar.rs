//! Navigation rail hosted alongside the router view.

use crate::router::Navigator;
use crate::widgets::RouterLink;
use gpui::prelude::*;
use gpui::*;

/// Collapsible navigation rail linking to the auth pages.
pub struct Sidebar {
    collapsed: bool,
}

impl Sidebar {
    pub fn new(_cx: &mut Context<'_, Self>) -> Self {
        Self { collapsed: false }
    }

    /// Whether the rail is collapsed to its narrow form.
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip between the wide and narrow forms.
    pub fn toggle(&mut self, cx: &mut Context<'_, Self>) {
        self.collapsed = !self.collapsed;
        cx.notify();
    }

    fn nav_item(
        &self,
        cx: &mut Context<'_, Self>,
        path: &'static str,
        label: &'static str,
        short: &'static str,
    ) -> impl IntoElement {
        let is_active = Navigator::current_path(cx) == path;
        let text = if self.collapsed { short } else { label };

        RouterLink::new(path)
            .child(
                div()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .text_color(if is_active {
                        rgb(0xffffff)
                    } else {
                        rgb(0xcccccc)
                    })
                    .when(is_active, |this| this.bg(rgb(0x37373d)))
                    .hover(|style| style.bg(rgb(0x333333)))
                    .child(text),
            )
            .build(cx)
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let brand = if self.collapsed { "EHR" } else { "EHR Workspace" };
        let toggle_glyph = if self.collapsed { "»" } else { "«" };

        div()
            .flex()
            .flex_col()
            .h_full()
            .w(px(if self.collapsed { 72. } else { 220. }))
            .bg(rgb(0x252526))
            .border_r_1()
            .border_color(rgb(0x3e3e3e))
            .p_3()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .pb_2()
                    .border_b_1()
                    .border_color(rgb(0x3e3e3e))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(0xffffff))
                            .child(brand),
                    )
                    .child(
                        div()
                            .px_2()
                            .py_1()
                            .rounded_md()
                            .cursor_pointer()
                            .text_color(rgb(0x888888))
                            .hover(|style| style.bg(rgb(0x333333)))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(|view, _event, _window, cx| {
                                    view.toggle(cx);
                                }),
                            )
                            .child(toggle_glyph),
                    ),
            )
            .child(self.nav_item(cx, "signup", "Sign Up", "S"))
            .child(self.nav_item(cx, "login", "Log In", "L"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::PageFixture;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_sidebar_creates(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| Sidebar::new(cx));
        fixture.detect_changes(cx);
        assert!(fixture.exists(cx));
    }

    #[gpui::test]
    fn test_detect_changes_is_idempotent(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| Sidebar::new(cx));

        fixture.detect_changes(cx);
        assert!(fixture.exists(cx));

        // A second pass must not change the outcome.
        fixture.detect_changes(cx);
        assert!(fixture.exists(cx));
    }

    #[gpui::test]
    fn test_starts_expanded(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| Sidebar::new(cx));
        assert!(!fixture.read_with(cx, |sidebar, _| sidebar.collapsed()));
    }

    #[gpui::test]
    fn test_toggle_collapses_and_restores(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| Sidebar::new(cx));

        fixture.update(cx, |sidebar, cx| sidebar.toggle(cx));
        fixture.detect_changes(cx);
        assert!(fixture.read_with(cx, |sidebar, _| sidebar.collapsed()));

        fixture.update(cx, |sidebar, cx| sidebar.toggle(cx));
        fixture.detect_changes(cx);
        assert!(!fixture.read_with(cx, |sidebar, _| sidebar.collapsed()));
    }
}
