//! Workspace shell: sidebar navigation driving a routed content pane.
//!
//! Run with `cargo run --example app_shell`.

use ehr_shell::pages::Sidebar;
use ehr_shell::{app_routes, init_router, Navigator, RouterView};
use gpui::prelude::*;
use gpui::*;

struct AppShell {
    sidebar: Entity<Sidebar>,
    router_view: Entity<RouterView>,
}

impl AppShell {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        Self {
            sidebar: cx.new(Sidebar::new),
            router_view: cx.new(|_| RouterView::new()),
        }
    }

    fn top_bar(&self, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let current = Navigator::current_path(cx);
        let can_back = Navigator::can_go_back(cx);
        let can_forward = Navigator::can_go_forward(cx);

        div()
            .flex()
            .items_center()
            .gap_2()
            .px_4()
            .py_2()
            .bg(rgb(0x2d2d2d))
            .border_b_1()
            .border_color(rgb(0x3e3e3e))
            .child(
                div()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .text_color(if can_back {
                        rgb(0xffffff)
                    } else {
                        rgb(0x555555)
                    })
                    .when(can_back, |this| {
                        this.cursor_pointer()
                            .hover(|style| style.bg(rgb(0x3e3e3e)))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(|_view, _event, _window, cx| {
                                    Navigator::back(cx);
                                }),
                            )
                    })
                    .child("←"),
            )
            .child(
                div()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .text_color(if can_forward {
                        rgb(0xffffff)
                    } else {
                        rgb(0x555555)
                    })
                    .when(can_forward, |this| {
                        this.cursor_pointer()
                            .hover(|style| style.bg(rgb(0x3e3e3e)))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(|_view, _event, _window, cx| {
                                    Navigator::forward(cx);
                                }),
                            )
                    })
                    .child("→"),
            )
            .child(div().flex_1())
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(0x888888))
                    .child(format!("/{current}")),
            )
    }
}

impl Render for AppShell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0x1e1e1e))
            .text_color(rgb(0xffffff))
            .child(self.top_bar(cx))
            .child(
                div()
                    .flex()
                    .flex_1()
                    .child(self.sidebar.clone())
                    .child(div().flex_1().child(self.router_view.clone())),
            )
    }
}

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        init_router(cx, app_routes());
        Navigator::replace(cx, "signup");

        let bounds = Bounds::centered(None, size(px(1000.), px(700.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("EHR Workspace".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(AppShell::new),
        )
        .unwrap();

        cx.activate(true);
    });
}
