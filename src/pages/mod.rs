//! Page components referenced by the application route table.
//!
//! Each page is an entity-backed component: a plain struct implementing
//! [`Render`](gpui::Render), constructed with `cx` so it can drive its own
//! change detection. The route table binds [`SignUp`] and [`LogIn`];
//! [`Sidebar`] is the navigation rail hosted next to the
//! [`RouterView`](crate::widgets::RouterView).
//!
//! These are presentational scaffolds: they render fields and actions but
//! carry no account or credential logic.

mod log_in;
mod sidebar;
mod sign_up;

pub use log_in::LogIn;
pub use sidebar::Sidebar;
pub use sign_up::SignUp;

use gpui::*;

/// Labeled read-only form field, shared by the auth pages.
pub(crate) fn form_field(
    label: impl Into<SharedString>,
    value: impl Into<SharedString>,
) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x888888))
                .child(label.into()),
        )
        .child(
            div()
                .px_3()
                .py_2()
                .bg(rgb(0x2d2d2d))
                .border_1()
                .border_color(rgb(0x3e3e3e))
                .rounded_md()
                .text_color(rgb(0xffffff))
                .child(value.into()),
        )
}

/// Primary action button wired to a component mutation.
pub(crate) fn action_button<V: 'static>(
    cx: &mut Context<'_, V>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&mut V, &mut Context<'_, V>) + 'static,
) -> impl IntoElement {
    let label = label.into();

    div()
        .px_6()
        .py_3()
        .bg(rgb(0x0066cc))
        .rounded_md()
        .cursor_pointer()
        .hover(|style| style.bg(rgb(0x0077dd)))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |view, _event, _window, cx| {
                on_click(view, cx);
                cx.notify();
            }),
        )
        .child(label)
}

/// Mask a secret for display.
pub(crate) fn masked(value: &str) -> String {
    "•".repeat(value.chars().count())
}
