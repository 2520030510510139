//! Sign-in page, bound to the `login` route.

use super::{action_button, form_field, masked};
use crate::widgets::router_link;
use gpui::prelude::*;
use gpui::*;

/// Sign-in form scaffold.
///
/// Display state only; the button records the attempt locally and re-renders
/// with a confirmation line.
pub struct LogIn {
    username: String,
    password: String,
    attempted: bool,
}

impl LogIn {
    pub fn new(_cx: &mut Context<'_, Self>) -> Self {
        Self {
            username: String::from("alex.kim"),
            password: String::from("changeme"),
            attempted: false,
        }
    }

    /// The username shown in the form.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether sign-in was attempted in this session.
    pub fn attempted(&self) -> bool {
        self.attempted
    }
}

impl Render for LogIn {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_4()
            .p_8()
            .max_w(px(480.))
            .child(
                div()
                    .text_3xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(0xffffff))
                    .child("Log in"),
            )
            .child(
                div()
                    .text_base()
                    .text_color(rgb(0xcccccc))
                    .child("Welcome back to the records workspace."),
            )
            .child(form_field("Username", self.username.clone()))
            .child(form_field("Password", masked(&self.password)))
            .child(action_button(cx, "Log In", |page: &mut Self, _cx| {
                page.attempted = true;
            }))
            .when(self.attempted, |this| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(rgb(0x4caf50))
                        .child(format!("Sign-in request recorded for {}.", self.username)),
                )
            })
            .child(
                div()
                    .mt_4()
                    .text_sm()
                    .child(router_link(cx, "signup", "New here? Create an account")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::PageFixture;
    // `use super::*` leaks gpui's `test` macro; restore the built-in
    // `#[test]` that `#[gpui::test]` expands to.
    use core::prelude::v1::test;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_log_in_creates(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| LogIn::new(cx));
        fixture.detect_changes(cx);
        assert!(fixture.exists(cx));
    }

    #[gpui::test]
    fn test_initial_form_state(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| LogIn::new(cx));

        fixture.read_with(cx, |page, _| {
            assert_eq!(page.username(), "alex.kim");
            assert!(!page.attempted());
        });
    }

    #[gpui::test]
    fn test_attempt_records_request(cx: &mut TestAppContext) {
        let fixture = PageFixture::build(cx, |_window, cx| LogIn::new(cx));

        fixture.update(cx, |page, cx| {
            page.attempted = true;
            cx.notify();
        });
        fixture.detect_changes(cx);

        assert!(fixture.read_with(cx, |page, _| page.attempted()));
    }
}
