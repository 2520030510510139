//! Account registration page, bound to the `signup` route.

use super::{action_button, form_field, masked};
use crate::widgets::router_link;
use gpui::prelude::*;
use gpui::*;

/// Registration form scaffold.
///
/// Holds display state only; submitting records the request locally and
/// re-renders with a confirmation line.
pub struct SignUp {
    full_name: String,
    email: String,
    password: String,
    submitted: bool,
}

impl SignUp {
    pub fn new(_cx: &mut Context<'_, Self>) -> Self {
        Self {
            full_name: String::from("Alex Kim"),
            email: String::from("alex.kim@example.org"),
            password: String::from("changeme"),
            submitted: false,
        }
    }

    /// Whether the form was submitted in this session.
    pub fn submitted(&self) -> bool {
        self.submitted
    }
}

impl Render for SignUp {
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
                    .child("Create your account"),
            )
            .child(
                div()
                    .text_base()
                    .text_color(rgb(0xcccccc))
                    .child("Register to access the records workspace."),
            )
            .child(form_field("Full name", self.full_name.clone()))
            .child(form_field("Email", self.email.clone()))
            .child(form_field("Password", masked(&self.password)))
            .child(action_button(cx, "Create Account", |page: &mut Self, _cx| {
                page.submitted = true;
            }))
            .when(self.submitted, |this| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(rgb(0x4caf50))
                        .child("Account request recorded."),
                )
            })
            .child(
                div()
                    .mt_4()
                    .text_sm()
                    .child(router_link(cx, "login", "Already have an account? Log in")),
            )
    }
}
