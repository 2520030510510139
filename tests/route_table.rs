//! Integration tests for the frozen route table.
//!
//! Exercises the surface the shell composes at startup: building the
//! application table, resolving request paths against it, and rejecting
//! defective declarations before anything renders.

use ehr_shell::{app_routes, Route, RouteTableBuilder, RouteTableError};
use gpui::{div, AnyElement, App, IntoElement, ParentElement, Window};
use std::sync::Arc;

fn placeholder(_window: &mut Window, _cx: &mut App) -> AnyElement {
    div().child("page").into_any_element()
}

// ---- application table ----

#[test]
fn test_app_table_shape() {
    let table = app_routes();

    assert_eq!(table.len(), 2);
    let paths: Vec<&str> = table.paths().collect();
    assert_eq!(paths, ["signup", "login"]);

    assert_eq!(
        table.resolve("signup").unwrap().route_name(),
        Some("sign-up")
    );
    assert_eq!(table.resolve("login").unwrap().route_name(), Some("log-in"));
}

#[test]
fn test_resolution_returns_declared_route() {
    let table = app_routes();

    let resolved = table.resolve("login").unwrap();
    assert!(Arc::ptr_eq(resolved, &table.routes()[1]));

    let resolved = table.resolve("signup").unwrap();
    assert!(Arc::ptr_eq(resolved, &table.routes()[0]));
}

#[test]
fn test_slash_forms_resolve_to_same_route() {
    let table = app_routes();

    let bare = table.resolve("login").unwrap();
    let slashed = table.resolve("/login").unwrap();
    let trailing = table.resolve("login/").unwrap();

    assert!(Arc::ptr_eq(bare, slashed));
    assert!(Arc::ptr_eq(bare, trailing));
}

#[test]
fn test_unknown_paths_fall_through() {
    let table = app_routes();

    assert!(table.resolve("admin").is_none());
    assert!(table.resolve("log").is_none());
    assert!(table.resolve("").is_none());
    assert!(table.resolve("/").is_none());
}

// ---- declaration validation ----

#[test]
fn test_duplicate_declaration_rejected() {
    let err = RouteTableBuilder::new()
        .route(Route::view("reports", placeholder))
        .route(Route::view("reports", placeholder))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RouteTableError::DuplicatePath {
            path: "reports".to_string()
        }
    );
}

#[test]
fn test_duplicate_detected_after_normalization() {
    let err = RouteTableBuilder::new()
        .route(Route::view("login", placeholder))
        .route(Route::view("/login/", placeholder))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RouteTableError::DuplicatePath {
            path: "login".to_string()
        }
    );
}

#[test]
fn test_malformed_declarations_rejected() {
    for bad in ["", "/", "sign up", "a/b", "what?now", "frag#ment"] {
        let result = RouteTableBuilder::new()
            .route(Route::view(bad, placeholder))
            .build();
        assert!(
            matches!(result, Err(RouteTableError::InvalidPath { .. })),
            "expected {bad:?} to be rejected"
        );
    }
}

// ---- table semantics ----

#[test]
fn test_clones_share_route_identity() {
    let table = app_routes();
    let clone = table.clone();

    let original = table.resolve("signup").unwrap();
    let cloned = clone.resolve("signup").unwrap();
    assert!(Arc::ptr_eq(original, cloned));
}
