//! The application's route declarations.
//!
//! One place binds path segments to pages; everything else resolves
//! against the frozen table. Declarations are validated when the table
//! is built, so a duplicate or malformed segment fails here rather
//! than surfacing later as a dead link.

use crate::pages::{LogIn, SignUp};
use crate::route::{Route, RouteTable};

/// Build the route table for the workspace shell.
///
/// Panics if the declarations collide or carry malformed segments.
/// That is a defect in this file, not a runtime condition, so there is
/// nothing for a caller to handle.
pub fn app_routes() -> RouteTable {
    RouteTable::builder()
        .route(Route::page("signup", SignUp::new).name("sign-up"))
        .route(Route::page("login", LogIn::new).name("log-in"))
        .build()
        .expect("app route declarations are distinct and well-formed")
}
